//! Tracing subscriber setup.
//!
//! Nothing is installed unless `RUST_LOG` is set. `CAIRN_LOG_FORMAT=tree`
//! switches from flat lines to an indented span tree.
//!
//! ```bash
//! RUST_LOG=cairn_reuse=debug cairnc reuse program.cairn
//! RUST_LOG=trace CAIRN_LOG_FORMAT=tree cairnc reuse program.cairn
//! ```

use std::sync::Once;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter, Registry};

static TRACING_INIT: Once = Once::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Text,
    Tree,
}

impl LogFormat {
    fn from_env() -> Self {
        match std::env::var("CAIRN_LOG_FORMAT")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "tree" => LogFormat::Tree,
            _ => LogFormat::Text,
        }
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();

        match LogFormat::from_env() {
            LogFormat::Tree => {
                let tree_layer = tracing_tree::HierarchicalLayer::default()
                    .with_indent_amount(2)
                    .with_indent_lines(true)
                    .with_targets(true);
                Registry::default().with(filter).with(tree_layer).init();
            }
            LogFormat::Text => {
                tracing_subscriber::registry()
                    .with(
                        fmt::layer()
                            .with_target(true)
                            .with_level(true),
                    )
                    .with(filter)
                    .init();
            }
        }
    });
}

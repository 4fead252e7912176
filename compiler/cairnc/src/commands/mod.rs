//! Command handlers for the cairn CLI.
//!
//! Each `*_source` function works on program text and returns what the
//! command would print; each `*_file` function wraps it with file reading,
//! terminal output, and the process exit status.

use cairn_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use cairn_diagnostic::Diagnostic;

mod check;
mod reuse;

pub use check::{check_file, check_source, dump_file, dump_source, CheckSummary};
pub use reuse::{reuse_file, reuse_source, ReuseOutput};

/// Read a source file, exiting with an error message if it cannot be read.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("error: cannot read '{path}': {e}");
            std::process::exit(1);
        }
    }
}

/// Emit `diagnostics` to stderr against `source`, followed by a summary.
pub(crate) fn report(source: &str, path: &str, color: ColorMode, diagnostics: &[Diagnostic]) {
    let is_tty = std::io::IsTerminal::is_terminal(&std::io::stderr());
    let mut emitter = TerminalEmitter::stderr(color, is_tty)
        .with_source(source)
        .with_file_path(path);

    emitter.emit_all(diagnostics);
    let errors = diagnostics.iter().filter(|d| d.is_error()).count();
    emitter.emit_summary(errors, diagnostics.len() - errors);
    emitter.flush();
}

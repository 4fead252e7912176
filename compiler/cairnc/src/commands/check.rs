//! The `check` and `dump` commands: read a program without transforming it.

use cairn_diagnostic::emitter::ColorMode;
use cairn_diagnostic::{parse_error, Diagnostic};
use cairn_ir::{parse_program, Ast, Kind, StringInterner};

use super::{read_file, report};

/// Definition counts of a well-formed program.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CheckSummary {
    pub classes: usize,
    pub traits: usize,
    pub aliases: usize,
    /// Classes whose `inherit` slot still holds a type.
    pub pending: usize,
}

impl CheckSummary {
    fn of(ast: &Ast) -> Self {
        let mut summary = CheckSummary::default();
        for id in ast.preorder(ast.root()) {
            match ast.kind(id) {
                Kind::Class => {
                    summary.classes += 1;
                    if ast.has_pending_inherit(id) {
                        summary.pending += 1;
                    }
                }
                Kind::Trait => summary.traits += 1,
                Kind::TypeAlias => summary.aliases += 1,
                _ => {}
            }
        }
        summary
    }
}

/// Read and validate a program.
pub fn check_source(source: &str) -> Result<CheckSummary, Diagnostic> {
    let interner = StringInterner::new();
    let ast = parse_program(source, &interner).map_err(|err| parse_error(&err))?;
    Ok(CheckSummary::of(&ast))
}

/// Read a program and print it back in canonical layout.
pub fn dump_source(source: &str) -> Result<String, Diagnostic> {
    let interner = StringInterner::new();
    let ast = parse_program(source, &interner).map_err(|err| parse_error(&err))?;
    Ok(ast.dump(&interner))
}

pub fn check_file(path: &str, color: ColorMode) {
    let source = read_file(path);
    match check_source(&source) {
        Ok(summary) => println!(
            "OK: {path} ({} classes, {} traits, {} aliases, {} inheriting)",
            summary.classes, summary.traits, summary.aliases, summary.pending
        ),
        Err(diag) => {
            report(&source, path, color, &[diag]);
            std::process::exit(1);
        }
    }
}

pub fn dump_file(path: &str, color: ColorMode) {
    let source = read_file(path);
    match dump_source(&source) {
        Ok(printed) => print!("{printed}"),
        Err(diag) => {
            report(&source, path, color, &[diag]);
            std::process::exit(1);
        }
    }
}

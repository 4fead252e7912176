//! The `reuse` command: run code reuse to a fixpoint and print the result.

use cairn_diagnostic::{cyclic_inheritance, parse_error, Diagnostic, ErrorCode};
use cairn_ir::{parse_program, StringInterner};
use cairn_pass::{run_to_fixpoint, FixpointStats, PassConfig, PassError};
use cairn_reuse::CodeReuse;

use super::{read_file, report};
use crate::options::ReuseOptions;

/// Result of running code reuse over a well-formed program.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReuseOutput {
    /// The transformed program in canonical layout.
    pub printed: String,
    pub stats: FixpointStats,
    /// One error per class left unflattened by an inheritance cycle.
    pub diagnostics: Vec<Diagnostic>,
}

/// Read a program and flatten its inheritance.
///
/// Fails only when the program cannot be read or the pass does not settle
/// within `config.max_iterations` rounds.
#[tracing::instrument(level = "debug", skip_all)]
pub fn reuse_source(source: &str, config: &PassConfig) -> Result<ReuseOutput, Diagnostic> {
    let interner = StringInterner::new();
    let mut ast = parse_program(source, &interner).map_err(|err| parse_error(&err))?;

    let mut pass = CodeReuse::new();
    let stats = run_to_fixpoint(&mut ast, &mut pass, config).map_err(|err| no_fixpoint(&err))?;

    let diagnostics = pass
        .stranded()
        .iter()
        .map(|&class| {
            let name = interner.lookup(ast.name(class));
            cyclic_inheritance(name, ast.span(ast.inherit(class)))
        })
        .collect();

    Ok(ReuseOutput {
        printed: ast.dump(&interner),
        stats,
        diagnostics,
    })
}

fn no_fixpoint(err: &PassError) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2002)
        .with_message(err.to_string())
        .with_suggestion("raise the limit with `--max-iterations=N`")
}

pub fn reuse_file(path: &str, options: &ReuseOptions) {
    let source = read_file(path);
    let output = match reuse_source(&source, &options.pass) {
        Ok(output) => output,
        Err(diag) => {
            report(&source, path, options.color, &[diag]);
            std::process::exit(1);
        }
    };

    if options.verbose {
        eprintln!(
            "codereuse: {} changes in {} rounds",
            output.stats.changes, output.stats.iterations
        );
    }

    if !output.diagnostics.is_empty() {
        report(&source, path, options.color, &output.diagnostics);
        std::process::exit(1);
    }

    print!("{}", output.printed);
}

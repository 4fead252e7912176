//! Command-line options shared by the commands.

use cairn_diagnostic::emitter::ColorMode;
use cairn_pass::PassConfig;

/// Options for `cairnc reuse`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReuseOptions {
    pub pass: PassConfig,
    pub color: ColorMode,
    /// Print fixpoint statistics to stderr.
    pub verbose: bool,
}

impl Default for ReuseOptions {
    fn default() -> Self {
        ReuseOptions {
            pass: PassConfig::default(),
            color: ColorMode::Auto,
            verbose: false,
        }
    }
}

/// Parse the arguments following `cairnc <command>`.
///
/// Returns the file path and options. Flags may come before or after the
/// path; the first non-flag argument is the path.
pub fn parse_reuse_options(args: &[String]) -> Result<(String, ReuseOptions), String> {
    let mut options = ReuseOptions::default();
    let mut path = None;

    for arg in args {
        if let Some(value) = arg.strip_prefix("--max-iterations=") {
            options.pass.max_iterations = match value.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(format!("invalid --max-iterations value '{value}'")),
            };
        } else if arg == "--no-color" {
            options.color = ColorMode::Never;
        } else if arg == "--verbose" || arg == "-v" {
            options.verbose = true;
        } else if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(format!("unexpected argument '{arg}'"));
        }
    }

    let path = path.ok_or_else(|| "missing file path".to_owned())?;
    Ok((path, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn test_defaults() {
        let (path, options) = parse_reuse_options(&args(&["a.cairn"])).unwrap();
        assert_eq!(path, "a.cairn");
        assert_eq!(options, ReuseOptions::default());
        assert_eq!(options.pass.max_iterations, 64);
    }

    #[test]
    fn test_flags_in_any_position() {
        let (path, options) =
            parse_reuse_options(&args(&["--no-color", "a.cairn", "--max-iterations=3", "-v"]))
                .unwrap();
        assert_eq!(path, "a.cairn");
        assert_eq!(options.pass.max_iterations, 3);
        assert_eq!(options.color, ColorMode::Never);
        assert!(options.verbose);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(parse_reuse_options(&args(&[])).is_err());
        assert!(parse_reuse_options(&args(&["a", "b"])).is_err());
        assert!(parse_reuse_options(&args(&["a", "--max-iterations=0"])).is_err());
        assert!(parse_reuse_options(&args(&["a", "--max-iterations=x"])).is_err());
        assert!(parse_reuse_options(&args(&["a", "--fast"])).is_err());
    }
}

//! cairn compiler CLI.

use cairn_diagnostic::emitter::ColorMode;
use cairnc::commands::{check_file, dump_file, reuse_file};
use cairnc::options::parse_reuse_options;

fn main() {
    cairnc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "reuse" => match parse_reuse_options(&args[2..]) {
            Ok((path, options)) => reuse_file(&path, &options),
            Err(message) => {
                eprintln!("error: {message}");
                eprintln!("Usage: cairnc reuse <file> [--max-iterations=N] [--no-color] [-v]");
                std::process::exit(1);
            }
        },
        "check" | "dump" => {
            let mut color = ColorMode::Auto;
            let mut file_path = None;
            for arg in args.iter().skip(2) {
                if arg == "--no-color" {
                    color = ColorMode::Never;
                } else if !arg.starts_with('-') && file_path.is_none() {
                    file_path = Some(arg.as_str());
                }
            }

            let Some(path) = file_path else {
                eprintln!("error: missing file path");
                eprintln!("Usage: cairnc {command} <file> [--no-color]");
                std::process::exit(1);
            };

            if command == "check" {
                check_file(path, color);
            } else {
                dump_file(path, color);
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" => {
            println!("cairnc {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("cairn compiler");
    println!();
    println!("Usage: cairnc <command> [options]");
    println!();
    println!("Commands:");
    println!("  reuse <file>         Flatten inherited members into class bodies");
    println!("  check <file>         Read and validate a program");
    println!("  dump <file>          Print a program in canonical layout");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --max-iterations=N  Rounds allowed before giving up (default: 64)");
    println!("  --no-color          Disable colored diagnostics");
    println!("  --verbose, -v       Print fixpoint statistics (reuse only)");
    println!();
    println!("Environment:");
    println!("  RUST_LOG            Enable logging, e.g. RUST_LOG=cairn_reuse=debug");
    println!("  CAIRN_LOG_FORMAT    `tree` for indented span output");
    println!();
    println!("Examples:");
    println!("  cairnc reuse shapes.cairn");
    println!("  cairnc reuse shapes.cairn --max-iterations=8 -v");
    println!("  cairnc check shapes.cairn");
}

//! SNBT command-line tool.

use snbtc::commands::{check_file, explain_error, parse_file, Options};

fn main() {
    snbtc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let succeeded = match args[1].as_str() {
        command @ ("parse" | "check") => {
            let Some((path, options)) = parse_input_args(command, &args[2..]) else {
                std::process::exit(1);
            };
            if command == "parse" {
                parse_file(&path, options)
            } else {
                check_file(&path, options)
            }
        }
        "explain" | "--explain" => {
            if args.len() < 3 {
                eprintln!("Usage: snbt explain <ERROR_CODE>");
                eprintln!("Example: snbt explain E1016");
                std::process::exit(1);
            }
            explain_error(&args[2])
        }
        "help" | "--help" | "-h" => {
            print_usage();
            true
        }
        "version" | "--version" | "-V" => {
            println!("snbt {}", env!("CARGO_PKG_VERSION"));
            true
        }
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            false
        }
    };

    if !succeeded {
        std::process::exit(1);
    }
}

/// Split `[options] <file|->` for `parse` and `check`.
fn parse_input_args(command: &str, args: &[String]) -> Option<(String, Options)> {
    let mut options = Options::default();
    let mut path = None;

    for arg in args {
        if arg.starts_with("--") {
            if let Err(message) = options.apply_flag(arg) {
                eprintln!("error: {message}");
                return None;
            }
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            eprintln!("error: unexpected argument '{arg}'");
            return None;
        }
    }

    let Some(path) = path else {
        eprintln!("Usage: snbt {command} [--compound] [--color=auto|always|never] <file|->");
        return None;
    };
    Some((path, options))
}

fn print_usage() {
    println!("snbt {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: snbt <command> [options]");
    println!();
    println!("Commands:");
    println!("  parse <file|->     Parse and print the value as compact SNBT");
    println!("  check <file|->     Parse and report errors only");
    println!("  explain <code>     Describe an error code");
    println!("  help               Show this message");
    println!("  version            Show version");
    println!();
    println!("Options for parse and check:");
    println!("  --compound                    Require a compound at the top level");
    println!("  --color=auto|always|never     Colorize diagnostics");
    println!();
    println!("Environment:");
    println!("  RUST_LOG=snbt_parse=debug     Enable logging");
    println!("  SNBT_LOG_TREE=1               Log spans as a tree");
}

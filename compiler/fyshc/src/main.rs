//! Fysh front-end CLI.

use std::io;

use fysh_diagnostic::emitter::ColorMode;
use fyshc::commands::{
    check_file, encode_integers, explain_error, finish, glyphs_file, lex_file, parse_file,
    CliError, Reporter, SourceInput,
};

fn main() {
    fyshc::init_tracing();

    let mut color = if std::env::var_os("NO_COLOR").is_some() {
        ColorMode::Never
    } else {
        ColorMode::Auto
    };
    let mut args: Vec<String> = Vec::new();
    for arg in std::env::args().skip(1) {
        if let Some(value) = arg.strip_prefix("--color=") {
            let Some(mode) = ColorMode::from_flag(value) else {
                eprintln!("error: invalid --color value '{value}' (expected auto, always or never)");
                std::process::exit(1);
            };
            color = mode;
        } else {
            args.push(arg);
        }
    }

    let Some(command) = args.first() else {
        print_usage();
        return;
    };

    let mut out = io::stdout().lock();
    let mut reporter = Reporter::stderr(color);

    let result = match command.as_str() {
        "parse" | "lex" | "check" | "glyphs" => {
            let Some(path) = args.get(1) else {
                eprintln!("Usage: fysh {command} <file.fysh | ->");
                std::process::exit(1);
            };
            SourceInput::read(path).and_then(|input| match command.as_str() {
                "parse" => parse_file(&input, &mut out, &mut reporter),
                "lex" => lex_file(&input, &mut out, &mut reporter),
                "check" => check_file(&input, &mut out, &mut reporter),
                _ => glyphs_file(&input, &mut out, &mut reporter),
            })
        }
        "encode" => {
            if args.len() < 2 {
                eprintln!("Usage: fysh encode <integer>...");
                eprintln!("Example: fysh encode 5 -1");
                std::process::exit(1);
            }
            encode_integers(&args[1..], &mut out)
        }
        "explain" | "--explain" => {
            let Some(code) = args.get(1) else {
                eprintln!("Usage: fysh explain <ERROR_CODE>");
                eprintln!("Example: fysh explain E1003");
                std::process::exit(1);
            };
            explain_error(code, &mut out)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("fysh {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    match finish(result, &mut out) {
        Ok(()) => {}
        // The diagnostic is already on stderr.
        Err(CliError::Reported { .. }) => std::process::exit(1),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Fysh front end");
    println!();
    println!("Usage: fysh [--color=auto|always|never] <command> [args]");
    println!();
    println!("Commands:");
    println!("  parse <file>         Print the canonical rendering of a program");
    println!("  lex <file>           Tokenize and display tokens");
    println!("  check <file>         Scan and parse, reporting the first error");
    println!("  glyphs <file>        Reprint a program in canonical glyphs");
    println!("  encode <int>...      Print glyph literals for decimal integers");
    println!("  explain <code>       Explain an error code (e.g., E1003)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("A file name of `-` reads standard input.");
    println!();
    println!("Environment:");
    println!("  NO_COLOR             Disable colored diagnostics");
    println!("  RUST_LOG             Enable tracing (e.g., RUST_LOG=fysh_parse=trace)");
    println!("  FYSH_LOG_TREE=1      Render tracing output as a tree");
    println!();
    println!("Examples:");
    println!("  fysh parse blink.fysh");
    println!("  echo '><{{({{o> ~' | fysh parse -");
    println!("  fysh encode 5 -1                # ><{{({{> and <}}><");
    println!("  fysh explain E1003");
}

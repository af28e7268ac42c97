//! Flag handling and password output for the command line.

use std::io::Write;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use zeroize::Zeroize;

use mkpass::{Classes, Generate, Password};

use super::{CliFlags, parse};

/// Parse `args`, generate, and print. Returns the process exit code:
/// 0 on success, 1 when generation fails, 2 on a usage error.
pub fn run(args: &[String]) -> ExitCode {
    let flags = match parse(args) {
        Ok(flags) => flags,
        Err(e) => {
            eprintln!("mkpass: {e}");
            eprintln!("Try 'mkpass --help' for a list of options.");
            return ExitCode::from(2);
        }
    };

    if flags.help {
        print_help();
        return ExitCode::SUCCESS;
    }
    if flags.version {
        println!("mkpass {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    init_tracing(flags.quiet);

    let mut request = Password::from_env();
    request.classes = classes_from(&flags);
    if let Some(length) = flags.length {
        request.length = length;
    }

    let count = flags.number.unwrap_or(1);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for _ in 0..count {
        let mut password = match request.generate() {
            Ok(password) => password,
            Err(e) => {
                eprintln!("mkpass: {e}");
                return ExitCode::FAILURE;
            }
        };
        let printed = writeln!(out, "{password}");
        password.zeroize();
        if printed.is_err() {
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

fn classes_from(flags: &CliFlags) -> Classes {
    Classes {
        lower: !flags.no_lower,
        upper: !flags.no_upper,
        digits: !flags.no_digits,
        symbols: !flags.no_symbols,
    }
}

/// Diagnostics go to stderr so generated passwords stay alone on stdout.
fn init_tracing(quiet: bool) {
    let default_filter = if quiet { "error" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn print_help() {
    println!("mkpass - high-entropy password generator");
    println!();
    println!("USAGE:");
    println!("  mkpass [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -l, --length <N>   Characters per password (default: 16, or PWD_MIN_LENGTH)");
    println!("  -n, --number <N>   How many passwords to generate (default: 1)");
    println!("      --no-lower     Exclude lowercase letters");
    println!("      --no-upper     Exclude uppercase letters");
    println!("      --no-digits    Exclude digits");
    println!("      --no-symbols   Exclude symbols (!#$*-_)");
    println!("  -q, --quiet        Suppress diagnostics, print passwords only");
    println!("  -h, --help         Display this help message");
    println!("  -v, --version      Display version");
    println!();
    println!("ENVIRONMENT:");
    println!("  PWD_MIN_LENGTH     Raise the minimum length (effective above 16)");
    println!("  PWD_MAX_LENGTH     Lower the maximum length (effective below 512)");
    println!();
    println!("EXAMPLES:");
    println!("  mkpass                   One password, 16 characters");
    println!("  mkpass -l 32             One password, 32 characters");
    println!("  mkpass -l 20 -n 3        Three passwords, 20 characters each");
    println!("  mkpass --no-symbols      Alphanumeric only");
}

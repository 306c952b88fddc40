//! # Notepad
//!
//! Main entry point for the console notepad.

use notepad_console::{ConsoleConfig, ConsoleError, ConsoleRuntime};
use services_logger::LogLevel;
use services_settings::persistence;
use std::env;
use std::fs;
use std::io::{self, BufRead, BufReader};
use std::process;
use tracing_subscriber::EnvFilter;

/// Parsed command line
struct Args {
    config: ConsoleConfig,
    settings: Option<String>,
    script: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("notepad");

    let parsed = parse_args(&args).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        print_usage(program);
        process::exit(1);
    });

    if let Err(e) = run(parsed) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(mut args: Args) -> Result<(), ConsoleError> {
    if let Some(path) = &args.settings {
        let bytes = fs::read(path)?;
        args.config.settings = persistence::deserialize_settings(&bytes)?;
    }

    let input: Box<dyn BufRead> = match &args.script {
        Some(path) => Box::new(BufReader::new(fs::File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };

    tracing::info!(script = ?args.script, "starting notepad console");
    let mut runtime = ConsoleRuntime::new(args.config, input, io::stdout())?;
    runtime.run()
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut config = ConsoleConfig::default();
    let mut settings = None;
    let mut script = None;
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--settings" | "-c" => {
                i += 1;
                let path = args
                    .get(i)
                    .ok_or_else(|| "Missing value for --settings".to_string())?;
                settings = Some(path.clone());
            }
            "--script" | "-s" => {
                i += 1;
                let path = args
                    .get(i)
                    .ok_or_else(|| "Missing value for --script".to_string())?;
                script = Some(path.clone());
            }
            "--verbose" | "-v" => {
                config.log_level = LogLevel::Debug;
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                process::exit(0);
            }
            other if other.starts_with('-') => {
                return Err(format!("Unknown option: {}", other));
            }
            path => {
                if config.initial_path.is_some() {
                    return Err(format!("Only one file can be opened: {}", path));
                }
                config.initial_path = Some(path.to_string());
            }
        }
        i += 1;
    }

    Ok(Args {
        config,
        settings,
        script,
    })
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [OPTIONS] [FILE]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --settings <FILE>    Settings file (JSON)");
    eprintln!("  -s, --script <FILE>      Read console input from a file");
    eprintln!("  -v, --verbose            Keep debug entries in the :log output");
    eprintln!("  -h, --help               Show this help message");
    eprintln!();
    eprintln!("Type text to append lines; :help-style commands start with ':'");
    eprintln!("  :open [path]  :save  :saveas [path]  :undo  :redo  :close");
    eprintln!("  :key <chord>  :set <text>  :show  :log  :quit");
    eprintln!();
    eprintln!("Set RUST_LOG to control diagnostics on stderr.");
}

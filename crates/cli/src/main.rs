//! tracesort CLI — step-by-step sorting and search traces.
//!
//! Two modes:
//! - **Shell mode**: `tracesort [flags] COMMAND` — one command, print, exit
//! - **Pipe mode**: `tracesort serve-json` — JSON request bodies line by line from stdin

mod commands;
mod format;
mod parse;
mod pipe;

use std::process;

use tracesort_executor::Executor;
use tracing::Level;

use commands::build_cli;
use format::{format_error, format_output, OutputMode};
use parse::{matches_to_action, matches_to_options, CliAction};

fn main() {
    let cli = build_cli();
    let matches = cli.get_matches();

    init_logging(&matches);

    // Determine output mode
    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else if matches.get_flag("raw") {
        OutputMode::Raw
    } else {
        OutputMode::Human
    };

    let options = match matches_to_options(&matches) {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("(error) {}", e);
            process::exit(1);
        }
    };
    let executor = Executor::with_options(options);

    let exit_code = match matches_to_action(&matches) {
        Ok(CliAction::Execute(cmd)) => match executor.execute(cmd) {
            Ok(output) => {
                let formatted = format_output(&output, output_mode);
                if !formatted.is_empty() {
                    println!("{}", formatted);
                }
                0
            }
            Err(e) => {
                eprintln!("{}", format_error(&e, output_mode));
                1
            }
        },
        Ok(CliAction::ServeJson) => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            match pipe::run_serve_json(&executor, stdin.lock(), stdout.lock()) {
                Ok(code) => code,
                Err(e) => {
                    eprintln!("(error) {}", e);
                    1
                }
            }
        }
        Err(e) => {
            eprintln!("(error) {}", e);
            1
        }
    };
    process::exit(exit_code);
}

/// Install the stderr log subscriber: warnings by default, `-v` for debug,
/// `-vv` for trace, `--quiet` for errors only.
fn init_logging(matches: &clap::ArgMatches) {
    let level = if matches.get_flag("quiet") {
        Level::ERROR
    } else {
        match matches.get_count("verbose") {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

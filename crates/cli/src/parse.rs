//! ArgMatches → Command conversion.
//!
//! Translates clap's parsed arguments into the appropriate action:
//! - Trace commands → `CliAction::Execute(Command)`
//! - `serve-json` → `CliAction::ServeJson`

use clap::ArgMatches;
use tracesort_executor::{Command, ExecutorOptions, Number, ValidationMode};

/// The result of parsing the command line.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// A command to execute once.
    Execute(Command),
    /// Line-by-line JSON request loop on stdin.
    ServeJson,
}

/// Convert clap ArgMatches into a CliAction.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    let (sub_name, sub_matches) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    match sub_name {
        "sort" => parse_sort(sub_matches),
        "search" => parse_search(sub_matches),
        "generate" => parse_generate(sub_matches),
        "algorithms" => Ok(CliAction::Execute(Command::ListAlgorithms)),
        "serve-json" => Ok(CliAction::ServeJson),
        other => Err(format!("Unknown command: {}", other)),
    }
}

/// Executor options from the global flags.
pub fn matches_to_options(matches: &ArgMatches) -> Result<ExecutorOptions, String> {
    let mut opts = ExecutorOptions::new();
    if let Some(raw) = matches.get_one::<String>("max-len") {
        let limit = raw
            .parse::<usize>()
            .map_err(|e| format!("Invalid max-len: {}", e))?;
        opts = opts.max_input_len(if limit == 0 { None } else { Some(limit) });
    }
    if matches.get_flag("permissive") {
        opts = opts.validation(ValidationMode::Permissive);
    }
    Ok(opts)
}

fn parse_values(matches: &ArgMatches) -> Result<Vec<Number>, String> {
    matches
        .get_many::<String>("values")
        .map(|vals| vals.map(|s| parse_sequence_arg(s)).collect::<Result<Vec<_>, _>>())
        .transpose()
        .map(|v| v.map(|chunks| chunks.concat()).unwrap_or_default())
}

/// Parse one positional argument; commas split it further so both
/// `3 1 2` and `3,1,2` work.
fn parse_sequence_arg(arg: &str) -> Result<Vec<Number>, String> {
    arg.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<Number>())
        .collect()
}

fn parse_sort(matches: &ArgMatches) -> Result<CliAction, String> {
    let algorithm = matches.get_one::<String>("algorithm").cloned();
    let values = parse_values(matches)?;
    Ok(CliAction::Execute(Command::Sort { algorithm, values }))
}

fn parse_search(matches: &ArgMatches) -> Result<CliAction, String> {
    let target = matches
        .get_one::<String>("target")
        .map(|s| s.parse::<Number>())
        .transpose()
        .map_err(|e| format!("Invalid target: {}", e))?;
    let values = parse_values(matches)?;
    Ok(CliAction::Execute(Command::Search { values, target }))
}

fn parse_generate(matches: &ArgMatches) -> Result<CliAction, String> {
    let size = matches
        .get_one::<String>("size")
        .map(|s| s.parse::<usize>())
        .transpose()
        .map_err(|e| format!("Invalid size: {}", e))?
        .unwrap_or(50);
    let seed = matches
        .get_one::<String>("seed")
        .map(|s| s.parse::<u64>())
        .transpose()
        .map_err(|e| format!("Invalid seed: {}", e))?;
    Ok(CliAction::Execute(Command::Generate { size, seed }))
}

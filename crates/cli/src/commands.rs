//! Clap command tree.

use clap::{Arg, ArgAction, Command};

/// Build the top-level `tracesort` command.
pub fn build_cli() -> Command {
    Command::new("tracesort")
        .about("Step-by-step traces of sorting and binary search")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print wire-format JSON")
                .action(ArgAction::SetTrue)
                .global(true)
                .conflicts_with("raw"),
        )
        .arg(
            Arg::new("raw")
                .long("raw")
                .help("Print bare values, one step per line")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("More log output (repeatable)")
                .action(ArgAction::Count)
                .global(true),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only log errors")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("max-len")
                .long("max-len")
                .value_name("N")
                .help("Largest accepted sequence length (0 = unlimited)")
                .global(true),
        )
        .arg(
            Arg::new("permissive")
                .long("permissive")
                .help("Skip input validation")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("sort")
                .about("Generate a sort trace")
                .arg(
                    Arg::new("algorithm")
                        .short('a')
                        .long("algorithm")
                        .value_name("NAME")
                        .help("bubble, selection, insertion, merge, quick, heap or radix"),
                )
                .arg(values_arg()),
        )
        .subcommand(
            Command::new("search")
                .about("Sort the values, then trace a binary search")
                .arg(
                    Arg::new("target")
                        .short('t')
                        .long("target")
                        .value_name("N")
                        .allow_negative_numbers(true)
                        .required(true),
                )
                .arg(values_arg()),
        )
        .subcommand(
            Command::new("generate")
                .about("Print a random sequence")
                .arg(
                    Arg::new("size")
                        .short('n')
                        .long("size")
                        .value_name("N")
                        .default_value("50"),
                )
                .arg(Arg::new("seed").long("seed").value_name("SEED")),
        )
        .subcommand(Command::new("algorithms").about("List algorithm identifiers"))
        .subcommand(
            Command::new("serve-json")
                .about("Answer one JSON request per stdin line with one JSON response line"),
        )
}

fn values_arg() -> Arg {
    Arg::new("values")
        .value_name("VALUES")
        .help("Sequence elements")
        .num_args(0..)
        .allow_negative_numbers(true)
}

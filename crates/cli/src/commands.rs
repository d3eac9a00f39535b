//! Clap command tree definition.

use clap::{Arg, ArgAction, Command};

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("tagdex")
        .about("Transcode exported tag-value rows into search index documents")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(build_transcode())
        .subcommand(build_config())
}

fn build_transcode() -> Command {
    Command::new("transcode")
        .about("Read JSON-lines export rows, write JSON-lines search documents")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Config file (default: ./tagdex.toml when present)"),
        )
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .help("Input file, or - for stdin (default: -)"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Output file, or - for stdout (default: -)"),
        )
        .arg(
            Arg::new("on-error")
                .long("on-error")
                .value_parser(["abort", "skip"])
                .help("Failure policy, overrides [batch] on_error"),
        )
        .arg(
            Arg::new("parallel")
                .long("parallel")
                .help("Transcode rows on a thread pool")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_parser(["error", "warn", "info", "debug", "trace"])
                .default_value("warn")
                .help("Log level for stderr diagnostics"),
        )
}

fn build_config() -> Command {
    Command::new("config").about("Print the default tagdex.toml")
}

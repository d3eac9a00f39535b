//! tagdex CLI - transcodes a JSON-lines export of tag rows into JSON-lines
//! search documents.
//!
//! - `tagdex transcode [--config FILE] [--input FILE|-] [--output FILE|-]`
//! - `tagdex config` prints the default `tagdex.toml`

mod commands;
mod rows;

use std::path::Path;
use std::process;

use clap::ArgMatches;
use tagdex_transcode::config::CONFIG_FILE_NAME;
use tagdex_transcode::{transcode_batch, ErrorPolicy, TagdexConfig, Transcoder};
use tracing::Level;

use commands::build_cli;

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("config", _)) => print!("{}", TagdexConfig::default_toml()),
        Some(("transcode", sub)) => {
            init_logging(sub);
            if let Err(e) = run_transcode(sub) {
                eprintln!("(error) {}", e);
                process::exit(1);
            }
        }
        _ => {
            eprintln!("(error) unknown command");
            process::exit(2);
        }
    }
}

fn init_logging(matches: &ArgMatches) {
    let level = matches
        .get_one::<String>("log-level")
        .and_then(|s| s.parse::<Level>().ok())
        .unwrap_or(Level::WARN);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(matches: &ArgMatches) -> Result<TagdexConfig, String> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => TagdexConfig::from_file(Path::new(path)).map_err(|e| e.to_string())?,
        None if Path::new(CONFIG_FILE_NAME).exists() => {
            TagdexConfig::from_file(Path::new(CONFIG_FILE_NAME)).map_err(|e| e.to_string())?
        }
        None => TagdexConfig::default(),
    };

    if let Some(policy) = matches.get_one::<String>("on-error") {
        config.batch.on_error = policy.parse::<ErrorPolicy>().map_err(|e| e.to_string())?;
    }
    if matches.get_flag("parallel") {
        config.batch.parallel = true;
    }
    Ok(config)
}

fn run_transcode(matches: &ArgMatches) -> Result<(), String> {
    let config = load_config(matches)?;
    let input = matches.get_one::<String>("input").map_or("-", |s| s.as_str());
    let output = matches.get_one::<String>("output").map_or("-", |s| s.as_str());

    let rows = rows::read_rows(rows::open_input(input)?, &config.input)?;
    let report =
        transcode_batch(&Transcoder::new(), rows, &config.batch).map_err(|e| e.to_string())?;

    let mut writer = rows::open_output(output)?;
    rows::write_documents(&mut writer, &report.documents, &config.output)?;

    if !report.failures.is_empty() {
        eprintln!(
            "{} of {} rows skipped",
            report.failures.len(),
            report.rows()
        );
    }
    Ok(())
}

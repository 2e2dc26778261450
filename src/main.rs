// Missing Strings
// Lists reference strings that a translated resource file does not provide

// IMPORTS ------------------>>

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use missing_strings::config_validation::load_and_validate_config;
use missing_strings::core::logging;
use missing_strings::{App, AuditPaths};

//--------------------------------------------------------<<

#[derive(Debug, Parser)]
#[command(name = "missing-strings")]
#[command(about = "List reference strings that are missing from a translated resource file", long_about = None)]
struct Cli {
    /// Reference-language resource file (source of truth)
    reference_file: PathBuf,

    /// Translated resource file to audit
    target_file: PathBuf,

    /// File with one never-translated key per line
    ignore_file: PathBuf,

    /// YAML file overriding the built-in defaults
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log more to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

// ┌──────────────────────────────────────────────────────────────────────────────┐
// │                               MAIN ENTRY POINT                               │
// └──────────────────────────────────────────────────────────────────────────────┘

fn main() -> Result<()> {
    let cli = Cli::parse();

    let app_config = load_and_validate_config(cli.config.as_deref())?;
    logging::init(logging::level_for(cli.verbose, &app_config.log_level));

    let app = App::new(
        app_config,
        AuditPaths {
            reference: cli.reference_file,
            target: cli.target_file,
            ignore: cli.ignore_file,
        },
    );

    let mut out = BufWriter::new(io::stdout().lock());
    app.run(&mut out)?;

    Ok(())
}

// Debug script to show how a resource file is parsed

use anyhow::Result;
use clap::Parser;
use std::collections::HashMap;
use std::path::PathBuf;

use missing_strings::config_validation::load_and_validate_config;
use missing_strings::core::logging;
use missing_strings::operations::load_resource;

#[derive(Debug, Parser)]
#[command(name = "debug-entries")]
#[command(about = "Dump the string declarations parsed from one resource file", long_about = None)]
struct Cli {
    /// Resource file to parse
    resource_file: PathBuf,

    /// YAML file overriding the built-in defaults (e.g. a narrower string_marker)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_and_validate_config(cli.config.as_deref())?;
    logging::init("debug");

    let path = cli.resource_file;
    let entries = load_resource(&path, &config.string_marker)?;

    println!("=== FILE INFO ===");
    println!("File: {}", path.display());
    println!("Marker: {:?}", config.string_marker);
    println!("Entries: {}", entries.len());
    println!();

    println!("=== ENTRIES ===");
    for entry in &entries {
        let value = if entry.value.is_empty() {
            "[EMPTY]".to_string()
        } else if entry.value.chars().count() > 60 {
            format!("{}...", entry.value.chars().take(60).collect::<String>())
        } else {
            entry.value.clone()
        };
        println!("  [{:>5}] {} = {}", entry.line_number, entry.key, value);
    }
    println!();

    // Keys declared more than once; the last value wins in the differ
    println!("=== DUPLICATE KEYS ===");
    let mut seen = HashMap::new();
    let mut found = false;
    for entry in &entries {
        if let Some(first) = seen.insert(entry.key.as_str(), entry.line_number) {
            println!("  {} (lines {} and {})", entry.key, first, entry.line_number);
            found = true;
        }
    }
    if !found {
        println!("  none");
    }

    Ok(())
}

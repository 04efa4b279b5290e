//! CLI smoke entry point.
//!
//! # Responsibility
//! - Seed the sample catalog and print a deterministic summary.
//! - Verify `gogreen_core` wiring without a UI host.

use gogreen_core::{core_version, init_logging_from_config, Catalog, CoreConfig, SampleSeeder};
use std::process::ExitCode;

/// Optional inline JSON overrides for `CoreConfig`.
const CONFIG_ENV: &str = "GOGREEN_CONFIG_JSON";

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("gogreen_cli status=error error={err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::var(CONFIG_ENV) {
        Ok(raw) => CoreConfig::from_json_str(&raw)?,
        Err(_) => CoreConfig::default(),
    };
    init_logging_from_config(&config)?;

    let catalog = Catalog::seeded(config, &SampleSeeder)?;
    println!("gogreen_core version={}", core_version());
    for group in catalog.groups(&catalog.config().group_set_name)? {
        let group = group.borrow();
        println!(
            "group id={} items={} top_items={} title={}",
            group.unique_id(),
            group.items().len(),
            group.top_items().len(),
            group.title()
        );
        for entry in group.top_items() {
            let entry = entry.borrow();
            println!(
                "  item id={} span={}x{} title={}",
                entry.unique_id(),
                entry.col_span(),
                entry.row_span(),
                entry.title()
            );
        }
    }
    Ok(())
}

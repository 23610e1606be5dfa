//! OSPF route summarization for Fortigate.
//!
//! Reads a router description, summarizes its advertised networks into fewer
//! CIDR blocks and renders a Fortigate `config router ospf` file.
//!
//! # Modules
//! - [`models`] - Prefix, summary mapping and router description types
//! - [`processing`] - Summarization engine
//! - [`input`] - Description file parsing
//! - [`output`] - Fortigate rendering and report
//! - [`config`] - Run settings and logging

pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod output;
pub mod processing;

use colored::Colorize;
use std::error::Error;

pub use config::Settings;
pub use error::GeneratorError;
pub use processing::{get_optimized_networks, OptimizedNetworks};

/// Read, summarize, render and write one configuration.
///
/// Returns the report; printing it is left to the caller.
pub fn run(settings: &Settings) -> Result<output::SummaryReport, Box<dyn Error>> {
    log::info!("#Start run() input={}", settings.input.display());

    let config = input::read_description_file(&settings.input)?;
    input::validate(&config, &settings.input.display().to_string())?;

    let optimized = get_optimized_networks(&config.networks);
    let rendered = output::render_fortigate(&config, &optimized);
    output::write_config(&settings.output, &rendered)?;
    println!(
        "Configuration written to {}",
        settings.output.display().to_string().cyan()
    );

    let report = output::SummaryReport::new(config.networks.len(), &optimized);
    if let Some(json_path) = &settings.json_report {
        report.write_json(json_path)?;
    }
    Ok(report)
}

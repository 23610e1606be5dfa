//! Route summarization report.

use crate::error::GeneratorError;
use crate::models::SummaryMapping;
use crate::processing::OptimizedNetworks;
use colored::Colorize;
use serde::Serialize;
use std::path::Path;

/// Counts and per-summary detail for one run.
#[derive(Serialize, Debug, Clone)]
pub struct SummaryReport {
    pub generated_at: String,
    pub original_count: usize,
    pub optimized_count: usize,
    pub reduction: usize,
    pub reduction_percent: f64,
    pub summaries: SummaryMapping,
}

impl SummaryReport {
    pub fn new(original_count: usize, optimized: &OptimizedNetworks) -> SummaryReport {
        let optimized_count = optimized.networks.len();
        let reduction = original_count.saturating_sub(optimized_count);
        let reduction_percent = if original_count == 0 {
            0.0
        } else {
            (reduction as f64 / original_count as f64 * 1000.0).round() / 10.0
        };
        SummaryReport {
            generated_at: chrono::Local::now().to_rfc3339(),
            original_count,
            optimized_count,
            reduction,
            reduction_percent,
            summaries: optimized.summaries.clone(),
        }
    }

    /// Human readable report, one line per entry.
    pub fn to_text(&self) -> String {
        let mut lines = vec![
            "Route Summarization Report:".to_string(),
            format!("Original networks: {}", self.original_count),
            format!("Optimized networks: {}", self.optimized_count),
            format!("Reduction: {} routes", self.reduction),
            format!("Efficiency: {:.1}%", self.reduction_percent),
        ];
        for entry in self.summaries.iter() {
            lines.push(String::new());
            lines.push(format!("Summary {} includes:", entry.summary));
            for original in &entry.originals {
                lines.push(format!("  - {original}"));
            }
        }
        lines.join("\n")
    }

    /// Print the report to stdout, nothing when no summaries were found.
    pub fn print(&self) {
        if self.summaries.is_empty() {
            log::info!("No summaries found, {} networks kept", self.optimized_count);
            return;
        }
        println!();
        for line in self.to_text().lines() {
            if let Some(rest) = line.strip_prefix("Summary ") {
                println!("{} {}", "Summary".bold(), rest.green());
            } else {
                println!("{line}");
            }
        }
    }

    /// Write the report as pretty JSON.
    pub fn write_json(&self, path: &Path) -> Result<(), GeneratorError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| GeneratorError::Io {
            path: path.display().to_string(),
            source,
        })?;
        log::info!("Wrote JSON report to {}", path.display());
        Ok(())
    }
}

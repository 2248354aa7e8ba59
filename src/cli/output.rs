//! Output formatting for multiple formats
//!
//! Formatters for JSON, YAML, and human-readable text over the two CLI
//! surfaces: a recommended build and a catalog summary.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::catalog::types::Catalog;
use crate::engine::search::RecommendedBuild;

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format (human-friendly, version-control friendly)
    Yaml,
    /// Human-readable formatted text
    Human,
}

/// Catalog summary for the `inspect` command.
#[derive(Debug, Serialize)]
pub struct CatalogSummary {
    pub total_entries: usize,
    pub categories: Vec<CategorySummary>,
}

#[derive(Debug, Serialize)]
pub struct CategorySummary {
    pub category: String,
    pub entries: usize,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

fn summarize(category: &str, prices: Vec<f64>) -> CategorySummary {
    let min_price = prices.iter().copied().reduce(f64::min);
    let max_price = prices.iter().copied().reduce(f64::max);
    CategorySummary {
        category: category.to_string(),
        entries: prices.len(),
        min_price,
        max_price,
    }
}

impl CatalogSummary {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let categories = vec![
            summarize("cpus", catalog.cpus.iter().map(|c| c.price).collect()),
            summarize(
                "motherboards",
                catalog.motherboards.iter().map(|m| m.price).collect(),
            ),
            summarize(
                "ram_modules",
                catalog.ram_modules.iter().map(|r| r.price).collect(),
            ),
            summarize("gpus", catalog.gpus.iter().map(|g| g.price).collect()),
            summarize("storage", catalog.storage.iter().map(|s| s.price).collect()),
            summarize("chassis", catalog.chassis.iter().map(|c| c.price).collect()),
            summarize(
                "power_supplies",
                catalog.power_supplies.iter().map(|p| p.price).collect(),
            ),
            summarize("coolers", catalog.coolers.iter().map(|c| c.price).collect()),
        ];
        Self {
            total_entries: catalog.total_entries(),
            categories,
        }
    }
}

/// Output formatter for recommendation results and catalog summaries
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    /// Creates a new output formatter with the specified format
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a recommended build according to the configured format
    pub fn format_build(&self, build: &RecommendedBuild) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(build)
                .context("Failed to serialize build to JSON"),
            OutputFormat::Yaml => {
                serde_yaml::to_string(build).context("Failed to serialize build to YAML")
            }
            OutputFormat::Human => Ok(self.format_build_human(build)),
        }
    }

    /// Formats a catalog summary according to the configured format
    pub fn format_summary(&self, summary: &CatalogSummary) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(summary)
                .context("Failed to serialize catalog summary to JSON"),
            OutputFormat::Yaml => serde_yaml::to_string(summary)
                .context("Failed to serialize catalog summary to YAML"),
            OutputFormat::Human => Ok(self.format_summary_human(summary)),
        }
    }

    fn format_build_human(&self, build: &RecommendedBuild) -> String {
        let mut out = String::new();
        out.push_str("Recommended build\n");
        out.push_str("=================\n\n");
        out.push_str(&format!(
            "  CPU:          {} ({:.2})\n",
            build.cpu.name, build.cpu.price
        ));
        out.push_str(&format!(
            "  Motherboard:  {} ({:.2})\n",
            build.motherboard.name, build.motherboard.price
        ));
        out.push_str(&format!(
            "  RAM:          {} ({:.2})\n",
            build.ram.name, build.ram.price
        ));
        match &build.gpu {
            Some(gpu) => out.push_str(&format!(
                "  GPU:          {} ({:.2})\n",
                gpu.name, gpu.price
            )),
            None => out.push_str("  GPU:          none\n"),
        }
        match &build.storage {
            Some(storage) => out.push_str(&format!(
                "  Storage:      {} ({:.2})\n",
                storage.name, storage.price
            )),
            None => out.push_str("  Storage:      none\n"),
        }
        out.push_str(&format!(
            "  Case:         {} ({:.2})\n",
            build.chassis.name, build.chassis.price
        ));
        out.push_str(&format!(
            "  Power supply: {} ({:.2}, {} W)\n",
            build.power_supply.name, build.power_supply.price, build.power_supply.wattage
        ));
        match &build.cooler {
            Some(cooler) => out.push_str(&format!(
                "  Cooler:       {} ({:.2})\n",
                cooler.name, cooler.price
            )),
            None => out.push_str("  Cooler:       stock\n"),
        }
        out.push_str(&format!("\n  Total: {:.2}", build.total_price));
        out.push_str(&format!(
            " ({:.1}% of budget)\n",
            build.budget_usage * 100.0
        ));
        out
    }

    fn format_summary_human(&self, summary: &CatalogSummary) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Catalog summary ({} entries)\n\n",
            summary.total_entries
        ));
        for category in &summary.categories {
            match (category.min_price, category.max_price) {
                (Some(min), Some(max)) => out.push_str(&format!(
                    "  {:<15} {:>4} entries  ({:.2} - {:.2})\n",
                    category.category, category.entries, min, max
                )),
                _ => out.push_str(&format!(
                    "  {:<15} {:>4} entries\n",
                    category.category, category.entries
                )),
            }
        }
        out
    }
}

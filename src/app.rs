use std::path::Path;

use anyhow::{Context, Result};
use log::{error, info};

use crate::config::{LegendConfig, MapConfig};
use crate::data::loader::load_facilities;
use crate::data::model::LoadStats;
use crate::error::MapError;
use crate::render::legend::{render_legend_page, Legend};
use crate::render::map::render_map;
use crate::render::write_html;

// ---------------------------------------------------------------------------
// Map command
// ---------------------------------------------------------------------------

/// Load, filter, render and write. Nothing is written unless every step succeeds.
pub fn build_map(config: &MapConfig) -> Result<LoadStats> {
    let set = load_facilities(&config.input, &config.bounds, &config.status)
        .with_context(|| format!("loading {}", config.input.display()))?;
    info!("Rendering {} facilities", set.len());
    let html = render_map(&set, config).context("rendering map")?;
    write_html(&config.output, &html)
        .with_context(|| format!("writing {}", config.output.display()))?;
    Ok(set.stats)
}

/// Run the map command and report the outcome as a success flag.
/// Failures are logged and printed, never propagated.
pub fn run(config: &MapConfig) -> bool {
    match build_map(config) {
        Ok(stats) => {
            for line in summary_lines(&stats, &config.output) {
                println!("{line}");
            }
            true
        }
        Err(err) => {
            error!("{err:#}");
            report_failure(&err);
            false
        }
    }
}

fn summary_lines(stats: &LoadStats, output: &Path) -> Vec<String> {
    vec![
        format!(
            "Mapped {} of {} facilities ({} in range)",
            stats.retained, stats.loaded, stats.in_range
        ),
        format!("Map saved as {}", output.display()),
    ]
}

fn report_failure(err: &anyhow::Error) {
    match err.downcast_ref::<MapError>() {
        Some(MapError::InputNotFound(path)) => {
            println!("Error: {} file not found", path.display());
        }
        Some(MapError::MissingCoordinates { available }) => {
            println!("Error: Could not find latitude/longitude columns");
            println!("Available columns: {available:?}");
        }
        Some(MapError::EmptyResult) => {
            println!("No facilities found in US coordinate range");
        }
        _ => {
            println!("Error creating map: {}", err.root_cause());
        }
    }
}

// ---------------------------------------------------------------------------
// Legend command
// ---------------------------------------------------------------------------

pub fn run_legend(config: &LegendConfig) -> bool {
    let html = render_legend_page(&Legend::facility_default(), config);
    match write_html(&config.output, &html) {
        Ok(()) => {
            println!("Map with legend saved as {}", config.output.display());
            true
        }
        Err(err) => {
            error!("writing {}: {err}", config.output.display());
            println!("Error creating legend map: {err}");
            false
        }
    }
}

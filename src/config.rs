//! Run configuration for the map and legend commands.
//!
//! Defaults reproduce the fixed paths and styling of the single-shot tool;
//! the CLI layer in `main.rs` overrides individual fields.

use std::path::PathBuf;

use crate::data::filter::{BoundingBox, StatusFilter, US_BOUNDS};

pub const DEFAULT_INPUT: &str = "facilities.csv";
pub const DEFAULT_OUTPUT: &str = "location_map.html";
pub const DEFAULT_LEGEND_OUTPUT: &str = "legend_example_map.html";
pub const DEFAULT_TITLE: &str = "Interactive Map of US Facilities";
pub const DEFAULT_ZOOM: f64 = 3.0;
pub const DEFAULT_HEIGHT: u32 = 700;
pub const DEFAULT_MARKER_SIZE: f64 = 10.0;
pub const DEFAULT_MARKER_COLOR: &str = "red";
pub const DEFAULT_MARKER_OPACITY: f64 = 0.7;

/// Marker styling shared by every trace.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerStyle {
    /// Marker diameter in pixels.
    pub size: f64,
    /// CSS colour; ignored for traces coloured by category.
    pub color: String,
    pub opacity: f64,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            size: DEFAULT_MARKER_SIZE,
            color: DEFAULT_MARKER_COLOR.to_string(),
            opacity: DEFAULT_MARKER_OPACITY,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MapConfig {
    pub input: PathBuf,
    /// Overwritten on every successful run.
    pub output: PathBuf,
    pub title: String,
    pub zoom: f64,
    /// Figure height in pixels; width follows the page.
    pub height: u32,
    pub marker: MarkerStyle,
    /// Column whose distinct values get one coloured trace each.
    pub color_by: Option<String>,
    pub bounds: BoundingBox,
    pub status: StatusFilter,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            title: DEFAULT_TITLE.to_string(),
            zoom: DEFAULT_ZOOM,
            height: DEFAULT_HEIGHT,
            marker: MarkerStyle::default(),
            color_by: None,
            bounds: US_BOUNDS,
            status: StatusFilter::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LegendConfig {
    pub output: PathBuf,
    /// Initial map centre (lat, lon).
    pub center: (f64, f64),
    pub zoom: u8,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_LEGEND_OUTPUT),
            center: (40.0, -100.0),
            zoom: 4,
        }
    }
}

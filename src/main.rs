mod app;
mod color;
mod config;
mod data;
mod error;
mod render;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use config::{
    LegendConfig, MapConfig, MarkerStyle, DEFAULT_HEIGHT, DEFAULT_INPUT, DEFAULT_LEGEND_OUTPUT,
    DEFAULT_MARKER_COLOR, DEFAULT_MARKER_OPACITY, DEFAULT_MARKER_SIZE, DEFAULT_OUTPUT,
    DEFAULT_TITLE, DEFAULT_ZOOM,
};
use data::filter::StatusFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    map: MapArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a base map with the facility legend overlaid
    Legend(LegendArgs),
}

#[derive(Args, Debug)]
struct MapArgs {
    #[arg(help = "facility CSV file", short = 'i', long = "input", default_value = DEFAULT_INPUT)]
    input: PathBuf,

    #[arg(help = "output HTML file (overwritten)", short = 'o', long = "output", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    #[arg(help = "map title", long = "title", default_value = DEFAULT_TITLE)]
    title: String,

    #[arg(help = "initial zoom level", long = "zoom", default_value_t = DEFAULT_ZOOM)]
    zoom: f64,

    #[arg(help = "map height in pixels", long = "height", default_value_t = DEFAULT_HEIGHT)]
    height: u32,

    #[arg(help = "marker size in pixels", long = "marker-size", default_value_t = DEFAULT_MARKER_SIZE)]
    marker_size: f64,

    #[arg(help = "marker colour", long = "marker-color", default_value = DEFAULT_MARKER_COLOR)]
    marker_color: String,

    #[arg(help = "marker opacity", long = "marker-opacity", default_value_t = DEFAULT_MARKER_OPACITY)]
    marker_opacity: f64,

    #[arg(help = "colour markers by the values of this column", long = "color-by")]
    color_by: Option<String>,

    #[arg(help = "keep only facilities with this status (repeatable, case-insensitive)", long = "status")]
    status: Vec<String>,

    #[arg(help = "drop facilities with this status (repeatable, case-insensitive)", long = "exclude-status")]
    exclude_status: Vec<String>,
}

#[derive(Args, Debug)]
struct LegendArgs {
    #[arg(help = "output HTML file (overwritten)", short = 'o', long = "output", default_value = DEFAULT_LEGEND_OUTPUT)]
    output: PathBuf,
}

impl From<MapArgs> for MapConfig {
    fn from(args: MapArgs) -> Self {
        MapConfig {
            input: args.input,
            output: args.output,
            title: args.title,
            zoom: args.zoom,
            height: args.height,
            marker: MarkerStyle {
                size: args.marker_size,
                color: args.marker_color,
                opacity: args.marker_opacity,
            },
            color_by: args.color_by,
            status: StatusFilter::new(&args.status, &args.exclude_status),
            ..MapConfig::default()
        }
    }
}

impl From<LegendArgs> for LegendConfig {
    fn from(args: LegendArgs) -> Self {
        LegendConfig {
            output: args.output,
            ..LegendConfig::default()
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Legend(args)) => {
            app::run_legend(&args.into());
        }
        None => {
            let config: MapConfig = cli.map.into();
            println!("Creating US facilities map...");
            if app::run(&config) {
                println!("\nUS map creation completed successfully!");
                println!("Files created:");
                println!("- {} (interactive US map)", config.output.display());
            } else {
                println!("\nMap creation failed. Please check your CSV file and try again.");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_match_config_defaults() {
        let cli = Cli::try_parse_from(["facility-map"]).unwrap();
        assert!(cli.command.is_none());
        let config = MapConfig::from(cli.map);
        let default = MapConfig::default();
        assert_eq!(config.input, default.input);
        assert_eq!(config.output, default.output);
        assert_eq!(config.title, default.title);
        assert_eq!(config.zoom, default.zoom);
        assert_eq!(config.height, default.height);
        assert_eq!(config.marker, default.marker);
        assert_eq!(config.color_by, default.color_by);
        assert_eq!(config.bounds, default.bounds);
        assert_eq!(config.status, default.status);
    }

    #[test]
    fn test_status_flags_repeat_and_lowercase() {
        let cli = Cli::try_parse_from([
            "facility-map",
            "--status",
            "Idle",
            "--status",
            "ACTIVE",
            "--exclude-status",
            "Closed",
            "--color-by",
            "facility_type",
        ])
        .unwrap();
        let config = MapConfig::from(cli.map);
        assert_eq!(config.status.include, vec!["idle", "active"]);
        assert_eq!(config.status.exclude, vec!["closed"]);
        assert_eq!(config.color_by.as_deref(), Some("facility_type"));
    }

    #[test]
    fn test_legend_subcommand() {
        let cli = Cli::try_parse_from(["facility-map", "legend", "-o", "x.html"]).unwrap();
        match cli.command {
            Some(Command::Legend(args)) => {
                let config = LegendConfig::from(args);
                assert_eq!(config.output, PathBuf::from("x.html"));
                assert_eq!(config.zoom, LegendConfig::default().zoom);
            }
            None => panic!("expected legend subcommand"),
        }
    }

    #[test]
    fn test_legend_default_output() {
        let cli = Cli::try_parse_from(["facility-map", "legend"]).unwrap();
        let Some(Command::Legend(args)) = cli.command else {
            panic!("expected legend subcommand");
        };
        assert_eq!(args.output, PathBuf::from(DEFAULT_LEGEND_OUTPUT));
    }

    #[test]
    fn test_map_flags_conflict_with_legend() {
        assert!(Cli::try_parse_from(["facility-map", "--zoom", "5", "legend"]).is_err());
    }
}

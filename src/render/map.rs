use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::color::ColorMap;
use crate::config::{MapConfig, MarkerStyle};
use crate::data::model::{FacilityRecord, FacilitySet};
use crate::error::Result;

use super::legend::Legend;
use super::{escape_html, script_json};

const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-3.0.1.min.js";
const MAP_DIV_ID: &str = "facility-map";

// ---------------------------------------------------------------------------
// plotly.js figure (serialised as-is into the page)
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub mode: &'static str,
    pub name: String,
    pub lat: Vec<f64>,
    pub lon: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertext: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customdata: Option<Vec<[String; 1]>>,
    pub hovertemplate: String,
    pub marker: Marker,
    pub showlegend: bool,
}

#[derive(Debug, Serialize)]
pub struct Marker {
    pub size: f64,
    pub color: String,
    pub opacity: f64,
}

#[derive(Debug, Serialize)]
pub struct Layout {
    pub title: Title,
    pub height: u32,
    pub margin: Margin,
    pub map: MapLayout,
    pub showlegend: bool,
}

#[derive(Debug, Serialize)]
pub struct Title {
    pub text: String,
    pub x: f64,
    pub xanchor: &'static str,
    pub font: Font,
}

#[derive(Debug, Serialize)]
pub struct Font {
    pub size: u32,
}

#[derive(Debug, Serialize)]
pub struct Margin {
    pub r: u32,
    pub t: u32,
    pub l: u32,
    pub b: u32,
}

#[derive(Debug, Serialize)]
pub struct MapLayout {
    pub style: &'static str,
    pub zoom: f64,
    pub center: Center,
}

#[derive(Debug, Serialize)]
pub struct Center {
    pub lat: f64,
    pub lon: f64,
}

// ---------------------------------------------------------------------------
// Figure construction
// ---------------------------------------------------------------------------

/// Hover shows the name in bold and the address; coordinates stay hidden.
fn hover_template(set: &FacilitySet) -> String {
    let mut template = String::new();
    if set.columns.display_name.is_some() {
        template.push_str("<b>%{hovertext}</b>");
    }
    if let Some(addr) = &set.columns.address {
        if !template.is_empty() {
            template.push_str("<br><br>");
        }
        template.push_str(&format!("{}=%{{customdata[0]}}", escape_html(addr)));
    }
    template.push_str("<extra></extra>");
    template
}

fn build_trace(
    set: &FacilitySet,
    name: &str,
    records: &[&FacilityRecord],
    marker: &MarkerStyle,
    color: &str,
    template: &str,
) -> Trace {
    let hovertext = set.columns.display_name.as_ref().map(|_| {
        records
            .iter()
            .map(|r| r.display_name.clone().unwrap_or_default())
            .collect()
    });
    let customdata = set.columns.address.as_ref().map(|_| {
        records
            .iter()
            .map(|r| [r.address.clone().unwrap_or_default()])
            .collect()
    });

    Trace {
        kind: "scattermap",
        mode: "markers",
        name: name.to_string(),
        lat: records.iter().map(|r| r.latitude).collect(),
        lon: records.iter().map(|r| r.longitude).collect(),
        hovertext,
        customdata,
        hovertemplate: template.to_string(),
        marker: Marker {
            size: marker.size,
            color: color.to_string(),
            opacity: marker.opacity,
        },
        showlegend: false,
    }
}

/// Colour map over the distinct values of `column` among the records.
pub fn category_colors(set: &FacilitySet, column: &str) -> ColorMap {
    let values: BTreeSet<String> = set
        .records
        .iter()
        .map(|r| r.field(column).unwrap_or_default().to_string())
        .collect();
    ColorMap::new(column, &values)
}

/// Build the figure: a single red trace, or one trace per category when
/// `config.color_by` names a column of the input.
pub fn build_figure(set: &FacilitySet, config: &MapConfig) -> (Figure, Option<ColorMap>) {
    let template = hover_template(set);
    let color_map = config
        .color_by
        .as_deref()
        .filter(|col| set.has_column(col))
        .map(|col| category_colors(set, col));

    let data = match &color_map {
        Some(cm) => {
            let mut groups: BTreeMap<&str, Vec<&FacilityRecord>> = BTreeMap::new();
            for r in &set.records {
                groups
                    .entry(r.field(&cm.column).unwrap_or_default())
                    .or_default()
                    .push(r);
            }
            groups
                .into_iter()
                .map(|(value, records)| {
                    build_trace(set, value, &records, &config.marker, cm.color_for(value), &template)
                })
                .collect()
        }
        None => {
            let records: Vec<&FacilityRecord> = set.records.iter().collect();
            vec![build_trace(
                set,
                "facilities",
                &records,
                &config.marker,
                &config.marker.color,
                &template,
            )]
        }
    };

    let (lat, lon) = set.center().unwrap_or((39.8, -98.6));
    let layout = Layout {
        title: Title {
            text: config.title.clone(),
            x: 0.5,
            xanchor: "center",
            font: Font { size: 20 },
        },
        height: config.height,
        margin: Margin { r: 0, t: 50, l: 0, b: 0 },
        map: MapLayout {
            style: "open-street-map",
            zoom: config.zoom,
            center: Center { lat, lon },
        },
        showlegend: false,
    };

    (Figure { data, layout }, color_map)
}

/// Complete HTML document for the facility map.
pub fn render_map(set: &FacilitySet, config: &MapConfig) -> Result<String> {
    let (figure, color_map) = build_figure(set, config);
    let figure_json = script_json(&figure)?;
    let overlay = color_map
        .map(|cm| Legend::from_color_map(&cm).to_html())
        .unwrap_or_default();

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{PLOTLY_JS}" charset="utf-8"></script>
<style>body {{ margin: 0; }}</style>
</head>
<body>
<div id="{MAP_DIV_ID}" style="height:{height}px; width:100%;"></div>
<script>
const figure = {figure_json};
Plotly.newPlot("{MAP_DIV_ID}", figure.data, figure.layout, {{responsive: true}});
</script>
{overlay}</body>
</html>
"#,
        title = escape_html(&config.title),
        height = config.height,
    ))
}

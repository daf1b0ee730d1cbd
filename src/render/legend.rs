use crate::color::ColorMap;
use crate::config::LegendConfig;

use super::escape_html;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

// ---------------------------------------------------------------------------
// Legend model
// ---------------------------------------------------------------------------

/// Symbol drawn in front of a legend label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Dot,
    Check,
    Warning,
}

impl Glyph {
    fn entity(self) -> &'static str {
        match self {
            Glyph::Dot => "&#9679;",
            Glyph::Check => "&#10004;",
            Glyph::Warning => "&#9888;",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub color: String,
    pub glyph: Glyph,
    pub label: String,
}

impl LegendEntry {
    pub fn new(color: &str, glyph: Glyph, label: &str) -> Self {
        Self {
            color: color.to_string(),
            glyph,
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendSection {
    pub title: String,
    pub entries: Vec<LegendEntry>,
}

/// A static key drawn as a fixed box in the top-right corner of a page.
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub title: String,
    pub sections: Vec<LegendSection>,
}

impl Legend {
    /// Facility types and site status.
    pub fn facility_default() -> Self {
        let dot = |color: &str, label: &str| LegendEntry::new(color, Glyph::Dot, label);
        Legend {
            title: "Legend".to_string(),
            sections: vec![
                LegendSection {
                    title: "Facility Types".to_string(),
                    entries: vec![
                        dot("blue", "Traditional Sortable"),
                        dot("green", "Traditional Non-Sort"),
                        dot("purple", "IXD"),
                        dot("orange", "Delivery Station"),
                        dot("darkred", "Sort Center"),
                        dot("darkblue", "Air Gateway"),
                        dot("darkgreen", "Specialty"),
                        dot("darkviolet", "QUICK COMMERCE"),
                        dot("black", "MbA"),
                        dot("cadetblue", "Make on Demand"),
                    ],
                },
                LegendSection {
                    title: "Status".to_string(),
                    entries: vec![
                        LegendEntry::new("green", Glyph::Check, "Active"),
                        LegendEntry::new("orange", Glyph::Warning, "Idle"),
                    ],
                },
            ],
        }
    }

    /// One dot per category of a colour-by column.
    pub fn from_color_map(color_map: &ColorMap) -> Self {
        let entries = color_map
            .legend_entries()
            .into_iter()
            .map(|(label, color)| LegendEntry::new(&color, Glyph::Dot, &label))
            .collect();
        Legend {
            title: "Legend".to_string(),
            sections: vec![LegendSection {
                title: color_map.column.clone(),
                entries,
            }],
        }
    }

    /// The overlay `<div>`.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        html.push_str(
            "<div style=\"position: fixed; top: 20px; right: 20px; width: 260px; height: auto; \
             z-index:9999; font-size:14px; background-color:white; border:2px solid grey; \
             border-radius:8px; box-shadow: 2px 2px 8px #888; padding: 14px;\">\n",
        );
        html.push_str(&format!(
            "<b style=\"font-size:16px;\">{}</b><br><br>\n",
            escape_html(&self.title)
        ));
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                html.push_str("<br>\n");
            }
            html.push_str(&format!("<u>{}</u><br>\n", escape_html(&section.title)));
            for entry in &section.entries {
                html.push_str(&format!(
                    "<span style=\"color:{}; font-size:18px;\">{}</span> {}<br>\n",
                    escape_html(&entry.color),
                    entry.glyph.entity(),
                    escape_html(&entry.label)
                ));
            }
        }
        html.push_str("</div>\n");
        html
    }
}

// ---------------------------------------------------------------------------
// Standalone legend page
// ---------------------------------------------------------------------------

/// Leaflet base map with `legend` overlaid.
pub fn render_legend_page(legend: &Legend, config: &LegendConfig) -> String {
    let (lat, lon) = config.center;
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<link rel="stylesheet" href="{LEAFLET_CSS}">
<script src="{LEAFLET_JS}"></script>
<style>html, body, #map {{ height: 100%; margin: 0; }}</style>
</head>
<body>
<div id="map"></div>
<script>
const map = L.map("map").setView([{lat}, {lon}], {zoom});
L.tileLayer("https://{{s}}.tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png", {{
  maxZoom: 19,
  attribution: "&copy; OpenStreetMap contributors"
}}).addTo(map);
</script>
{overlay}</body>
</html>
"#,
        title = escape_html(&legend.title),
        zoom = config.zoom,
        overlay = legend.to_html(),
    )
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn test_default_legend_sections() {
        let legend = Legend::facility_default();
        assert_eq!(legend.sections.len(), 2);
        assert_eq!(legend.sections[0].entries.len(), 10);
        assert_eq!(legend.sections[1].entries[1].glyph, Glyph::Warning);
    }

    #[test]
    fn test_overlay_html() {
        let html = Legend::facility_default().to_html();
        assert!(html.contains("position: fixed; top: 20px; right: 20px"));
        assert!(html.contains("<u>Facility Types</u>"));
        assert!(html.contains(
            "<span style=\"color:cadetblue; font-size:18px;\">&#9679;</span> Make on Demand<br>"
        ));
        assert!(html.contains("&#10004;</span> Active"));
    }

    #[test]
    fn test_labels_escaped() {
        let values: BTreeSet<String> = ["<script>".to_string()].into_iter().collect();
        let legend = Legend::from_color_map(&ColorMap::new("kind", &values));
        let html = legend.to_html();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_legend_page() {
        let page = render_legend_page(&Legend::facility_default(), &LegendConfig::default());
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("setView([40, -100], 4)"));
        assert!(page.contains("{s}.tile.openstreetmap.org/{z}/{x}/{y}.png"));
        assert!(page.contains("<b style=\"font-size:16px;\">Legend</b>"));
    }
}

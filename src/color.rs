use std::collections::{BTreeMap, BTreeSet};

use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct `#rrggbb` colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<String> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            let rgb: Srgb<u8> = rgb.into_format();
            format!("#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: category value → colour
// ---------------------------------------------------------------------------

/// Maps the distinct values of a chosen column to distinct colours.
#[derive(Debug, Clone)]
pub struct ColorMap {
    pub column: String,
    mapping: BTreeMap<String, String>,
    default_color: String,
}

impl ColorMap {
    pub fn new(column: &str, unique_values: &BTreeSet<String>) -> Self {
        let palette = generate_palette(unique_values.len());
        let mapping = unique_values.iter().cloned().zip(palette).collect();

        ColorMap {
            column: column.to_string(),
            mapping,
            default_color: "gray".to_string(),
        }
    }

    pub fn color_for(&self, value: &str) -> &str {
        self.mapping
            .get(value)
            .map(String::as_str)
            .unwrap_or(self.default_color.as_str())
    }

    /// Legend entries (value label → colour), sorted by value.
    pub fn legend_entries(&self) -> Vec<(String, String)> {
        self.mapping
            .iter()
            .map(|(v, c)| (v.clone(), c.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_shape() {
        assert!(generate_palette(0).is_empty());
        let p = generate_palette(4);
        assert_eq!(p.len(), 4);
        for c in &p {
            assert_eq!(c.len(), 7);
            assert!(c.starts_with('#'));
        }
        let distinct: BTreeSet<&String> = p.iter().collect();
        assert_eq!(distinct.len(), 4);
    }

    #[test]
    fn test_color_map_lookup() {
        let values: BTreeSet<String> = ["idle", "active"].iter().map(|s| s.to_string()).collect();
        let map = ColorMap::new("status", &values);
        assert_ne!(map.color_for("idle"), map.color_for("active"));
        assert_eq!(map.color_for("closed"), "gray");
        let entries = map.legend_entries();
        assert_eq!(entries[0].0, "active");
        assert_eq!(entries[1].0, "idle");
    }
}

/// Output layer: turns a filtered `FacilitySet` into standalone HTML pages.
///
/// * `map`    – plotly.js scatter map of the facilities
/// * `legend` – fixed overlay legend, standalone or on top of the map

pub mod legend;
pub mod map;

use std::path::Path;

use crate::error::Result;

/// Write `html` to `path`, replacing any existing file.
pub fn write_html(path: &Path, html: &str) -> Result<()> {
    std::fs::write(path, html)?;
    Ok(())
}

/// Escape text for use inside HTML element content or attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Serialise `value` as JSON that is safe to inline in a `<script>` block.
pub fn script_json<T: serde::Serialize>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value)?;
    Ok(json.replace('<', "\\u003c"))
}

use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// FacilityRecord – one row of the input table
// ---------------------------------------------------------------------------

/// A single facility that passed coordinate coercion.
#[derive(Debug, Clone, PartialEq)]
pub struct FacilityRecord {
    pub latitude: f64,
    pub longitude: f64,
    /// Value of the resolved display-name column, if any.
    pub display_name: Option<String>,
    /// Value of the resolved address column, if any.
    pub address: Option<String>,
    /// Every raw cell of the row: column_name → text.
    pub fields: BTreeMap<String, String>,
}

impl FacilityRecord {
    /// Raw text of an arbitrary column.
    pub fn field(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }
}

// ---------------------------------------------------------------------------
// ResolvedColumns – which header plays which role
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumns {
    pub latitude: String,
    pub longitude: String,
    pub display_name: Option<String>,
    pub address: Option<String>,
}

// ---------------------------------------------------------------------------
// LoadStats – observational counts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Data rows read from the file.
    pub loaded: usize,
    /// Rows whose coordinates both parsed as finite numbers.
    pub cleaned: usize,
    /// Rows inside the bounding box.
    pub in_range: usize,
    /// Rows left after the status filter.
    pub retained: usize,
}

// ---------------------------------------------------------------------------
// FacilitySet – the complete filtered dataset
// ---------------------------------------------------------------------------

/// The loaded, cleaned and filtered facilities plus the resolved schema.
#[derive(Debug, Clone)]
pub struct FacilitySet {
    pub records: Vec<FacilityRecord>,
    /// Header row in file order.
    pub headers: Vec<String>,
    pub columns: ResolvedColumns,
    pub stats: LoadStats,
}

impl FacilitySet {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|h| h == column)
    }

    /// Mean of the surviving coordinates, used to centre the map.
    pub fn center(&self) -> Option<(f64, f64)> {
        if self.is_empty() {
            return None;
        }
        let n = self.len() as f64;
        let (lat, lon) = self
            .records
            .iter()
            .fold((0.0, 0.0), |(lat, lon), r| (lat + r.latitude, lon + r.longitude));
        Some((lat / n, lon / n))
    }
}

use std::collections::BTreeMap;

use super::model::FacilityRecord;

// ---------------------------------------------------------------------------
// Bounding box
// ---------------------------------------------------------------------------

/// Inclusive latitude/longitude rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

/// Continental US plus Alaska and Hawaii.
pub const US_BOUNDS: BoundingBox = BoundingBox {
    min_lat: 18.0,
    max_lat: 72.0,
    min_lon: -180.0,
    max_lon: -65.0,
};

impl BoundingBox {
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lon >= self.min_lon && lon <= self.max_lon
    }
}

/// Best-effort numeric coercion. `None` means the cell counts as missing.
pub fn coerce_coordinate(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

// ---------------------------------------------------------------------------
// Status filter
// ---------------------------------------------------------------------------

/// Include/exclude lists compared against the lowercased `status` cell.
///
/// * `include` empty → every status passes the include step
/// * a record without a `status` cell only passes when `include` is empty
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusFilter {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

pub const STATUS_COLUMN: &str = "status";

impl StatusFilter {
    pub fn new(include: &[String], exclude: &[String]) -> Self {
        let lower =
            |v: &[String]| -> Vec<String> { v.iter().map(|s| s.to_lowercase()).collect() };
        StatusFilter {
            include: lower(include),
            exclude: lower(exclude),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.include.is_empty() || !self.exclude.is_empty()
    }

    pub fn accepts(&self, record: &FacilityRecord) -> bool {
        let status = record.field(STATUS_COLUMN).map(str::to_lowercase);
        match status {
            Some(s) => {
                (self.include.is_empty() || self.include.contains(&s)) && !self.exclude.contains(&s)
            }
            None => self.include.is_empty(),
        }
    }
}

/// Per-status counts, most frequent first, ties by value.
pub fn status_breakdown(records: &[FacilityRecord]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for r in records {
        if let Some(s) = r.field(STATUS_COLUMN) {
            if !s.is_empty() {
                *counts.entry(s).or_default() += 1;
            }
        }
    }
    let mut out: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(s, n)| (s.to_string(), n))
        .collect();
    // stable sort keeps the BTreeMap value order among equal counts
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_status(status: Option<&str>) -> FacilityRecord {
        let mut fields = BTreeMap::new();
        if let Some(s) = status {
            fields.insert(STATUS_COLUMN.to_string(), s.to_string());
        }
        FacilityRecord {
            latitude: 40.0,
            longitude: -75.0,
            display_name: None,
            address: None,
            fields,
        }
    }

    #[test]
    fn test_bounds_inclusive() {
        assert!(US_BOUNDS.contains(18.0, -180.0));
        assert!(US_BOUNDS.contains(72.0, -65.0));
        assert!(!US_BOUNDS.contains(17.999, -100.0));
        assert!(!US_BOUNDS.contains(40.0, -64.9));
        assert!(!US_BOUNDS.contains(91.0, -75.0));
        assert!(!US_BOUNDS.contains(40.0, 0.0));
    }

    #[test]
    fn test_coerce() {
        assert_eq!(coerce_coordinate(" 40.5 "), Some(40.5));
        assert_eq!(coerce_coordinate("-75"), Some(-75.0));
        assert_eq!(coerce_coordinate("N/A"), None);
        assert_eq!(coerce_coordinate(""), None);
        assert_eq!(coerce_coordinate("NaN"), None);
        assert_eq!(coerce_coordinate("inf"), None);
    }

    #[test]
    fn test_status_filter() {
        let include = StatusFilter::new(&["Idle".to_string()], &[]);
        assert!(include.accepts(&with_status(Some("IDLE"))));
        assert!(!include.accepts(&with_status(Some("active"))));
        assert!(!include.accepts(&with_status(None)));

        let exclude = StatusFilter::new(&[], &["closed".to_string(), "Inactive".to_string()]);
        assert!(exclude.accepts(&with_status(Some("Active"))));
        assert!(!exclude.accepts(&with_status(Some("inactive"))));
        assert!(exclude.accepts(&with_status(None)));

        assert!(!StatusFilter::default().is_active());
    }

    #[test]
    fn test_status_breakdown_order() {
        let records = vec![
            with_status(Some("idle")),
            with_status(Some("active")),
            with_status(Some("active")),
            with_status(Some("closed")),
            with_status(None),
        ];
        assert_eq!(
            status_breakdown(&records),
            vec![
                ("active".to_string(), 2),
                ("closed".to_string(), 1),
                ("idle".to_string(), 1),
            ]
        );
    }
}

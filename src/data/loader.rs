use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use log::{debug, info};

use crate::error::{MapError, Result};

use super::columns::resolve_columns;
use super::filter::{coerce_coordinate, status_breakdown, BoundingBox, StatusFilter, STATUS_COLUMN};
use super::model::{FacilityRecord, FacilitySet, LoadStats};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a facility CSV, resolve its columns and keep only rows inside `bounds`
/// that also pass `status`.
pub fn load_facilities(
    path: &Path,
    bounds: &BoundingBox,
    status: &StatusFilter,
) -> Result<FacilitySet> {
    if !path.is_file() {
        return Err(MapError::InputNotFound(path.to_path_buf()));
    }
    let reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| match e.kind() {
            csv::ErrorKind::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
                MapError::InputNotFound(path.to_path_buf())
            }
            _ => MapError::Csv(e),
        })?;
    load_from_reader(reader, bounds, status)
}

/// Same as [`load_facilities`] over an already opened CSV reader.
pub fn load_from_reader<R: Read>(
    mut reader: csv::Reader<R>,
    bounds: &BoundingBox,
    status: &StatusFilter,
) -> Result<FacilitySet> {
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut stats = LoadStats::default();
    let mut rows: Vec<Vec<String>> = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(|c| c.to_string()).collect());
    }
    stats.loaded = rows.len();
    info!("Loaded {} total facilities", stats.loaded);
    info!("CSV columns: {headers:?}");

    let columns = resolve_columns(&headers)?;
    info!(
        "Using columns - Lat: {}, Lon: {}, Name: {}, Address: {}",
        columns.latitude,
        columns.longitude,
        columns.display_name.as_deref().unwrap_or("None"),
        columns.address.as_deref().unwrap_or("None"),
    );

    // Duplicate headers: the first occurrence wins.
    let index_of = |name: &str| headers.iter().position(|h| h == name);
    let lat_idx = index_of(&columns.latitude);
    let lon_idx = index_of(&columns.longitude);
    let name_idx = columns.display_name.as_deref().and_then(index_of);
    let addr_idx = columns.address.as_deref().and_then(index_of);

    let cell = |row: &Vec<String>, idx: Option<usize>| -> Option<String> {
        idx.and_then(|i| row.get(i)).cloned()
    };

    let mut cleaned = Vec::with_capacity(rows.len());
    for (row_no, row) in rows.iter().enumerate() {
        let lat = cell(row, lat_idx).as_deref().and_then(coerce_coordinate);
        let lon = cell(row, lon_idx).as_deref().and_then(coerce_coordinate);
        let (Some(latitude), Some(longitude)) = (lat, lon) else {
            debug!("Row {row_no}: dropped, coordinates not numeric");
            continue;
        };

        let mut fields = BTreeMap::new();
        for (col_idx, name) in headers.iter().enumerate() {
            let value = row.get(col_idx).cloned().unwrap_or_default();
            fields.entry(name.clone()).or_insert(value);
        }

        cleaned.push(FacilityRecord {
            latitude,
            longitude,
            display_name: cell(row, name_idx).filter(|s| !s.is_empty()),
            address: cell(row, addr_idx).filter(|s| !s.is_empty()),
            fields,
        });
    }
    stats.cleaned = cleaned.len();
    info!("After cleaning coordinates: {} facilities", stats.cleaned);

    let in_range: Vec<FacilityRecord> = cleaned
        .into_iter()
        .filter(|r| bounds.contains(r.latitude, r.longitude))
        .collect();
    stats.in_range = in_range.len();
    debug!("{} rows outside bounding box", stats.cleaned - stats.in_range);
    info!("US facilities found: {}", stats.in_range);

    let records: Vec<FacilityRecord> = if status.is_active() {
        let kept: Vec<FacilityRecord> = in_range.into_iter().filter(|r| status.accepts(r)).collect();
        info!("Facilities after status filter: {}", kept.len());
        kept
    } else {
        in_range
    };
    stats.retained = records.len();

    if headers.iter().any(|h| h == STATUS_COLUMN) {
        info!("Status breakdown:");
        for (value, count) in status_breakdown(&records) {
            info!("  {value}: {count}");
        }
    }

    if records.is_empty() {
        return Err(MapError::EmptyResult);
    }

    Ok(FacilitySet {
        records,
        headers,
        columns,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::data::filter::US_BOUNDS;

    fn load_str(text: &str) -> Result<FacilitySet> {
        let reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(text.as_bytes());
        load_from_reader(reader, &US_BOUNDS, &StatusFilter::default())
    }

    #[test]
    fn test_only_in_range_row_survives() {
        let set = load_str("lat,lon,name\n40.0,-75.0,A\n91.0,-75.0,B\n40.0,0.0,C\n").unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.records[0].display_name.as_deref(), Some("A"));
        assert_eq!(set.stats.loaded, 3);
        assert_eq!(set.stats.cleaned, 3);
        assert_eq!(set.stats.in_range, 1);
    }

    #[test]
    fn test_x_y_without_optional_columns() {
        let set = load_str("x,y\n-100.5,35.25\n").unwrap();
        assert_eq!(set.len(), 1);
        let r = &set.records[0];
        assert_eq!((r.latitude, r.longitude), (35.25, -100.5));
        assert_eq!(r.display_name, None);
        assert_eq!(r.address, None);
    }

    #[test]
    fn test_non_numeric_rows_dropped() {
        let set = load_str("latitude,longitude\nN/A,-75.0\n40.0,\n41.0,-74.0\n").unwrap();
        assert_eq!(set.stats.loaded, 3);
        assert_eq!(set.stats.cleaned, 1);
        assert_eq!(set.records[0].latitude, 41.0);
    }

    #[test]
    fn test_missing_coordinate_columns() {
        let err = load_str("name,address\nA,1 Main St\n").unwrap_err();
        assert!(matches!(err, MapError::MissingCoordinates { .. }));
    }

    #[test]
    fn test_all_out_of_range_is_empty() {
        let err = load_str("lat,lon\n10.0,-75.0\n40.0,10.0\n").unwrap_err();
        assert!(matches!(err, MapError::EmptyResult));
    }

    #[test]
    fn test_short_rows_tolerated() {
        let set = load_str("lat,lon,name,address\n40.0,-75.0\n").unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.records[0].address, None);
        assert_eq!(set.records[0].field("name"), Some(""));
    }

    #[test]
    fn test_status_filter_applied() {
        let text = "lat,lon,status\n40,-75,Active\n41,-75,Idle\n42,-75,idle\n";
        let reader = csv::Reader::from_reader(text.as_bytes());
        let filter = StatusFilter::new(&["idle".to_string()], &[]);
        let set = load_from_reader(reader, &US_BOUNDS, &filter).unwrap();
        assert_eq!(set.stats.in_range, 3);
        assert_eq!(set.stats.retained, 2);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("facilities.csv");
        let err = load_facilities(&path, &US_BOUNDS, &StatusFilter::default()).unwrap_err();
        assert!(matches!(err, MapError::InputNotFound(p) if p == path));
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "site_name,address,latitude,longitude").unwrap();
        writeln!(file, "Depot,\"1 Main St, Springfield\",39.8,-89.6").unwrap();
        let set = load_facilities(file.path(), &US_BOUNDS, &StatusFilter::default()).unwrap();
        assert_eq!(set.records[0].address.as_deref(), Some("1 Main St, Springfield"));
        assert_eq!(set.columns.display_name.as_deref(), Some("site_name"));
    }
}

use crate::error::{MapError, Result};

use super::model::ResolvedColumns;

// ---------------------------------------------------------------------------
// Candidate header names per role, in priority order
// ---------------------------------------------------------------------------

pub const LATITUDE_CANDIDATES: &[&str] = &["latitude", "lat", "Latitude", "LAT", "y", "Y"];

pub const LONGITUDE_CANDIDATES: &[&str] = &[
    "longitude", "lon", "lng", "Longitude", "LON", "LONGITUDE", "x", "X",
];

pub const NAME_CANDIDATES: &[&str] = &[
    "site_name", "name", "facility_name", "site", "Site", "Name", "facility",
];

pub const ADDRESS_CANDIDATES: &[&str] = &[
    "address", "Address", "full_address", "location", "street_address",
];

/// A semantic field that is mapped onto one header column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Latitude,
    Longitude,
    DisplayName,
    Address,
}

impl Role {
    pub fn candidates(self) -> &'static [&'static str] {
        match self {
            Role::Latitude => LATITUDE_CANDIDATES,
            Role::Longitude => LONGITUDE_CANDIDATES,
            Role::DisplayName => NAME_CANDIDATES,
            Role::Address => ADDRESS_CANDIDATES,
        }
    }
}

/// First candidate for `role` that appears in `headers`. Matching is
/// case-sensitive and the candidate order decides, not the header order.
pub fn find_column(role: Role, headers: &[String]) -> Option<String> {
    role.candidates()
        .iter()
        .find(|cand| headers.iter().any(|h| h == *cand))
        .map(|c| c.to_string())
}

/// Map every role onto the header. Both coordinate roles are required.
pub fn resolve_columns(headers: &[String]) -> Result<ResolvedColumns> {
    let latitude = find_column(Role::Latitude, headers);
    let longitude = find_column(Role::Longitude, headers);

    match (latitude, longitude) {
        (Some(latitude), Some(longitude)) => Ok(ResolvedColumns {
            latitude,
            longitude,
            display_name: find_column(Role::DisplayName, headers),
            address: find_column(Role::Address, headers),
        }),
        _ => Err(MapError::MissingCoordinates {
            available: headers.to_vec(),
        }),
    }
}

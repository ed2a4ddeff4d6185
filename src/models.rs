use serde::{Deserialize, Serialize};
use std::fmt;

/// A latitude/longitude pair in degrees.
///
/// Used both for the query point given on the command line and for the
/// coordinates parsed out of a library's `location` column. No range
/// validation is applied to either.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Raw row of the library directory dataset.
///
/// The portal names the column `name_`; a plain `name` header is accepted too.
/// Every other column (hours, phone, website, ...) is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LibraryRecord {
    #[serde(rename = "name_", alias = "name")]
    pub name: String,
    pub address: String,
    /// Free text of the form `"(lat, lon)"`.
    pub location: String,
}

/// Raw row of the visitors-by-location dataset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VisitorRecord {
    /// Loosely matches a library name, e.g. "Austin-Irving".
    pub location: String,
    /// Year-to-date visit count.
    pub ytd: u64,
}

/// A library with its parsed coordinates and distance to the query point.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedLibrary {
    pub name: String,
    pub address: String,
    pub coordinates: Coordinates,
    pub distance_km: f64,
}

/// Visitor location paired with its normalized popularity score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredVisitor {
    pub location: String,
    pub popularity: u8,
}

/// Outcome of reconciling a library name against the visitors dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popularity {
    /// Score in `1..=10`.
    Known(u8),
    /// No visitor location matched the library name.
    Unknown,
}

impl Popularity {
    pub fn is_known(&self) -> bool {
        matches!(self, Popularity::Known(_))
    }
}

impl fmt::Display for Popularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Popularity::Known(p) => write!(f, "{}", p),
            Popularity::Unknown => f.write_str("Unknown"),
        }
    }
}

/// Final answer of a lookup. `Display` renders the single output line.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub name: String,
    pub address: String,
    pub distance_km: f64,
    pub popularity: Popularity,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\" \"{}\" \"{}\"",
            self.name, self.address, self.popularity
        )
    }
}

use crate::error::FinderError;
use crate::geo::haversine_km;
use crate::location::parse_location;
use crate::models::{Coordinates, LibraryRecord, RankedLibrary};

/// Parse every library location and compute its distance to `query`.
///
/// Fails on the first row whose location cannot be parsed, naming the library.
pub fn rank_libraries(
    libraries: &[LibraryRecord],
    query: Coordinates,
) -> Result<Vec<RankedLibrary>, FinderError> {
    libraries
        .iter()
        .map(|lib| -> Result<RankedLibrary, FinderError> {
            let coordinates =
                parse_location(&lib.location).map_err(|source| FinderError::Location {
                    library: lib.name.clone(),
                    source,
                })?;
            Ok(RankedLibrary {
                name: lib.name.clone(),
                address: lib.address.clone(),
                coordinates,
                distance_km: haversine_km(query, coordinates),
            })
        })
        .collect()
}

/// Index of the smallest distance; the first one wins on ties.
///
/// NaN never compares less, so an all-NaN input selects index 0.
/// Returns `None` only for an empty slice.
pub fn nearest_index(distances: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &d) in distances.iter().enumerate() {
        match best {
            None => best = Some((i, d)),
            Some((_, b)) if d < b || (b.is_nan() && !d.is_nan()) => best = Some((i, d)),
            _ => {}
        }
    }
    best.map(|(i, _)| i)
}

/// Pick the nearest library out of a ranked list.
pub fn select_nearest(ranked: &[RankedLibrary]) -> Option<&RankedLibrary> {
    let distances: Vec<f64> = ranked.iter().map(|r| r.distance_km).collect();
    nearest_index(&distances).map(|i| &ranked[i])
}

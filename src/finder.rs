use crate::error::FinderError;
use crate::matching::match_popularity;
use crate::models::{Coordinates, LibraryRecord, Report, VisitorRecord};
use crate::nearest::{rank_libraries, select_nearest};
use crate::popularity::score_visitors;

/// Run the whole lookup over datasets that are already in memory.
///
/// Steps: score visitors, parse and rank libraries by distance to `query`,
/// take the nearest (first on ties), then reconcile its name with the visitor
/// locations. A missing match yields `Popularity::Unknown`, not an error.
///
/// ### Errors
/// - a library location that cannot be parsed
/// - visitor counts that cannot be normalized (empty, or all equal)
/// - an empty library dataset
pub fn find_nearest(
    libraries: &[LibraryRecord],
    visitors: &[VisitorRecord],
    query: Coordinates,
) -> Result<Report, FinderError> {
    let scored = score_visitors(visitors)?;
    let ranked = rank_libraries(libraries, query)?;
    let nearest = select_nearest(&ranked).ok_or(FinderError::NoLibraries)?;
    log::debug!(
        "nearest of {} libraries: {:?} at {:.3} km",
        ranked.len(),
        nearest.name,
        nearest.distance_km
    );

    let popularity = match_popularity(&nearest.name, &scored);
    if !popularity.is_known() {
        log::warn!(
            "library name {:?} did not match the visitors dataset; popularity unknown",
            nearest.name
        );
    }

    Ok(Report {
        name: nearest.name.clone(),
        address: nearest.address.clone(),
        distance_km: nearest.distance_km,
        popularity,
    })
}

use crate::models::Coordinates;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points in kilometers (haversine).
///
/// Both points are given in degrees.
///
/// ```
/// # use nearest_library::geo::haversine_km;
/// # use nearest_library::models::Coordinates;
/// let d = haversine_km(Coordinates::new(0.0, 0.0), Coordinates::new(0.0, 1.0));
/// assert!((d - 111.19).abs() < 0.01);
/// ```
#[inline]
pub fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

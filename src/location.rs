//! Parsing of the free-text `location` column of the library directory.
//!
//! The portal serializes the point as `"(41.96759739182978, -87.76155426232721)"`.
//! We accept exactly that shape, with or without the parentheses and with any
//! amount of surrounding whitespace. Anything else is rejected instead of being
//! scrubbed into something that happens to parse.

use crate::error::LocationError;
use crate::models::Coordinates;
use regex::Regex;
use std::sync::LazyLock;

/// Two signed decimals separated by a comma, optionally parenthesized.
static LOCATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    let n = r"[+-]?(?:\d+\.?\d*|\.\d+)";
    Regex::new(&format!(
        r"^\s*\(?\s*(?P<lat>{n})\s*,\s*(?P<lon>{n})\s*\)?\s*$"
    ))
    .expect("valid regex")
});

fn number(text: &str) -> Result<f64, LocationError> {
    text.parse::<f64>()
        .map_err(|_| LocationError::InvalidNumber { text: text.into() })
}

/// Parse `"(lat, lon)"` into [`Coordinates`].
///
/// ```
/// # use nearest_library::location::parse_location;
/// let c = parse_location("(41.9535, -87.7719)").unwrap();
/// assert_eq!(c.latitude, 41.9535);
/// assert_eq!(c.longitude, -87.7719);
/// ```
pub fn parse_location(raw: &str) -> Result<Coordinates, LocationError> {
    if raw.trim().is_empty() {
        return Err(LocationError::Empty);
    }
    let caps = LOCATION_RE
        .captures(raw)
        .ok_or_else(|| LocationError::Malformed(raw.to_string()))?;

    // Unbalanced parentheses pass the regex; reject them here.
    let trimmed = raw.trim();
    if trimmed.starts_with('(') != trimmed.ends_with(')') {
        return Err(LocationError::Malformed(raw.to_string()));
    }

    let latitude = number(&caps["lat"])?;
    let longitude = number(&caps["lon"])?;
    Ok(Coordinates::new(latitude, longitude))
}

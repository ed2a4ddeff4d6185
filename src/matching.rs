//! Reconcile a library name with the visitor dataset's location strings.
//!
//! The two datasets are maintained independently, so names rarely agree
//! exactly ("Austin-Irving Branch" vs. "Austin-Irving"). A visitor row matches
//! when one string contains the other: the shorter one is searched for inside
//! the longer one, literally and case-sensitively. On equal length the visitor
//! location is the needle, which reduces to plain equality.

use crate::models::{Popularity, ScoredVisitor};

/// `true` when either string contains the other. Blank strings never match.
pub fn names_overlap(library_name: &str, visitor_location: &str) -> bool {
    if library_name.trim().is_empty() || visitor_location.trim().is_empty() {
        return false;
    }
    if library_name.chars().count() < visitor_location.chars().count() {
        visitor_location.contains(library_name)
    } else {
        library_name.contains(visitor_location)
    }
}

/// Popularity of the last visitor row overlapping `library_name`.
///
/// Scans every row; a later match replaces an earlier one.
pub fn match_popularity(library_name: &str, visitors: &[ScoredVisitor]) -> Popularity {
    let mut found = Popularity::Unknown;
    for v in visitors {
        if names_overlap(library_name, &v.location) {
            log::debug!("{:?} matches visitor location {:?}", library_name, v.location);
            found = Popularity::Known(v.popularity);
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sv(location: &str, popularity: u8) -> ScoredVisitor {
        ScoredVisitor {
            location: location.into(),
            popularity,
        }
    }

    #[test]
    fn shorter_string_is_the_needle() {
        assert!(names_overlap("Austin-Irving Branch", "Austin-Irving"));
        assert!(names_overlap("Austin-Irving", "Austin-Irving Branch"));
        assert!(!names_overlap("Austin-Irving Branch", "austin-irving"));
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        // "." would match any character as a pattern.
        assert!(!names_overlap("Mt. Greenwood", "MtX Greenwood Branch"));
        assert!(names_overlap("Mt. Greenwood", "Mt. Greenwood Branch"));
    }

    #[test]
    fn blank_location_matches_nothing() {
        assert!(!names_overlap("Austin-Irving Branch", ""));
        assert!(!names_overlap("", "Austin-Irving"));
    }

    #[test]
    fn last_match_wins() {
        let rows = vec![sv("Austin", 3), sv("Lincoln Park", 9), sv("Austin-Irving", 6)];
        assert_eq!(
            match_popularity("Austin-Irving Branch", &rows),
            Popularity::Known(6)
        );
    }

    #[test]
    fn no_match_is_unknown() {
        let rows = vec![sv("Harold Washington Library Center", 10)];
        assert_eq!(match_popularity("Bezazian", &rows), Popularity::Unknown);
    }
}

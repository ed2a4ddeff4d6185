use nearest_library::api::{read_libraries, read_visitors};
use nearest_library::{Coordinates, FinderError, NormalizeError, Popularity, find_nearest};

const LIBRARIES: &str = "name_,address,location\n\
\"Austin-Irving Branch\",\"6100 W. Irving Park Rd\",\"(41.9535, -87.7719)\"\n";

fn query() -> Coordinates {
    Coordinates::new(41.95, -87.77)
}

#[test]
fn matched_library_reports_popularity() {
    let visitors = "location,ytd\n\
Avalon,10000\n\
\"Harold Washington Library Center\",900000\n\
Austin-Irving,50000\n";
    let libs = read_libraries(LIBRARIES.as_bytes()).unwrap();
    let vis = read_visitors(visitors.as_bytes()).unwrap();

    let report = find_nearest(&libs, &vis, query()).unwrap();
    assert_eq!(report.name, "Austin-Irving Branch");
    assert!((report.distance_km - 0.4).abs() < 0.05, "{}", report.distance_km);
    // (50000 - 10000) / 890000 * 9 + 1 = 1.40 -> 2
    assert_eq!(report.popularity, Popularity::Known(2));
    assert_eq!(
        report.to_string(),
        r#""Austin-Irving Branch" "6100 W. Irving Park Rd" "2""#
    );
}

#[test]
fn unmatched_library_reports_unknown() {
    let visitors = "location,ytd\nAvalon,10000\nBezazian,20000\n";
    let libs = read_libraries(LIBRARIES.as_bytes()).unwrap();
    let vis = read_visitors(visitors.as_bytes()).unwrap();

    let report = find_nearest(&libs, &vis, query()).unwrap();
    assert_eq!(report.popularity, Popularity::Unknown);
    assert!(report.to_string().ends_with(r#""Unknown""#));
}

#[test]
fn uniform_visitor_counts_are_fatal() {
    let visitors = "location,ytd\nAvalon,5\nAustin-Irving,5\n";
    let libs = read_libraries(LIBRARIES.as_bytes()).unwrap();
    let vis = read_visitors(visitors.as_bytes()).unwrap();

    let err = find_nearest(&libs, &vis, query()).unwrap_err();
    assert!(matches!(
        err,
        FinderError::Normalize(NormalizeError::Degenerate { value: 5 })
    ));
}

#[test]
fn empty_library_dataset_is_fatal() {
    let visitors = "location,ytd\nAvalon,1\nAustin,2\n";
    let vis = read_visitors(visitors.as_bytes()).unwrap();
    let err = find_nearest(&[], &vis, query()).unwrap_err();
    assert!(matches!(err, FinderError::NoLibraries));
}

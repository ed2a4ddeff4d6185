//! nearest_library
//!
//! Find the Chicago public library closest to a latitude/longitude and report
//! how popular it is. Pairs with the `nearest-library` CLI.
//!
//! ### Features
//! - Download the library directory and the 2018 visitors-by-location datasets
//! - Great-circle (haversine) distance from the query point to every library
//! - Popularity: year-to-date visits min-max scaled into `1..=10`
//! - Name reconciliation between the two datasets by substring overlap
//!
//! ### Example
//! ```no_run
//! use nearest_library::{Client, Coordinates, find_nearest};
//!
//! let client = Client::default();
//! let libraries = client.fetch_libraries()?;
//! let visitors = client.fetch_visitors()?;
//! let report = find_nearest(&libraries, &visitors, Coordinates::new(41.95, -87.77))?;
//! println!("{}", report);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod error;
pub mod finder;
pub mod geo;
pub mod location;
pub mod matching;
pub mod models;
pub mod nearest;
pub mod popularity;

pub use api::Client;
pub use error::{FinderError, LocationError, NormalizeError};
pub use finder::find_nearest;
pub use models::{Coordinates, LibraryRecord, Popularity, Report, VisitorRecord};

use thiserror::Error;

/// A library `location` field that could not be reduced to a coordinate pair.
#[derive(Debug, Error, PartialEq)]
pub enum LocationError {
    #[error("location field is empty")]
    Empty,

    #[error("expected \"(lat, lon)\", got {0:?}")]
    Malformed(String),

    #[error("invalid number {text:?} in location field")]
    InvalidNumber { text: String },
}

/// Min-max normalization could not produce a score.
#[derive(Debug, Error, PartialEq)]
pub enum NormalizeError {
    #[error("no visitor counts to normalize")]
    Empty,

    /// Every count is identical, so the range is zero.
    #[error("all visitor counts are equal ({value}); popularity range is undefined")]
    Degenerate { value: u64 },
}

/// Errors raised by the lookup pipeline once both datasets are in memory.
#[derive(Debug, Error)]
pub enum FinderError {
    #[error("library {library:?} has an unparseable location")]
    Location {
        library: String,
        #[source]
        source: LocationError,
    },

    #[error("cannot compute popularity: {0}")]
    Normalize(#[from] NormalizeError),

    #[error("library dataset contains no rows")]
    NoLibraries,
}

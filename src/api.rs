//! Synchronous loader for the two **City of Chicago data portal** datasets.
//!
//! Both datasets are downloaded as CSV from the Socrata resource endpoints and
//! decoded into `models::LibraryRecord` / `models::VisitorRecord` rows.
//!
//! ### Notes
//! - Requests are made one after the other and are not retried.
//! - Network timeouts use a sane default (30s total, 10s connect).
//! - Decoding is available separately (`read_libraries`, `read_visitors`) so
//!   any `Read` source can be fed through the same path.
//!
//! Typical usage:
//! ```no_run
//! # use nearest_library::Client;
//! let client = Client::default();
//! let libraries = client.fetch_libraries()?;
//! let visitors = client.fetch_visitors()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::models::{LibraryRecord, VisitorRecord};
use anyhow::{Context, Result, bail};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde::de::DeserializeOwned;
use std::io::Read;
use std::time::Duration;

/// Chicago Public Library locations, contact information, and hours.
pub const LIBRARIES_URL: &str = "https://data.cityofchicago.org/resource/x8fc-8rcq.csv";
/// Libraries - 2018 Visitors by Location.
pub const VISITORS_URL: &str = "https://data.cityofchicago.org/resource/i7zz-iiza.csv";

#[derive(Debug, Clone)]
pub struct Client {
    pub libraries_url: String,
    pub visitors_url: String,
    http: HttpClient,
}

impl Client {
    /// Build a client against the default dataset locations.
    pub fn new() -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30)) // total request timeout
            .connect_timeout(Duration::from_secs(10)) // connect timeout
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("nearest-library/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("build http client")?;
        Ok(Self {
            libraries_url: LIBRARIES_URL.into(),
            visitors_url: VISITORS_URL.into(),
            http,
        })
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new().expect("reqwest client build")
    }
}

/// Decode a CSV document with a header row into typed records.
fn read_records<T, R>(reader: R, dataset: &str) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut out = Vec::new();
    for (i, row) in rdr.deserialize::<T>().enumerate() {
        // +2: one for the header, one for 1-based line numbers
        let rec = row.with_context(|| format!("parse {} row {}", dataset, i + 2))?;
        out.push(rec);
    }
    Ok(out)
}

/// Decode the library directory CSV.
pub fn read_libraries<R: Read>(reader: R) -> Result<Vec<LibraryRecord>> {
    read_records(reader, "libraries")
}

/// Decode the visitors-by-location CSV.
pub fn read_visitors<R: Read>(reader: R) -> Result<Vec<VisitorRecord>> {
    read_records(reader, "visitors")
}

impl Client {
    fn get_text(&self, url: &str) -> Result<String> {
        log::info!("downloading {}", url);
        let resp = self.http.get(url).send().context("send request")?;
        if !resp.status().is_success() {
            bail!("request failed with HTTP {}", resp.status());
        }
        resp.text().context("read response body")
    }

    /// Download and decode the library directory.
    ///
    /// ### Errors
    /// - Network/HTTP error
    /// - CSV decoding error (missing columns, bad row)
    pub fn fetch_libraries(&self) -> Result<Vec<LibraryRecord>> {
        let body = self
            .get_text(&self.libraries_url)
            .with_context(|| format!("GET {}", self.libraries_url))?;
        let rows = read_libraries(body.as_bytes())?;
        log::info!("loaded {} libraries", rows.len());
        Ok(rows)
    }

    /// Download and decode the visitors-by-location dataset.
    ///
    /// ### Errors
    /// - Network/HTTP error
    /// - CSV decoding error (missing columns, non-integer `ytd`)
    pub fn fetch_visitors(&self) -> Result<Vec<VisitorRecord>> {
        let body = self
            .get_text(&self.visitors_url)
            .with_context(|| format!("GET {}", self.visitors_url))?;
        let rows = read_visitors(body.as_bytes())?;
        log::info!("loaded {} visitor locations", rows.len());
        Ok(rows)
    }
}

use std::{convert::Infallible, fmt, path::PathBuf, str::FromStr, thread};

use anyhow::{Context, Result, anyhow};
use topokit::Topology;

use crate::data::EducationRecord;

/// County-level education attainment records.
pub const EDUCATION_URL: &str =
    "https://cdn.freecodecamp.org/testable-projects-fcc/data/choropleth_map/for_user_education.json";

/// U.S. county topology, pre-projected to a 975×610 plane.
pub const COUNTIES_URL: &str =
    "https://cdn.freecodecamp.org/testable-projects-fcc/data/choropleth_map/counties.json";

/// Where a dataset comes from: an HTTP(S) URL or a local file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Url(String),
    Path(PathBuf),
}

impl Source {
    /// Anything starting with `http://` or `https://` is a URL; everything else is a path.
    pub fn parse(s: &str) -> Self {
        if s.starts_with("http://") || s.starts_with("https://") {
            Source::Url(s.to_string())
        } else {
            Source::Path(PathBuf::from(s))
        }
    }

    /// Read the whole source into memory.
    pub fn fetch(&self) -> Result<Vec<u8>> {
        let bytes = match self {
            Source::Path(path) => std::fs::read(path)
                .with_context(|| format!("[load] Failed to read {}", path.display()))?,
            Source::Url(url) => fetch_url(url)?,
        };
        tracing::debug!(source = %self, bytes = bytes.len(), "fetched");
        Ok(bytes)
    }
}

impl FromStr for Source {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> { Ok(Source::parse(s)) }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Url(url) => f.write_str(url),
            Source::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(feature = "download")]
fn fetch_url(url: &str) -> Result<Vec<u8>> {
    use reqwest::{blocking::Client, redirect::Policy};

    let client = Client::builder()
        .user_agent(concat!("choropleth/", env!("CARGO_PKG_VERSION")))
        .redirect(Policy::limited(10))
        .build()?;

    let resp = client.get(url).send()
        .with_context(|| format!("[load] GET {url}"))?
        .error_for_status()
        .with_context(|| format!("[load] GET {url} returned error status"))?;

    Ok(resp.bytes().with_context(|| format!("[load] Failed to read body of {url}"))?.to_vec())
}

#[cfg(not(feature = "download"))]
fn fetch_url(url: &str) -> Result<Vec<u8>> {
    anyhow::bail!("[load] Cannot fetch {url}: built without the `download` feature")
}

/// Fetch two sources concurrently and wait for both.
/// The first error (in argument order) wins; nothing is returned partially.
pub fn fetch_both(a: &Source, b: &Source) -> Result<(Vec<u8>, Vec<u8>)> {
    thread::scope(|scope| {
        let first = scope.spawn(|| a.fetch());
        let second = scope.spawn(|| b.fetch());

        let first = first.join().map_err(|_| anyhow!("[load] fetch of {a} panicked"))?;
        let second = second.join().map_err(|_| anyhow!("[load] fetch of {b} panicked"))?;
        Ok((first?, second?))
    })
}

/// Parse the education dataset (a JSON array of records).
pub fn parse_records(bytes: &[u8]) -> Result<Vec<EducationRecord>> {
    serde_json::from_slice(bytes).context("[load] Education dataset is not a JSON array of records")
}

/// Parse the county topology.
pub fn parse_topology(bytes: &[u8]) -> Result<Topology> {
    Topology::from_slice(bytes).context("[load] County dataset is not a TopoJSON topology")
}

/// Load both datasets: fetch concurrently, then parse.
pub fn load_datasets(education: &Source, counties: &Source) -> Result<(Vec<EducationRecord>, Topology)> {
    let (education_bytes, counties_bytes) = fetch_both(education, counties)?;

    let records = parse_records(&education_bytes)
        .with_context(|| format!("[load] while reading {education}"))?;
    let topology = parse_topology(&counties_bytes)
        .with_context(|| format!("[load] while reading {counties}"))?;

    tracing::info!(records = records.len(), arcs = topology.num_arcs(), "datasets loaded");
    Ok((records, topology))
}

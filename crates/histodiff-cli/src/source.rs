//! Input retrieval: turn a command-line locator into histogram text.
//!
//! Remote inputs are downloaded once into a scratch file that lives only as
//! long as the returned [`Snapshot`]; it is removed on drop, including when
//! the run fails part way through.

use histodiff_engine::parse_histogram;
use histodiff_types::{Error, Histogram, Result};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Where a histogram report comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Url(String),
}

impl InputSource {
    pub fn parse(locator: &str) -> Self {
        if locator.starts_with("http://") || locator.starts_with("https://") {
            InputSource::Url(locator.to_string())
        } else {
            InputSource::File(PathBuf::from(locator))
        }
    }

    /// Materialize the input locally and read it.
    pub fn load(&self) -> Result<Snapshot> {
        self.load_in(&std::env::temp_dir())
    }

    /// Like [`InputSource::load`], placing any scratch file in `scratch_dir`.
    pub fn load_in(&self, scratch_dir: &Path) -> Result<Snapshot> {
        match self {
            InputSource::File(path) => {
                let text = read_text(path)?;
                Ok(Snapshot {
                    text,
                    _scratch: None,
                })
            }
            InputSource::Url(url) => {
                let scratch = download(url, scratch_dir)?;
                let text = read_text(scratch.path())?;
                Ok(Snapshot {
                    text,
                    _scratch: Some(scratch),
                })
            }
        }
    }
}

/// Loaded report text, plus the scratch file backing it (if any)
#[derive(Debug)]
pub struct Snapshot {
    text: String,
    _scratch: Option<NamedTempFile>,
}

impl Snapshot {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn scratch_path(&self) -> Option<&Path> {
        self._scratch.as_ref().map(|f| f.path())
    }
}

/// Load and parse one input. The snapshot (and its scratch file) is
/// dropped before this returns, so nothing is left behind if the process
/// is killed while the report is still being written.
pub fn load_histogram(source: &InputSource) -> Result<Histogram> {
    load_histogram_in(source, &std::env::temp_dir())
}

pub fn load_histogram_in(source: &InputSource, scratch_dir: &Path) -> Result<Histogram> {
    let snapshot = source.load_in(scratch_dir)?;
    Ok(parse_histogram(snapshot.text()))
}

fn read_text(path: &Path) -> Result<String> {
    let mut bytes = Vec::new();
    fs::File::open(path)?.read_to_end(&mut bytes)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read histogram input");
    // Class names are ASCII in practice; keep going on stray bytes
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn download(url: &str, scratch_dir: &Path) -> Result<NamedTempFile> {
    let fetch_error = |message: String| Error::Fetch {
        url: url.to_string(),
        message,
    };

    let mut scratch = tempfile::Builder::new()
        .prefix("histodiff-")
        .suffix(".tmp")
        .tempfile_in(scratch_dir)?;

    tracing::debug!(url, scratch = %scratch.path().display(), "fetching remote histogram");

    let mut response = reqwest::blocking::get(url)
        .and_then(|r| r.error_for_status())
        .map_err(|e| fetch_error(e.to_string()))?;

    let copied = response
        .copy_to(scratch.as_file_mut())
        .map_err(|e| fetch_error(e.to_string()))?;
    tracing::debug!(url, bytes = copied, "downloaded remote histogram");

    Ok(scratch)
}

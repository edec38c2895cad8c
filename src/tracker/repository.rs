//! Keeps the word tree between runs

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::error::{TrackerError, TrackerResult};
use super::WordTracker;

/// Default repository file name, relative to the working directory.
pub const DEFAULT_REPOSITORY: &str = "repository.json";

/// A JSON file holding the whole word tree.
#[derive(Debug, Clone)]
pub struct Repository {
    path: PathBuf,
}

impl Repository {
    /// A repository stored at `path`. Nothing is read until [`load`][Self::load].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Where the repository lives.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored tracker. A missing file gives an empty tracker, and so does a file that
    /// can't be read or decoded (after logging a warning).
    pub fn load(&self) -> WordTracker {
        match self.try_load() {
            Ok(Some(tracker)) => {
                info!(
                    "load: {} words from {}",
                    tracker.len(),
                    self.path.display()
                );
                tracker
            }
            Ok(None) => {
                debug!("load: no repository at {}", self.path.display());
                WordTracker::new()
            }
            Err(e) => {
                warn!("load: starting with a new tree: {}", e);
                WordTracker::new()
            }
        }
    }

    /// Reads the stored tracker, or `None` if there is no repository file yet.
    pub fn try_load(&self) -> TrackerResult<Option<WordTracker>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(TrackerError::io(&self.path, e)),
        };

        serde_json::from_reader(BufReader::new(file))
            .map(Some)
            .map_err(|source| TrackerError::Format {
                path: self.path.clone(),
                source,
            })
    }

    /// Writes `tracker` out, replacing anything stored before.
    pub fn save(&self, tracker: &WordTracker) -> TrackerResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| TrackerError::io(parent, e))?;
        }

        let file = File::create(&self.path).map_err(|e| TrackerError::io(&self.path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, tracker).map_err(|source| TrackerError::Format {
            path: self.path.clone(),
            source,
        })?;
        writer
            .flush()
            .map_err(|e| TrackerError::io(&self.path, e))?;

        debug!(
            "save: {} words to {}",
            tracker.len(),
            self.path.display()
        );
        Ok(())
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new(DEFAULT_REPOSITORY)
    }
}

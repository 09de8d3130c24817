//! Save-destination selection, delegated to the host (a file dialog, a CLI flag)

use std::path::PathBuf;

/// What the export asks the destination picker for
#[derive(Debug, Clone, PartialEq)]
pub struct SaveRequest {
    /// Suggested file name, e.g. `screenshot.png`
    pub default_name: String,
    /// Filter label, e.g. `PNG Image`
    pub filter_name: String,
    /// Allowed extensions without the dot
    pub extensions: Vec<String>,
}

pub trait SaveDestination: Send + Sync {
    /// Return the chosen path, or `None` when the user canceled.
    fn choose(&self, request: &SaveRequest) -> Option<PathBuf>;
}

/// Always answers with the same path (CLI `--output`, tests)
pub struct FixedDestination {
    path: PathBuf,
}

impl FixedDestination {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FixedDestination { path: path.into() }
    }
}

impl SaveDestination for FixedDestination {
    fn choose(&self, _request: &SaveRequest) -> Option<PathBuf> {
        Some(self.path.clone())
    }
}

/// Puts the suggested file name inside a directory
pub struct DirectoryDestination {
    dir: PathBuf,
}

impl DirectoryDestination {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DirectoryDestination { dir: dir.into() }
    }
}

impl SaveDestination for DirectoryDestination {
    fn choose(&self, request: &SaveRequest) -> Option<PathBuf> {
        Some(self.dir.join(&request.default_name))
    }
}

/// Behaves like a user who always presses "Cancel"
pub struct CanceledDestination;

impl SaveDestination for CanceledDestination {
    fn choose(&self, _request: &SaveRequest) -> Option<PathBuf> {
        None
    }
}

//! Optional `.env` loading.
//!
//! Variables already present in the process environment are never
//! overwritten.

use std::path::{Path, PathBuf};

/// Result of looking for a `.env` file.
#[derive(Debug)]
pub enum EnvFile {
    /// The file was found and applied.
    Loaded(PathBuf),
    /// No file was found.
    Absent,
    /// A file was found but could not be read or parsed.
    Invalid(dotenvy::Error),
}

impl EnvFile {
    /// Looks for `.env` in the working directory and its parents.
    pub fn load() -> Self {
        Self::from_result(dotenvy::dotenv())
    }

    /// Loads the file at `path`.
    pub fn load_from(path: &Path) -> Self {
        Self::from_result(dotenvy::from_path(path).map(|_| path.to_path_buf()))
    }

    fn from_result(result: Result<PathBuf, dotenvy::Error>) -> Self {
        match result {
            Ok(path) => EnvFile::Loaded(path),
            Err(e) if e.not_found() => EnvFile::Absent,
            Err(e) => EnvFile::Invalid(e),
        }
    }

    /// Reports the outcome. Loading happens before logging is set up, so
    /// this is called separately once it is.
    pub fn log(&self) {
        match self {
            EnvFile::Loaded(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
            }
            EnvFile::Absent => {}
            EnvFile::Invalid(e) => {
                tracing::warn!("Ignoring unreadable .env file: {}", e);
            }
        }
    }
}

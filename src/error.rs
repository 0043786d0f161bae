use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit status used when the user backs out of the selector.
pub const EXIT_CANCELLED: u8 = 130;

/// Failures of a directory source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to run find: {0}")]
    Spawn(#[source] io::Error),
    #[error("directory listing exited with {}", status_text(.code))]
    Failed { code: Option<i32> },
    #[error("failed to read directory listing: {0}")]
    Io(#[from] io::Error),
}

fn status_text(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "a signal".to_string(),
    }
}

#[derive(Debug, Error)]
pub enum FcdError {
    #[error("A search pattern is required.")]
    MissingPattern,
    #[error("Search root is not a directory: {}", .0.display())]
    InvalidRoot(PathBuf),
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("No directories matched \"{0}\".")]
    NoMatches(String),
    #[error("terminal error: {0}")]
    Terminal(#[source] io::Error),
}

impl FcdError {
    pub fn exit_code(&self) -> u8 {
        match self {
            FcdError::Source(SourceError::Failed { code: Some(code) }) => {
                u8::try_from(*code).ok().filter(|c| *c != 0).unwrap_or(1)
            }
            _ => 1,
        }
    }
}

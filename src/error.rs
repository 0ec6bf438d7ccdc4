use std::{fmt, path::PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Please provide a directory path.")]
    Usage,
    #[error("The provided path does not exist: {}", .0.display())]
    NotFound(PathBuf),
    #[error("The provided path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to walk directory: {0}")]
    Walk(#[from] ignore::Error),
    #[error("Failed to parse config file: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Config(String),
    #[error("{0} file(s) failed to convert")]
    Failures(usize),
}

/// Step of a single conversion that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Read,
    Write,
    Delete,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Read => "read",
            Stage::Write => "write",
            Stage::Delete => "delete",
        })
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{stage} failed: {source}")]
pub struct ConvertError {
    pub path: PathBuf,
    pub stage: Stage,
    #[source]
    pub source: std::io::Error,
}

impl ConvertError {
    pub fn new(path: impl Into<PathBuf>, stage: Stage, source: std::io::Error) -> Self {
        Self {
            path: path.into(),
            stage,
            source,
        }
    }
}

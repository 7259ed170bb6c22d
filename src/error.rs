use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IwcError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid option '{0}'")]
    InvalidOption(String),

    #[error("missing file path after '{0}'")]
    MissingPath(String),
}

impl IwcError {
    /// Tag an I/O error with the path it occurred on
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        IwcError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

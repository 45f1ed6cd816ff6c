use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Everything that can abort a run. All variants are unrecoverable for the
/// current run: training is deterministic, so retrying with identical inputs
/// would reproduce the same failure.
#[derive(Debug)]
pub enum Error {
    /// Invalid shape or hyperparameter (zero hidden width, empty dataset,
    /// non-finite learning rate, malformed record shapes).
    Configuration(String),
    /// The external ingestion executable was not found. Checked up front,
    /// before any training work.
    MissingExecutable(PathBuf),
    /// The ingestion process ran but returned a non-zero exit status.
    /// `code` is `None` when the process was killed by a signal.
    IngestFailure { code: Option<i32> },
    Io(std::io::Error),
    Json(serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration(msg) => {
                write!(f, "invalid configuration: {}", msg)
            }
            Self::MissingExecutable(path) => {
                write!(f, "ingestion executable not found: {}", path.display())
            }
            Self::IngestFailure { code: Some(code) } => {
                write!(f, "ingestion process exited with status {}", code)
            }
            Self::IngestFailure { code: None } => {
                write!(f, "ingestion process terminated by signal")
            }
            Self::Io(err) => write!(f, "i/o error: {}", err),
            Self::Json(err) => write!(f, "json error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

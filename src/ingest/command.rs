use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};

/// The external-ingestion capability: hand a payload file to a collaborator
/// and learn whether it succeeded. The numeric core never spawns processes
/// itself; callers inject an implementation (tests use a closure).
pub trait Ingestor {
    fn ingest(&self, payload: &Path) -> Result<()>;
}

impl<F> Ingestor for F
where
    F: Fn(&Path) -> Result<()>,
{
    fn ingest(&self, payload: &Path) -> Result<()> {
        self(payload)
    }
}

/// Runs an external executable as `<executable> --tensor-ingest <payload>`
/// and maps its exit status onto the error taxonomy. The collaborator's
/// output is not interpreted; only the exit status matters.
pub struct CommandIngestor {
    executable: PathBuf,
}

impl CommandIngestor {
    pub fn new(executable: impl Into<PathBuf>) -> CommandIngestor {
        CommandIngestor { executable: executable.into() }
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Fail-fast precondition: the executable must exist before any
    /// training work starts, so a misconfigured run costs nothing.
    pub fn check(&self) -> Result<()> {
        if !self.executable.exists() {
            return Err(Error::MissingExecutable(self.executable.clone()));
        }
        Ok(())
    }
}

impl Ingestor for CommandIngestor {
    fn ingest(&self, payload: &Path) -> Result<()> {
        let status = Command::new(&self.executable)
            .arg("--tensor-ingest")
            .arg(payload)
            .status()?;

        if !status.success() {
            return Err(Error::IngestFailure { code: status.code() });
        }
        Ok(())
    }
}

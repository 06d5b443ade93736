//! I/O boundary traits for testability
//!
//! These traits abstract external I/O operations, allowing services
//! to be tested with mock implementations.

use std::io;
use std::path::Path;

use colored::Colorize;

use crate::application::ApplicationResult;
use crate::domain::{AliasMap, ArtifactKind, AudioRequest};

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Read file contents to string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write string content to file.
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Write raw bytes to file.
    fn write_bytes(&self, path: &Path, content: &[u8]) -> io::Result<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Rename/move a file, replacing the target.
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Remove a file.
    fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// Create parent directories if needed.
    fn ensure_parent(&self, path: &Path) -> io::Result<()>;
}

/// Durable home of the alias mapping.
///
/// The whole mapping is read at once and replaced at once.
pub trait AliasStore: Send + Sync {
    /// Load every alias. A store that was never written is empty, not an error.
    fn load(&self) -> ApplicationResult<AliasMap>;

    /// Replace the persisted mapping with `aliases`.
    fn save(&self, aliases: &AliasMap) -> ApplicationResult<()>;
}

/// Interactive yes/no source.
pub trait Prompter: Send + Sync {
    /// Show `prompt` and block for one line of input.
    /// Returns `None` at end of input.
    fn ask(&self, prompt: &str) -> io::Result<Option<String>>;
}

/// Remote notebook service.
///
/// Every id handed to a client has already been through alias resolution.
pub trait NotebookClient: Send + Sync {
    /// Fetch the content of a generated artifact.
    fn download_artifact(
        &self,
        notebook_id: &str,
        artifact_id: &str,
        kind: ArtifactKind,
    ) -> Result<Vec<u8>, String>;

    /// Start generating an audio overview. Returns the new artifact id.
    fn create_audio(&self, notebook_id: &str, request: &AudioRequest) -> Result<String, String>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        std::fs::write(path, content)
    }

    fn write_bytes(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        std::fs::write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        std::fs::rename(from, to)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_file(path)
    }

    fn ensure_parent(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                self.create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

/// Prompter reading answers from standard input.
///
/// The question goes to stderr so stdout stays clean for scripting.
#[derive(Debug, Default)]
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn ask(&self, prompt: &str) -> io::Result<Option<String>> {
        use std::io::{BufRead, Write};

        eprint!("{} ", prompt.cyan());
        io::stderr().flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            // keep the shell prompt off the question line
            eprintln!();
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Client used until a transport to the notebook service is configured.
///
/// Every call fails; the error names the ids it was given so users can see
/// what their references resolved to.
#[derive(Debug, Default)]
pub struct DisconnectedClient;

impl NotebookClient for DisconnectedClient {
    fn download_artifact(
        &self,
        notebook_id: &str,
        artifact_id: &str,
        kind: ArtifactKind,
    ) -> Result<Vec<u8>, String> {
        Err(format!(
            "not connected: cannot download {} artifact {} from notebook {}",
            kind, artifact_id, notebook_id
        ))
    }

    fn create_audio(&self, notebook_id: &str, _request: &AudioRequest) -> Result<String, String> {
        Err(format!(
            "not connected: cannot create audio for notebook {}",
            notebook_id
        ))
    }
}

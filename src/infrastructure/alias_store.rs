//! Alias store implementations
//!
//! `TomlAliasStore` keeps the mapping in a single TOML file. The file is
//! rewritten in full on every save via a sibling temp file and a rename, so a
//! crash mid-write leaves the previous contents intact.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{AliasEntry, AliasMap};
use crate::infrastructure::traits::{AliasStore, FileSystem};

/// On-disk format version written by this build.
pub const ALIAS_FILE_VERSION: u32 = 1;

/// File name of the alias store inside the base directory.
pub const ALIAS_FILE_NAME: &str = "aliases.toml";

#[derive(Debug, Serialize, Deserialize)]
struct AliasDocument {
    version: u32,
    #[serde(default)]
    aliases: Vec<AliasEntry>,
}

/// File-backed alias store.
pub struct TomlAliasStore {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
}

impl TomlAliasStore {
    pub fn new(fs: Arc<dyn FileSystem>, path: PathBuf) -> Self {
        Self { fs, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| ALIAS_FILE_NAME.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn parse(&self, content: &str) -> ApplicationResult<AliasMap> {
        let doc: AliasDocument = toml::from_str(content).map_err(|e| {
            ApplicationError::storage(format!("parse alias file: {}", self.path.display()), e)
        })?;

        if doc.version != ALIAS_FILE_VERSION {
            return Err(ApplicationError::storage(
                format!("read alias file: {}", self.path.display()),
                format!(
                    "unsupported version {} (expected {})",
                    doc.version, ALIAS_FILE_VERSION
                ),
            ));
        }

        // re-validate: a hand-edited file must not smuggle in bad names or ids
        let mut entries = Vec::with_capacity(doc.aliases.len());
        for raw in doc.aliases {
            let entry = AliasEntry::new(&raw.name, &raw.remote_id, raw.resource_type).map_err(
                |e| ApplicationError::storage(format!("corrupt alias file: {}", self.path.display()), e),
            )?;
            entries.push(entry);
        }
        Ok(AliasMap::from_entries(entries))
    }
}

impl AliasStore for TomlAliasStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> ApplicationResult<AliasMap> {
        let content = match self.fs.read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("load: no alias file yet");
                return Ok(AliasMap::new());
            }
            Err(e) => return Err(e).with_path_context("read alias file", &self.path),
        };
        let aliases = self.parse(&content)?;
        debug!("load: {} aliases", aliases.len());
        Ok(aliases)
    }

    #[instrument(skip(self, aliases), fields(path = %self.path.display(), count = aliases.len()))]
    fn save(&self, aliases: &AliasMap) -> ApplicationResult<()> {
        let doc = AliasDocument {
            version: ALIAS_FILE_VERSION,
            aliases: aliases.iter().cloned().collect(),
        };
        let content = toml::to_string_pretty(&doc).map_err(|e| {
            ApplicationError::storage(format!("serialize alias file: {}", self.path.display()), e)
        })?;

        self.fs
            .ensure_parent(&self.path)
            .with_path_context("create alias directory", &self.path)?;

        let tmp = self.temp_path();
        if let Err(e) = self.fs.write(&tmp, &content) {
            let _ = self.fs.remove_file(&tmp);
            return Err(e).with_path_context("write alias file", &tmp);
        }
        if let Err(e) = self.fs.rename(&tmp, &self.path) {
            let _ = self.fs.remove_file(&tmp);
            return Err(e).with_path_context("replace alias file", &self.path);
        }
        debug!("save: done");
        Ok(())
    }
}

/// In-memory alias store for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryAliasStore {
    aliases: Mutex<AliasMap>,
    saves: Mutex<usize>,
}

impl MemoryAliasStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `save` has been called.
    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl AliasStore for MemoryAliasStore {
    fn load(&self) -> ApplicationResult<AliasMap> {
        Ok(self
            .aliases
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn save(&self, aliases: &AliasMap) -> ApplicationResult<()> {
        *self.aliases.lock().unwrap_or_else(PoisonError::into_inner) = aliases.clone();
        *self.saves.lock().unwrap_or_else(PoisonError::into_inner) += 1;
        Ok(())
    }
}

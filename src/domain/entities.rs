//! Domain entities: core data structures

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::DomainError;

/// Longest alias name accepted by `validate_alias_name`.
pub const MAX_ALIAS_NAME_LEN: usize = 64;

/// Kind of remote object an alias points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Notebook,
    Source,
    Artifact,
}

impl ResourceType {
    pub const ALL: [ResourceType; 3] = [
        ResourceType::Notebook,
        ResourceType::Source,
        ResourceType::Artifact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Notebook => "notebook",
            ResourceType::Source => "source",
            ResourceType::Artifact => "artifact",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "notebook" => Ok(ResourceType::Notebook),
            "source" => Ok(ResourceType::Source),
            "artifact" => Ok(ResourceType::Artifact),
            _ => Err(DomainError::UnknownResourceType(s.to_string())),
        }
    }
}

/// A short user-chosen name bound to a remote identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasEntry {
    pub name: String,
    pub remote_id: String,
    pub resource_type: ResourceType,
}

impl AliasEntry {
    /// Build a validated entry.
    ///
    /// The remote id is normalized to lowercase hyphenated form so that
    /// `ABCDEF01-...` and `abcdef01-...` resolve to the same string.
    pub fn new(
        name: &str,
        remote_id: &str,
        resource_type: ResourceType,
    ) -> Result<Self, DomainError> {
        validate_alias_name(name)?;
        let remote_id = normalize_remote_id(remote_id)?;
        Ok(Self {
            name: name.to_string(),
            remote_id,
            resource_type,
        })
    }
}

/// All aliases, in insertion order, unique by name.
///
/// Names are the sole uniqueness key: the same name cannot point at a
/// notebook and a source at the same time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasMap {
    entries: Vec<AliasEntry>,
}

impl AliasMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from already-persisted entries. Later duplicates win.
    pub fn from_entries(entries: impl IntoIterator<Item = AliasEntry>) -> Self {
        let mut map = Self::new();
        for entry in entries {
            map.insert(entry);
        }
        map
    }

    pub fn get(&self, name: &str) -> Option<&AliasEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Insert or overwrite. An overwritten entry keeps its position.
    ///
    /// Returns the previous entry for `name`, if any.
    pub fn insert(&mut self, entry: AliasEntry) -> Option<AliasEntry> {
        match self.entries.iter_mut().find(|e| e.name == entry.name) {
            Some(slot) => Some(std::mem::replace(slot, entry)),
            None => {
                self.entries.push(entry);
                None
            }
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<AliasEntry> {
        let idx = self.entries.iter().position(|e| e.name == name)?;
        Some(self.entries.remove(idx))
    }

    pub fn iter(&self) -> impl Iterator<Item = &AliasEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<AliasEntry> {
        self.entries
    }
}

fn alias_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").expect("static regex"))
}

/// Check that `name` is usable as an alias.
///
/// Names must be non-empty, at most `MAX_ALIAS_NAME_LEN` characters, start
/// with an ASCII letter or digit and contain only letters, digits, `.`, `_`
/// and `-`. A name that parses as a UUID is rejected: it would shadow the
/// raw id of the same spelling.
pub fn validate_alias_name(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidAliasName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.is_empty() {
        return Err(invalid("name must not be empty"));
    }
    if name.chars().count() > MAX_ALIAS_NAME_LEN {
        return Err(invalid(&format!(
            "name longer than {} characters",
            MAX_ALIAS_NAME_LEN
        )));
    }
    if !alias_name_regex().is_match(name) {
        return Err(invalid(
            "use letters, digits, '.', '_' or '-', starting with a letter or digit",
        ));
    }
    if is_remote_id(name) {
        return Err(invalid("name looks like a remote id"));
    }
    Ok(())
}

/// True if `value` is syntactically a remote id.
pub fn is_remote_id(value: &str) -> bool {
    Uuid::parse_str(value.trim()).is_ok()
}

/// Parse `value` as a UUID and return its lowercase hyphenated form.
pub fn normalize_remote_id(value: &str) -> Result<String, DomainError> {
    Uuid::parse_str(value.trim())
        .map(|id| id.hyphenated().to_string())
        .map_err(|_| DomainError::InvalidRemoteId(value.to_string()))
}

/// Expand environment variables in a path string.
///
/// Supports:
/// - `$VAR` syntax
/// - `${VAR}` syntax
/// - `~` for home directory
///
/// Uses shellexpand crate for robust expansion.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

/// Downloadable artifact kinds and the file extension used when no output
/// path is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Audio,
    Video,
    Report,
    MindMap,
    SlideDeck,
    Infographic,
}

impl ArtifactKind {
    pub fn extension(&self) -> &'static str {
        match self {
            ArtifactKind::Audio => "m4a",
            ArtifactKind::Video => "mp4",
            ArtifactKind::Report => "md",
            ArtifactKind::MindMap => "json",
            ArtifactKind::SlideDeck => "pdf",
            ArtifactKind::Infographic => "png",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ArtifactKind::Audio => "audio",
            ArtifactKind::Video => "video",
            ArtifactKind::Report => "report",
            ArtifactKind::MindMap => "mind-map",
            ArtifactKind::SlideDeck => "slide-deck",
            ArtifactKind::Infographic => "infographic",
        };
        f.write_str(s)
    }
}

/// Parameters for an audio overview, already translated to service codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioRequest {
    pub format_code: u32,
    pub length_code: u32,
    pub language: Option<String>,
    pub focus: Option<String>,
}

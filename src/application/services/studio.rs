//! Studio use cases: artifact download and audio overview creation
//!
//! Every reference goes through `ReferenceResolver` before it reaches the
//! notebook client, so aliases and raw ids behave the same.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::services::{ConfirmationGate, ReferenceResolver};
use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{normalize_remote_id, ArtifactKind, AudioRequest, CodeMapper, DomainError};
use crate::infrastructure::traits::{FileSystem, NotebookClient};

/// User-facing audio options, before translation to service codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioOptions {
    pub format: String,
    pub length: String,
    pub language: Option<String>,
    pub focus: Option<String>,
}

impl Default for AudioOptions {
    fn default() -> Self {
        Self {
            format: "deep_dive".into(),
            length: "default".into(),
            language: None,
            focus: None,
        }
    }
}

/// Result of a successful download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub path: PathBuf,
    pub bytes: usize,
}

/// Studio service.
pub struct StudioService {
    resolver: ReferenceResolver,
    gate: ConfirmationGate,
    client: Arc<dyn NotebookClient>,
    fs: Arc<dyn FileSystem>,
    codes: CodeMapper,
}

impl StudioService {
    pub fn new(
        resolver: ReferenceResolver,
        gate: ConfirmationGate,
        client: Arc<dyn NotebookClient>,
        fs: Arc<dyn FileSystem>,
    ) -> Self {
        Self {
            resolver,
            gate,
            client,
            fs,
            codes: CodeMapper,
        }
    }

    /// Download an artifact to `output`, or to `<artifact_id>.<ext>` in the
    /// current directory.
    ///
    /// Without `output` the artifact must resolve to a remote id, so a
    /// pass-through reference never turns into a file path.
    #[instrument(skip(self))]
    pub fn download(
        &self,
        kind: ArtifactKind,
        notebook_ref: &str,
        artifact_ref: &str,
        output: Option<&Path>,
    ) -> ApplicationResult<Download> {
        let notebook_id = self.resolver.resolve_reference(notebook_ref)?;
        let artifact_id = self.resolver.resolve_reference(artifact_ref)?;
        debug!("download: notebook={} artifact={}", notebook_id, artifact_id);

        let path = match output {
            Some(path) => path.to_path_buf(),
            None => {
                let id = normalize_remote_id(&artifact_id)
                    .map_err(|_| DomainError::OutputPathRequired(artifact_id.clone()))?;
                PathBuf::from(format!("{}.{}", id, kind.extension()))
            }
        };

        let content = self
            .client
            .download_artifact(&notebook_id, &artifact_id, kind)
            .map_err(|message| ApplicationError::Remote { message })?;

        self.fs
            .ensure_parent(&path)
            .with_path_context("create output directory", &path)?;
        self.fs
            .write_bytes(&path, &content)
            .with_path_context("write artifact", &path)?;

        info!("downloaded {} artifact to {}", kind, path.display());
        Ok(Download {
            path,
            bytes: content.len(),
        })
    }

    /// Start an audio overview for a notebook. Returns the new artifact id.
    ///
    /// Options are validated before the operator is asked, so a typo in
    /// `--format` never produces a prompt.
    #[instrument(skip(self))]
    pub fn create_audio(
        &self,
        notebook_ref: &str,
        options: &AudioOptions,
        confirm: bool,
    ) -> ApplicationResult<String> {
        let notebook_id = self.resolver.resolve_reference(notebook_ref)?;
        let request = AudioRequest {
            format_code: self.codes.audio_format_code(&options.format)?,
            length_code: self.codes.audio_length_code(&options.length)?,
            language: options.language.clone(),
            focus: options.focus.clone(),
        };
        debug!("create_audio: notebook={} request={:?}", notebook_id, request);

        self.gate.require(
            confirm,
            &format!("Create audio overview for notebook {}?", notebook_id),
        )?;

        let artifact_id = self
            .client
            .create_audio(&notebook_id, &request)
            .map_err(|message| ApplicationError::Remote { message })?;
        info!("audio generation started: {}", artifact_id);
        Ok(artifact_id)
    }
}

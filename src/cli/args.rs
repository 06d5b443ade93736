//! CLI argument definitions using clap

use std::ffi::OsStr;
use std::path::PathBuf;

use clap::builder::{PossibleValue, StringValueParser, TypedValueParser};
use clap::{Arg, ArgAction, Command, Parser, Subcommand, ValueEnum, ValueHint};

use crate::domain::{ArtifactKind, ResourceType};

/// Command-line client for hosted notebooks: aliases, downloads and audio overviews
#[derive(Parser, Debug)]
#[command(name = "nlm")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Directory for local state (default: ~/.nlm)
    #[arg(long, global = true, value_hint = ValueHint::DirPath)]
    pub base_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage short names for notebooks, sources and artifacts
    Alias {
        #[command(subcommand)]
        command: AliasCommands,
    },

    /// Download a generated artifact
    Download {
        /// Artifact kind
        #[arg(value_enum)]
        kind: DownloadKind,
        /// Notebook id or alias
        #[arg(long)]
        notebook: String,
        /// Artifact id or alias
        #[arg(long)]
        artifact: String,
        /// Output file (default: <artifact-id>.<ext>)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Audio overviews
    Audio {
        #[command(subcommand)]
        command: AudioCommands,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum AliasCommands {
    /// Create or redefine an alias
    Set {
        /// Alias name
        name: String,
        /// Remote id (UUID)
        remote_id: String,
        /// Resource type
        #[arg(
            long = "type",
            value_name = "TYPE",
            default_value = "notebook",
            value_parser = ResourceTypeParser
        )]
        resource_type: String,
    },

    /// Print the remote id of an alias
    Get {
        /// Alias name
        name: String,
    },

    /// List aliases
    List,

    /// Delete an alias
    Delete {
        /// Alias name
        name: String,
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        confirm: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum AudioCommands {
    /// Start generating an audio overview
    Create {
        /// Notebook id or alias
        #[arg(long)]
        notebook: String,
        /// Format: deep_dive, brief, critique, debate
        #[arg(long, default_value = "deep_dive")]
        format: String,
        /// Length: short, default, long
        #[arg(long, default_value = "default")]
        length: String,
        /// Language code (e.g. en, de)
        #[arg(long)]
        language: Option<String>,
        /// What the hosts should focus on
        #[arg(long)]
        focus: Option<String>,
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        confirm: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init,

    /// Show config and alias file paths
    Path,
}

/// Artifact kinds accepted by `download`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DownloadKind {
    Audio,
    Video,
    Report,
    MindMap,
    SlideDeck,
    Infographic,
}

impl From<DownloadKind> for ArtifactKind {
    fn from(kind: DownloadKind) -> Self {
        match kind {
            DownloadKind::Audio => ArtifactKind::Audio,
            DownloadKind::Video => ArtifactKind::Video,
            DownloadKind::Report => ArtifactKind::Report,
            DownloadKind::MindMap => ArtifactKind::MindMap,
            DownloadKind::SlideDeck => ArtifactKind::SlideDeck,
            DownloadKind::Infographic => ArtifactKind::Infographic,
        }
    }
}

/// Advertises the resource types to `--help` and shell completions while
/// leaving the value unchecked, so an unknown type is reported as a data
/// error by the domain parser rather than as a usage error by clap.
#[derive(Clone, Debug)]
pub struct ResourceTypeParser;

impl TypedValueParser for ResourceTypeParser {
    type Value = String;

    fn parse_ref(
        &self,
        cmd: &Command,
        arg: Option<&Arg>,
        value: &OsStr,
    ) -> Result<Self::Value, clap::Error> {
        StringValueParser::new().parse_ref(cmd, arg, value)
    }

    fn possible_values(&self) -> Option<Box<dyn Iterator<Item = PossibleValue> + '_>> {
        Some(Box::new(
            ResourceType::ALL
                .into_iter()
                .map(|t| PossibleValue::new(t.as_str())),
        ))
    }
}

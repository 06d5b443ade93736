//! Command dispatch: maps parsed arguments onto services

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::services::AudioOptions;
use crate::application::ApplicationError;
use crate::cli::args::{AliasCommands, AudioCommands, Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::domain::ResourceType;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

/// Run the command selected on the command line.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        Cli::command()
            .print_help()
            .map_err(|e| InfraError::io("print help", e))?;
        return Ok(());
    };

    match command {
        Commands::Completion { shell } => cmd_completion(*shell),
        _ => {
            let container = ServiceContainer::new(load_settings(cli)?);
            dispatch(&container, command)
        }
    }
}

/// Run `command` against an already wired container.
pub fn dispatch(container: &ServiceContainer, command: &Commands) -> CliResult<()> {
    match command {
        Commands::Alias { command } => cmd_alias(container, command),
        Commands::Download {
            kind,
            notebook,
            artifact,
            output: out,
        } => {
            let done = container.studio.download(
                (*kind).into(),
                notebook,
                artifact,
                out.as_deref(),
            )?;
            output::success(&format!(
                "Downloaded {} bytes to {}",
                done.bytes,
                done.path.display()
            ));
            Ok(())
        }
        Commands::Audio { command } => cmd_audio(container, command),
        Commands::Config { command } => cmd_config(container, command),
        Commands::Completion { shell } => cmd_completion(*shell),
    }
}

fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let settings = Settings::load()?;
    Ok(match &cli.base_dir {
        Some(dir) => settings.with_base_dir(dir),
        None => settings,
    })
}

#[instrument(skip(c))]
fn cmd_alias(c: &ServiceContainer, command: &AliasCommands) -> CliResult<()> {
    match command {
        AliasCommands::Set {
            name,
            remote_id,
            resource_type,
        } => {
            let resource_type: ResourceType =
                resource_type.parse().map_err(ApplicationError::from)?;
            let entry = c.aliases.set(name, remote_id, resource_type)?;
            output::success(&format!(
                "Alias '{}' -> {} ({})",
                entry.name, entry.remote_id, entry.resource_type
            ));
            Ok(())
        }
        AliasCommands::Get { name } => {
            let entry = c.aliases.get(name)?;
            output::info(&entry.remote_id);
            Ok(())
        }
        AliasCommands::List => {
            let entries = c.aliases.list()?;
            if entries.is_empty() {
                output::hint("No aliases defined.");
            }
            for entry in entries {
                output::info(&format!(
                    "{}\t{}\t{}",
                    entry.name, entry.resource_type, entry.remote_id
                ));
            }
            Ok(())
        }
        AliasCommands::Delete { name, confirm } => {
            // check first so an unknown name is reported instead of prompted for
            if !c.aliases.exists(name)? {
                return Err(ApplicationError::AliasNotFound(name.clone()).into());
            }
            c.gate.require(*confirm, &format!("Delete alias '{}'?", name))?;
            let removed = c.aliases.delete(name)?;
            output::success(&format!("Deleted alias '{}'", removed.name));
            Ok(())
        }
    }
}

#[instrument(skip(c))]
fn cmd_audio(c: &ServiceContainer, command: &AudioCommands) -> CliResult<()> {
    match command {
        AudioCommands::Create {
            notebook,
            format,
            length,
            language,
            focus,
            confirm,
        } => {
            let options = AudioOptions {
                format: format.clone(),
                length: length.clone(),
                language: language.clone(),
                focus: focus.clone(),
            };
            let artifact_id = c.studio.create_audio(notebook, &options, *confirm)?;
            output::action("Audio generation started", &artifact_id);
            Ok(())
        }
    }
}

fn cmd_config(c: &ServiceContainer, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::info(&c.settings.to_toml()?);
            Ok(())
        }
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => output::action("config", &path.display()),
                None => output::warning("no config directory for this platform"),
            }
            output::action("aliases", &c.settings.alias_file().display());
            Ok(())
        }
        ConfigCommands::Init => {
            let path = global_config_path().ok_or_else(|| {
                CliError::Usage("no config directory for this platform".to_string())
            })?;
            if c.fs.exists(&path) {
                return Err(CliError::Usage(format!(
                    "config already exists: {}",
                    path.display()
                )));
            }
            c.fs
                .ensure_parent(&path)
                .map_err(|e| InfraError::io(format!("create {}", path.display()), e))?;
            c.fs
                .write(&path, &Settings::template())
                .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;
            output::success(&format!("Created {}", path.display()));
            Ok(())
        }
    }
}

fn cmd_completion(shell: Shell) -> CliResult<()> {
    debug!("generating completions for {:?}", shell);
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

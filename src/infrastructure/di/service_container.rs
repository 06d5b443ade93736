//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::{
    AliasService, ConfirmationGate, ReferenceResolver, StudioService,
};
use crate::config::Settings;
use crate::infrastructure::alias_store::TomlAliasStore;
use crate::infrastructure::traits::{
    AliasStore, DisconnectedClient, FileSystem, NotebookClient, Prompter, RealFileSystem,
    StdinPrompter,
};

/// Container holding all application services for one command run.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    pub aliases: Arc<AliasService>,
    pub resolver: ReferenceResolver,
    pub gate: ConfirmationGate,
    pub studio: StudioService,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);
        let store = Arc::new(TomlAliasStore::new(fs.clone(), settings.alias_file()));
        Self::with_deps(
            settings,
            fs,
            store,
            Arc::new(StdinPrompter),
            Arc::new(DisconnectedClient),
        )
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        fs: Arc<dyn FileSystem>,
        store: Arc<dyn AliasStore>,
        prompter: Arc<dyn Prompter>,
        client: Arc<dyn NotebookClient>,
    ) -> Self {
        let settings = Arc::new(settings);
        let aliases = Arc::new(AliasService::new(store));
        let resolver = ReferenceResolver::new(aliases.clone());
        let gate = ConfirmationGate::new(prompter);
        let studio = StudioService::new(resolver.clone(), gate.clone(), client, fs.clone());

        Self {
            settings,
            fs,
            aliases,
            resolver,
            gate,
            studio,
        }
    }
}

//! Alias management service
//!
//! Maps short human-readable names to remote ids. Every operation loads the
//! full mapping from the store; mutations write it back in full.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{AliasEntry, ResourceType};
use crate::infrastructure::traits::AliasStore;

/// Alias management service.
pub struct AliasService {
    store: Arc<dyn AliasStore>,
}

impl AliasService {
    /// Create a new alias service.
    pub fn new(store: Arc<dyn AliasStore>) -> Self {
        Self { store }
    }

    /// Create or redefine an alias.
    ///
    /// Redefining an existing name replaces its id and type silently. Invalid
    /// input is rejected before the store is touched.
    #[instrument(skip(self))]
    pub fn set(
        &self,
        name: &str,
        remote_id: &str,
        resource_type: ResourceType,
    ) -> ApplicationResult<AliasEntry> {
        let entry = AliasEntry::new(name, remote_id, resource_type)?;

        let mut aliases = self.store.load()?;
        match aliases.insert(entry.clone()) {
            Some(previous) => info!(
                "redefined alias {}: {} -> {}",
                entry.name, previous.remote_id, entry.remote_id
            ),
            None => info!("created alias {} -> {}", entry.name, entry.remote_id),
        }
        self.store.save(&aliases)?;
        Ok(entry)
    }

    /// Translate `reference` into a remote id.
    ///
    /// A known alias yields its stored id; anything else is returned
    /// unchanged on the assumption that it already is a remote id. Whether
    /// that id exists is for the notebook service to decide.
    #[instrument(skip(self))]
    pub fn resolve(&self, reference: &str) -> ApplicationResult<String> {
        let aliases = self.store.load()?;
        match aliases.get(reference) {
            Some(entry) => {
                debug!("resolve: alias {} -> {}", reference, entry.remote_id);
                Ok(entry.remote_id.clone())
            }
            None => {
                debug!("resolve: {} is not an alias, passing through", reference);
                Ok(reference.to_string())
            }
        }
    }

    /// Look up a single alias.
    pub fn get(&self, name: &str) -> ApplicationResult<AliasEntry> {
        self.store
            .load()?
            .get(name)
            .cloned()
            .ok_or_else(|| ApplicationError::AliasNotFound(name.to_string()))
    }

    /// True if `name` is a known alias.
    pub fn exists(&self, name: &str) -> ApplicationResult<bool> {
        Ok(self.store.load()?.contains(name))
    }

    /// All aliases in insertion order.
    pub fn list(&self) -> ApplicationResult<Vec<AliasEntry>> {
        Ok(self.store.load()?.into_entries())
    }

    /// Remove an alias unconditionally.
    ///
    /// Callers are responsible for obtaining confirmation first. An unknown
    /// name fails without writing to the store.
    #[instrument(skip(self))]
    pub fn delete(&self, name: &str) -> ApplicationResult<AliasEntry> {
        let mut aliases = self.store.load()?;
        let removed = aliases
            .remove(name)
            .ok_or_else(|| ApplicationError::AliasNotFound(name.to_string()))?;
        self.store.save(&aliases)?;
        info!("deleted alias {} ({})", removed.name, removed.remote_id);
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use crate::infrastructure::MemoryAliasStore;

    const ZERO_ID: &str = "00000000-0000-0000-0000-000000000000";

    fn service() -> (Arc<MemoryAliasStore>, AliasService) {
        let store = Arc::new(MemoryAliasStore::new());
        (store.clone(), AliasService::new(store))
    }

    #[test]
    fn given_empty_name_when_set_then_validation_error_and_no_write() {
        let (store, svc) = service();

        let err = svc.set("", ZERO_ID, ResourceType::Notebook).unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::InvalidAliasName { .. })
        ));
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn given_bad_remote_id_when_set_then_validation_error_and_no_write() {
        let (store, svc) = service();

        let err = svc
            .set("book", "not-a-uuid", ResourceType::Notebook)
            .unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::InvalidRemoteId(_))
        ));
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn given_alias_when_get_then_returns_entry() {
        let (_, svc) = service();
        svc.set("book", ZERO_ID, ResourceType::Source).unwrap();

        let entry = svc.get("book").unwrap();

        assert_eq!(entry.remote_id, ZERO_ID);
        assert_eq!(entry.resource_type, ResourceType::Source);
    }

    #[test]
    fn given_unknown_name_when_get_then_not_found() {
        let (_, svc) = service();
        assert!(matches!(
            svc.get("nope").unwrap_err(),
            ApplicationError::AliasNotFound(_)
        ));
    }

    #[test]
    fn given_unknown_name_when_delete_then_not_found_and_no_write() {
        let (store, svc) = service();

        let err = svc.delete("ghost").unwrap_err();

        assert_eq!(err.to_string(), "alias not found: ghost");
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn given_several_aliases_when_list_then_insertion_order() {
        let (_, svc) = service();
        svc.set("c", ZERO_ID, ResourceType::Notebook).unwrap();
        svc.set("a", ZERO_ID, ResourceType::Notebook).unwrap();
        svc.set("b", ZERO_ID, ResourceType::Notebook).unwrap();

        let names: Vec<_> = svc.list().unwrap().into_iter().map(|e| e.name).collect();

        assert_eq!(names, vec!["c", "a", "b"]);
    }
}

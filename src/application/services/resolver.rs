//! Reference resolution for commands taking notebook, source or artifact refs

use std::sync::Arc;

use crate::application::services::AliasService;
use crate::application::ApplicationResult;

/// Single entry point for turning a user-supplied reference into a remote id.
///
/// Commands call this for every `--notebook`, `--source` or `--artifact`
/// value without checking whether it was an alias.
#[derive(Clone)]
pub struct ReferenceResolver {
    aliases: Arc<AliasService>,
}

impl ReferenceResolver {
    pub fn new(aliases: Arc<AliasService>) -> Self {
        Self { aliases }
    }

    pub fn resolve_reference(&self, value: &str) -> ApplicationResult<String> {
        self.aliases.resolve(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ResourceType;
    use crate::infrastructure::MemoryAliasStore;

    #[test]
    fn given_alias_and_raw_id_when_resolving_then_both_yield_ids() {
        let aliases = Arc::new(AliasService::new(Arc::new(MemoryAliasStore::new())));
        aliases
            .set(
                "book",
                "22222222-2222-2222-2222-222222222222",
                ResourceType::Notebook,
            )
            .unwrap();
        let resolver = ReferenceResolver::new(aliases);

        assert_eq!(
            resolver.resolve_reference("book").unwrap(),
            "22222222-2222-2222-2222-222222222222"
        );
        assert_eq!(
            resolver
                .resolve_reference("33333333-3333-3333-3333-333333333333")
                .unwrap(),
            "33333333-3333-3333-3333-333333333333"
        );
    }
}

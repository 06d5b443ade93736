//! Tests for AliasService over the file-backed store

use std::path::PathBuf;
use std::sync::Arc;

use rstest::rstest;
use tempfile::TempDir;

use nlm::application::services::{AliasService, ReferenceResolver};
use nlm::application::ApplicationError;
use nlm::domain::{DomainError, ResourceType};
use nlm::infrastructure::traits::RealFileSystem;
use nlm::infrastructure::TomlAliasStore;
use nlm::util::testing;

const ZERO_ID: &str = "00000000-0000-0000-0000-000000000000";
const OTHER_ID: &str = "5b1e6f2a-9c1d-4c8e-8f1a-2d3b4c5d6e7f";

fn alias_file(temp: &TempDir) -> PathBuf {
    temp.path().join("aliases.toml")
}

/// Helper to create a service over a fresh store at `path`
fn service_at(path: PathBuf) -> AliasService {
    testing::init_test_setup();
    AliasService::new(Arc::new(TomlAliasStore::new(Arc::new(RealFileSystem), path)))
}

// ============================================================
// set() / resolve() tests
// ============================================================

#[test]
fn given_alias_when_resolve_then_returns_remote_id() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let svc = service_at(alias_file(&temp));

    // Act
    svc.set("testbook", ZERO_ID, ResourceType::Notebook).unwrap();

    // Assert
    assert_eq!(svc.resolve("testbook").unwrap(), ZERO_ID);
}

#[rstest]
#[case("testbook")]
#[case("TESTBOOK")]
#[case("00000000-0000-0000-0000-000000000000")]
#[case("")]
#[case("some thing with spaces")]
fn given_non_alias_when_resolve_then_passes_through(#[case] reference: &str) {
    // Arrange
    let temp = TempDir::new().unwrap();
    let svc = service_at(alias_file(&temp));
    svc.set("other", OTHER_ID, ResourceType::Notebook).unwrap();

    // Act / Assert
    assert_eq!(svc.resolve(reference).unwrap(), reference);
}

#[test]
fn given_same_name_set_twice_when_list_then_single_entry_with_latest_id() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let svc = service_at(alias_file(&temp));

    // Act
    svc.set("book", ZERO_ID, ResourceType::Notebook).unwrap();
    svc.set("book", OTHER_ID, ResourceType::Source).unwrap();

    // Assert
    let entries = svc.list().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].remote_id, OTHER_ID);
    assert_eq!(entries[0].resource_type, ResourceType::Source);
    assert_eq!(svc.resolve("book").unwrap(), OTHER_ID);
}

#[rstest]
#[case("")]
#[case("-leading-dash")]
#[case("has space")]
#[case("slash/inside")]
fn given_malformed_name_when_set_then_validation_error_and_no_file(#[case] name: &str) {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = alias_file(&temp);
    let svc = service_at(path.clone());

    // Act
    let err = svc.set(name, ZERO_ID, ResourceType::Notebook).unwrap_err();

    // Assert
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::InvalidAliasName { .. })
    ));
    assert!(!path.exists(), "validation failure must not write the store");
}

#[test]
fn given_malformed_remote_id_when_set_then_store_unchanged() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = alias_file(&temp);
    let svc = service_at(path.clone());
    svc.set("book", ZERO_ID, ResourceType::Notebook).unwrap();
    let before = std::fs::read(&path).unwrap();

    // Act
    let err = svc
        .set("book", "fake", ResourceType::Notebook)
        .unwrap_err();

    // Assert
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::InvalidRemoteId(_))
    ));
    assert_eq!(std::fs::read(&path).unwrap(), before);
}

// ============================================================
// persistence tests
// ============================================================

#[test]
fn given_alias_set_by_one_service_when_new_service_loads_then_visible() {
    // Arrange
    let temp = TempDir::new().unwrap();
    service_at(alias_file(&temp))
        .set("testbook", ZERO_ID, ResourceType::Notebook)
        .unwrap();

    // Act - simulates the next process invocation
    let fresh = service_at(alias_file(&temp));

    // Assert
    assert_eq!(fresh.get("testbook").unwrap().remote_id, ZERO_ID);
}

#[test]
fn given_base_dir_missing_when_set_then_creates_directories() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("deep").join("state").join("aliases.toml");
    let svc = service_at(path.clone());

    // Act
    svc.set("book", ZERO_ID, ResourceType::Notebook).unwrap();

    // Assert
    assert!(path.exists());
}

#[test]
fn given_corrupt_file_when_resolve_then_storage_error() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = alias_file(&temp);
    std::fs::write(&path, "[[aliases]\nbroken").unwrap();
    let svc = service_at(path);

    // Act
    let err = svc.resolve("anything").unwrap_err();

    // Assert
    assert!(matches!(err, ApplicationError::Storage { .. }));
}

// ============================================================
// delete() tests
// ============================================================

#[test]
fn given_unknown_alias_when_delete_then_not_found_and_file_untouched() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = alias_file(&temp);
    let svc = service_at(path.clone());
    svc.set("keep", ZERO_ID, ResourceType::Notebook).unwrap();
    let before = std::fs::read(&path).unwrap();

    // Act
    let err = svc.delete("ghost").unwrap_err();

    // Assert
    assert!(err.to_string().contains("not found"));
    assert_eq!(std::fs::read(&path).unwrap(), before);
}

#[test]
fn given_deleted_alias_when_reloaded_then_entry_gone_entirely() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = alias_file(&temp);
    let svc = service_at(path.clone());
    svc.set("a", ZERO_ID, ResourceType::Notebook).unwrap();
    svc.set("b", OTHER_ID, ResourceType::Notebook).unwrap();

    // Act
    svc.delete("a").unwrap();

    // Assert
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(!content.contains("name = \"a\""));
    let names: Vec<_> = service_at(path)
        .list()
        .unwrap()
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert_eq!(names, vec!["b"]);
}

// ============================================================
// end-to-end scenario through the resolver
// ============================================================

#[test]
fn given_alias_lifecycle_when_resolving_then_id_then_passthrough() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let svc = Arc::new(service_at(alias_file(&temp)));
    let resolver = ReferenceResolver::new(svc.clone());

    // Act / Assert
    svc.set("testbook", ZERO_ID, ResourceType::Notebook).unwrap();
    assert_eq!(resolver.resolve_reference("testbook").unwrap(), ZERO_ID);

    svc.delete("testbook").unwrap();
    assert_eq!(resolver.resolve_reference("testbook").unwrap(), "testbook");
}

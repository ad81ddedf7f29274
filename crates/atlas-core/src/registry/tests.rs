//! Tests for the registry module.

use tempfile::TempDir;

use super::*;
use crate::{
    error::RegistryError,
    models::PlanetFilter,
    params::{CreatePlanet, Id, Name},
};

/// Helper function to create a test registry
async fn create_test_registry() -> (TempDir, Registry) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let registry = RegistryBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create registry");
    (temp_dir, registry)
}

fn tatooine_params() -> CreatePlanet {
    CreatePlanet {
        name: "Tatooine".to_string(),
        climate: "arid".to_string(),
        terrain: "desert".to_string(),
    }
}

#[tokio::test]
async fn test_create_planet_assigns_id() {
    let (_temp_dir, registry) = create_test_registry().await;

    let planet = registry
        .create_planet(&tatooine_params())
        .await
        .expect("Failed to create planet");

    assert!(planet.id > 0);
    assert_eq!(planet.name, "Tatooine");
    assert_eq!(planet.climate, "arid");
    assert_eq!(planet.terrain, "desert");
}

#[tokio::test]
async fn test_get_planet_matches_create() {
    let (_temp_dir, registry) = create_test_registry().await;

    let created = registry
        .create_planet(&tatooine_params())
        .await
        .expect("Failed to create planet");

    let fetched = registry
        .get_planet(&Id { id: created.id })
        .await
        .expect("Failed to get planet")
        .expect("Planet should exist");

    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_get_planet_by_name_consistent_with_get_by_id() {
    let (_temp_dir, registry) = create_test_registry().await;

    let created = registry
        .create_planet(&tatooine_params())
        .await
        .expect("Failed to create planet");

    let by_id = registry
        .get_planet(&Id { id: created.id })
        .await
        .expect("Failed to get planet")
        .expect("Planet should exist");
    let by_name = registry
        .get_planet_by_name(&Name {
            name: "Tatooine".to_string(),
        })
        .await
        .expect("Failed to get planet by name")
        .expect("Planet should exist");

    assert_eq!(by_id, by_name);
}

#[tokio::test]
async fn test_duplicate_name_rejected() {
    let (_temp_dir, registry) = create_test_registry().await;

    registry
        .create_planet(&tatooine_params())
        .await
        .expect("Failed to create planet");

    let duplicate = CreatePlanet {
        name: "Tatooine".to_string(),
        climate: "temperate".to_string(),
        terrain: "grasslands".to_string(),
    };
    let result = registry.create_planet(&duplicate).await;

    match result.unwrap_err() {
        RegistryError::DuplicateName { name } => assert_eq!(name, "Tatooine"),
        other => panic!("Expected DuplicateName error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_list_planets_with_filter() {
    let (_temp_dir, registry) = create_test_registry().await;

    registry
        .create_planet(&tatooine_params())
        .await
        .expect("Failed to create planet");
    registry
        .create_planet(&CreatePlanet {
            name: "Alderaan".to_string(),
            climate: "temperate".to_string(),
            terrain: "grasslands".to_string(),
        })
        .await
        .expect("Failed to create planet");

    let all = registry
        .list_planets(None)
        .await
        .expect("Failed to list planets");
    assert_eq!(all.len(), 2);

    let filtered = registry
        .list_planets(Some(PlanetFilter {
            climate: Some("arid".to_string()),
            terrain: None,
        }))
        .await
        .expect("Failed to list planets");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "Tatooine");
}

#[tokio::test]
async fn test_delete_planet() {
    let (_temp_dir, registry) = create_test_registry().await;

    let planet = registry
        .create_planet(&tatooine_params())
        .await
        .expect("Failed to create planet");

    registry
        .delete_planet(&Id { id: planet.id })
        .await
        .expect("Failed to delete planet");

    let gone = registry
        .get_planet(&Id { id: planet.id })
        .await
        .expect("Failed to get planet");
    assert!(gone.is_none());
}

#[tokio::test]
async fn test_delete_nonexistent_planet_fails() {
    let (_temp_dir, registry) = create_test_registry().await;

    let result = registry.delete_planet(&Id { id: 999 }).await;

    match result.unwrap_err() {
        RegistryError::PlanetNotFound { id } => assert_eq!(id, 999),
        other => panic!("Expected PlanetNotFound error, got {other:?}"),
    }
}

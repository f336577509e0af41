//! Integration tests for the Building repository.

mod common;

use common::{create_test_building, create_test_user, setup_db};
use condos_core::building::NewBuilding;
use condos_db::{BuildingRepository, entities::buildings};
use proptest::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};

#[tokio::test]
async fn test_building_create_applies_creator_and_dimensions() {
    let db = setup_db().await;
    let user = create_test_user(&db, "Ana").await;
    let repo = BuildingRepository::new(db.clone());

    let building = repo
        .create(
            NewBuilding {
                name: "Edifício Aurora".to_string(),
                floors: 6,
                fractions: 24,
            },
            &user.id,
        )
        .await
        .expect("Failed to create building");

    assert_eq!(building.name, "Edifício Aurora");
    assert_eq!(building.created_by_id, user.id);
    assert_eq!(building.floors, 6);
    assert_eq!(building.fractions, 24);
    assert!(building.updated_at.is_none());
}

#[tokio::test]
async fn test_building_defaults() {
    let db = setup_db().await;
    let user = create_test_user(&db, "Ana").await;
    let repo = BuildingRepository::new(db.clone());

    let building = repo
        .create(NewBuilding::default(), &user.id)
        .await
        .expect("Failed to create building");

    assert_eq!(building.name, "Novo condomínio");
    assert_eq!(building.floors, 1);
    assert_eq!(building.fractions, 1);
}

#[tokio::test]
async fn test_building_list_ordered_by_name() {
    let db = setup_db().await;
    let user = create_test_user(&db, "Ana").await;

    for name in ["B", "A", "C"] {
        create_test_building(&db, &user.id, name).await;
    }

    let names: Vec<String> = BuildingRepository::new(db.clone())
        .list_ordered_by_name()
        .await
        .expect("Failed to list buildings")
        .into_iter()
        .map(|b| b.name)
        .collect();

    assert_eq!(names, vec!["A", "B", "C"]);
}

#[tokio::test]
async fn test_building_list_ties_broken_by_id() {
    let db = setup_db().await;
    let user = create_test_user(&db, "Ana").await;

    let first = create_test_building(&db, &user.id, "Same").await;
    let second = create_test_building(&db, &user.id, "Same").await;

    let ids: Vec<i32> = BuildingRepository::new(db.clone())
        .list_ordered_by_name()
        .await
        .expect("Failed to list buildings")
        .into_iter()
        .map(|b| b.id)
        .collect();

    assert_eq!(ids, vec![first.id, second.id]);
}

#[tokio::test]
async fn test_building_list_empty() {
    let db = setup_db().await;

    let buildings = BuildingRepository::new(db.clone())
        .list_ordered_by_name()
        .await
        .expect("Failed to list buildings");

    assert!(buildings.is_empty());
}

#[tokio::test]
async fn test_building_find_by_id() {
    let db = setup_db().await;
    let user = create_test_user(&db, "Ana").await;
    let created = create_test_building(&db, &user.id, "Torre").await;
    let repo = BuildingRepository::new(db.clone());

    let found = repo
        .find_by_id(created.id)
        .await
        .expect("Query failed")
        .expect("Building should exist");
    assert_eq!(found.name, "Torre");
    assert_eq!(found.created_by_id, user.id);

    let missing = repo.find_by_id(created.id + 100).await.expect("Query failed");
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_building_requires_existing_creator() {
    let db = setup_db().await;
    let repo = BuildingRepository::new(db.clone());

    let result = repo.create(NewBuilding::named("Orphan"), "no-such-user").await;
    assert!(result.is_err());

    let count = buildings::Entity::find()
        .count(&db)
        .await
        .expect("Failed to count buildings");
    assert_eq!(count, 0);
}

/// Inserts the names in the given order and returns the listed names.
async fn insert_and_list(names: &[String]) -> Vec<String> {
    let db = setup_db().await;
    let user = create_test_user(&db, "Ana").await;

    for name in names {
        create_test_building(&db, &user.id, name).await;
    }

    BuildingRepository::new(db.clone())
        .list_ordered_by_name()
        .await
        .expect("Failed to list buildings")
        .into_iter()
        .map(|b| b.name)
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Listing is sorted by name whatever the insertion order.
    #[test]
    fn test_building_list_sorted_for_any_insertion_order(
        names in prop::collection::vec("[a-z]{1,8}", 0..16),
    ) {
        let runtime = tokio::runtime::Runtime::new().expect("runtime");
        let listed = runtime.block_on(insert_and_list(&names));

        let mut expected = names.clone();
        expected.sort();
        prop_assert_eq!(listed, expected);
    }
}

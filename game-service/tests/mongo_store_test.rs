//! Store tests against a live MongoDB (`TEST_MONGODB_URI`, default
//! localhost). Run with `cargo test -- --ignored`.

use game_service::dtos::{LevelCreate, StatusCheckCreate};
use game_service::services::{GameStore, MongoDb};
use mongodb::bson::{doc, Bson, Document};
use serde_json::json;

async fn connect() -> (MongoDb, String) {
    let uri = std::env::var("TEST_MONGODB_URI")
        .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    let db_name = format!("game_store_test_{}", uuid::Uuid::new_v4().simple());

    let db = MongoDb::connect(&uri, &db_name)
        .await
        .expect("Failed to connect to MongoDB");
    db.initialize_indexes()
        .await
        .expect("Failed to create indexes");
    (db, db_name)
}

async fn cleanup(db: &MongoDb, db_name: &str) {
    let _ = db.client().database(db_name).drop(None).await;
}

#[tokio::test]
#[ignore] // Requires MongoDB
async fn timestamps_are_stored_as_text_and_read_back() {
    let (db, db_name) = connect().await;

    let level: LevelCreate = serde_json::from_value(json!({ "name": "Stored" })).unwrap();
    let level = level.into_level();
    db.insert_level(&level).await.expect("Failed to insert level");

    let raw: Document = db
        .database()
        .collection::<Document>("levels")
        .find_one(doc! { "id": level.id.as_str() }, None)
        .await
        .expect("Query failed")
        .expect("Level missing");
    assert!(matches!(raw.get("created_at"), Some(Bson::String(_))));
    assert!(raw.contains_key("_id"));

    let fetched = db
        .find_level(&level.id)
        .await
        .expect("Query failed")
        .expect("Level missing");
    assert_eq!(fetched, level);

    cleanup(&db, &db_name).await;
}

#[tokio::test]
#[ignore] // Requires MongoDB
async fn delete_reports_whether_a_level_was_removed() {
    let (db, db_name) = connect().await;

    let level: LevelCreate = serde_json::from_value(json!({ "name": "Gone" })).unwrap();
    let level = level.into_level();
    db.insert_level(&level).await.expect("Failed to insert level");

    assert!(db.delete_level(&level.id).await.expect("Delete failed"));
    assert!(!db.delete_level(&level.id).await.expect("Delete failed"));
    assert!(db.find_level(&level.id).await.expect("Query failed").is_none());

    cleanup(&db, &db_name).await;
}

#[tokio::test]
#[ignore] // Requires MongoDB
async fn list_applies_the_limit() {
    let (db, db_name) = connect().await;

    for i in 0..5 {
        let check = StatusCheckCreate {
            client_name: format!("client-{}", i),
        }
        .into_status_check();
        db.insert_status_check(&check).await.expect("Insert failed");
    }

    let checks = db.list_status_checks(3).await.expect("List failed");
    assert_eq!(checks.len(), 3);

    cleanup(&db, &db_name).await;
}

#[tokio::test]
#[ignore] // Requires MongoDB
async fn health_check_pings_server() {
    let (db, db_name) = connect().await;

    db.health_check().await.expect("Ping failed");

    cleanup(&db, &db_name).await;
}

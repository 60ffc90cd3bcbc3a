use crate::models::{Level, MatchResult, StatusCheck};
use crate::services::store::GameStore;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::{FindOneOptions, FindOptions, IndexOptions},
    Client as MongoClient, Collection, Database, IndexModel,
};
use serde::de::DeserializeOwned;
use service_core::error::AppError;

/// Mongo's own row id never leaves the store.
fn without_object_id() -> Document {
    doc! { "_id": 0 }
}

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(database = %database, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    /// Unique index on the application `id` of every collection.
    pub async fn initialize_indexes(&self) -> Result<(), AppError> {
        tracing::info!("Creating MongoDB indexes for game-service");

        for collection in ["status_checks", "levels", "matches"] {
            let id_index = IndexModel::builder()
                .keys(doc! { "id": 1 })
                .options(
                    IndexOptions::builder()
                        .name("id_unique".to_string())
                        .unique(true)
                        .build(),
                )
                .build();

            self.db
                .collection::<Document>(collection)
                .create_index(id_index, None)
                .await
                .map_err(|e| {
                    tracing::error!(
                        "Failed to create id index on {} collection: {}",
                        collection,
                        e
                    );
                    AppError::from(e)
                })?;
            tracing::info!("Created index on {}.id", collection);
        }

        Ok(())
    }

    pub fn status_checks(&self) -> Collection<StatusCheck> {
        self.db.collection("status_checks")
    }

    pub fn levels(&self) -> Collection<Level> {
        self.db.collection("levels")
    }

    pub fn matches(&self) -> Collection<MatchResult> {
        self.db.collection("matches")
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    async fn find_all<T>(collection: Collection<T>, limit: i64) -> Result<Vec<T>, AppError>
    where
        T: DeserializeOwned + Unpin + Send + Sync,
    {
        let find_options = FindOptions::builder()
            .projection(without_object_id())
            .limit(limit)
            .build();

        let cursor = collection
            .find(doc! {}, find_options)
            .await
            .map_err(|e| {
                tracing::error!(collection = %collection.name(), "Failed to query collection: {}", e);
                AppError::from(e)
            })?;

        cursor.try_collect().await.map_err(|e| {
            tracing::error!(collection = %collection.name(), "Failed to read documents: {}", e);
            AppError::from(e)
        })
    }
}

#[async_trait]
impl GameStore for MongoDb {
    async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    async fn insert_status_check(&self, check: &StatusCheck) -> Result<(), AppError> {
        self.status_checks().insert_one(check, None).await?;
        Ok(())
    }

    async fn list_status_checks(&self, limit: i64) -> Result<Vec<StatusCheck>, AppError> {
        Self::find_all(self.status_checks(), limit).await
    }

    async fn insert_level(&self, level: &Level) -> Result<(), AppError> {
        self.levels().insert_one(level, None).await?;
        Ok(())
    }

    async fn list_levels(&self, limit: i64) -> Result<Vec<Level>, AppError> {
        Self::find_all(self.levels(), limit).await
    }

    async fn find_level(&self, id: &str) -> Result<Option<Level>, AppError> {
        let options = FindOneOptions::builder()
            .projection(without_object_id())
            .build();

        let level = self
            .levels()
            .find_one(doc! { "id": id }, options)
            .await?;
        Ok(level)
    }

    async fn delete_level(&self, id: &str) -> Result<bool, AppError> {
        let result = self.levels().delete_one(doc! { "id": id }, None).await?;
        Ok(result.deleted_count > 0)
    }

    async fn insert_match_result(&self, result: &MatchResult) -> Result<(), AppError> {
        self.matches().insert_one(result, None).await?;
        Ok(())
    }

    async fn list_match_results(&self, limit: i64) -> Result<Vec<MatchResult>, AppError> {
        Self::find_all(self.matches(), limit).await
    }

    async fn shutdown(&self) {
        tracing::info!("Closing MongoDB connection");
        self.client.clone().shutdown().await;
    }
}

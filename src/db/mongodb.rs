use anyhow::{Context, Result};
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, Database, IndexModel};

use crate::db::store::{QR_COLLECTION, QrStore, StoreError};
use crate::models::qr_code::QrRecord;

/// Connect to MongoDB and return a handle to the configured database.
pub async fn get_database(uri: &str, database: &str) -> Result<Database> {
    let client = Client::with_uri_str(uri)
        .await
        .context("Failed to create MongoDB client")?;
    let db = client.database(database);

    // Fail fast if the server is unreachable
    db.run_command(doc! { "ping": 1 })
        .await
        .context("Failed to reach MongoDB")?;

    Ok(db)
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        StoreError::Database(err.to_string())
    }
}

pub struct MongoQrStore {
    db: Database,
    qr_codes: Collection<QrRecord>,
}

impl MongoQrStore {
    pub fn new(db: Database) -> Self {
        let qr_codes = db.collection::<QrRecord>(QR_COLLECTION);
        Self { db, qr_codes }
    }

    /// Records are looked up by `id`, so keep it unique.
    pub async fn ensure_indexes(&self) -> Result<()> {
        let index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.qr_codes
            .create_index(index)
            .await
            .context("Failed to create index on qr_codes.id")?;

        Ok(())
    }
}

#[async_trait]
impl QrStore for MongoQrStore {
    async fn insert(&self, record: &QrRecord) -> Result<(), StoreError> {
        self.qr_codes.insert_one(record).await?;
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<QrRecord>, StoreError> {
        Ok(self.qr_codes.find_one(doc! { "id": id }).await?)
    }

    async fn update_target(
        &self,
        id: &str,
        target_url: &str,
        updated_at: i64,
    ) -> Result<bool, StoreError> {
        let result = self
            .qr_codes
            .update_one(
                doc! { "id": id, "type": "url" },
                doc! { "$set": { "targetUrl": target_url, "updatedAt": updated_at } },
            )
            .await?;

        Ok(result.matched_count > 0)
    }

    async fn list_all(&self) -> Result<Vec<QrRecord>, StoreError> {
        let records = self
            .qr_codes
            .find(doc! {})
            .await?
            .try_collect::<Vec<QrRecord>>()
            .await?;

        Ok(records)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

use async_trait::async_trait;
use thiserror::Error;

use crate::models::qr_code::QrRecord;

/// Name of the collection every record lives in.
pub const QR_COLLECTION: &str = "qr_codes";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),
    #[error("Storage error: {0}")]
    Backend(String),
}

/// Document storage for QR records, keyed by record id.
#[async_trait]
pub trait QrStore: Send + Sync {
    /// Write a new record.
    async fn insert(&self, record: &QrRecord) -> Result<(), StoreError>;

    async fn get(&self, id: &str) -> Result<Option<QrRecord>, StoreError>;

    /// Set the target of the url-type record `id`.
    /// Returns `false` when no such record exists.
    async fn update_target(
        &self,
        id: &str,
        target_url: &str,
        updated_at: i64,
    ) -> Result<bool, StoreError>;

    /// Every record, in the backend's native order.
    async fn list_all(&self) -> Result<Vec<QrRecord>, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::db::store::{QrStore, StoreError};
use crate::models::qr_code::{QrRecord, QrType};

/// Non-durable store for local runs and tests. Lists in insertion order.
#[derive(Default)]
pub struct MemoryQrStore {
    records: RwLock<Vec<QrRecord>>,
}

impl MemoryQrStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QrStore for MemoryQrStore {
    async fn insert(&self, record: &QrRecord) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        // Same contract as the unique index on the Mongo side
        if records.iter().any(|r| r.id == record.id) {
            return Err(StoreError::Backend(format!(
                "duplicate record id {}",
                record.id
            )));
        }
        records.push(record.clone());
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<QrRecord>, StoreError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    async fn update_target(
        &self,
        id: &str,
        target_url: &str,
        updated_at: i64,
    ) -> Result<bool, StoreError> {
        let mut records = self.records.write().await;
        match records
            .iter_mut()
            .find(|r| r.id == id && r.kind == QrType::Url)
        {
            Some(record) => {
                record.target_url = Some(target_url.to_string());
                record.updated_at = updated_at;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list_all(&self) -> Result<Vec<QrRecord>, StoreError> {
        Ok(self.records.read().await.clone())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::qr_code::Contact;

    fn contact_record(id: &str) -> QrRecord {
        let contact = Contact {
            name: "Jane Doe".to_string(),
            phone: "+1555".to_string(),
            email: None,
            homepage: None,
            address: None,
        };
        QrRecord::new_contact(id.to_string(), "Jane Doe".to_string(), contact)
    }

    #[actix_web::test]
    async fn lists_records_in_insertion_order() {
        let store = MemoryQrStore::new();
        for id in ["b", "a", "c"] {
            let record = QrRecord::new_url(id.to_string(), None, "https://example.com".into());
            store.insert(&record).await.unwrap();
        }

        let ids: Vec<String> = store
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }

    #[actix_web::test]
    async fn rejects_duplicate_ids() {
        let store = MemoryQrStore::new();
        let record = QrRecord::new_url("a".into(), None, "https://example.com".into());
        store.insert(&record).await.unwrap();

        assert!(store.insert(&record).await.is_err());
        assert_eq!(store.list_all().await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn update_target_skips_missing_and_contact_records() {
        let store = MemoryQrStore::new();
        store.insert(&contact_record("c1")).await.unwrap();

        assert!(!store.update_target("nope", "https://a.test", 5).await.unwrap());
        assert!(!store.update_target("c1", "https://a.test", 5).await.unwrap());

        let stored = store.get("c1").await.unwrap().unwrap();
        assert_eq!(stored.target_url, None);
        assert!(store.get("nope").await.unwrap().is_none());
    }
}

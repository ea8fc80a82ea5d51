use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::resume::ResumeRecord;
use crate::storage::{RecordPatch, ResumeStore};

/// Process-lifetime store. Ids auto-increment from 1 and are never reused.
#[derive(Debug)]
pub struct MemoryResumeStore {
    records: RwLock<BTreeMap<i64, ResumeRecord>>,
    next_id: AtomicI64,
}

impl MemoryResumeStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryResumeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResumeStore for MemoryResumeStore {
    async fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    async fn get(&self, id: i64) -> Option<ResumeRecord> {
        self.records.read().await.get(&id).cloned()
    }

    async fn put(&self, record: ResumeRecord) {
        self.records.write().await.insert(record.id, record);
    }

    async fn update(&self, id: i64, patch: RecordPatch) -> Option<ResumeRecord> {
        let mut records = self.records.write().await;
        let record = records.get_mut(&id)?;
        patch(record);
        Some(record.clone())
    }

    async fn delete(&self, id: i64) -> bool {
        self.records.write().await.remove(&id).is_some()
    }

    async fn list(&self) -> Vec<ResumeRecord> {
        self.records.read().await.values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::fixtures::document;
    use chrono::Utc;

    fn record(id: i64) -> ResumeRecord {
        let now = Utc::now();
        ResumeRecord {
            id,
            user_id: None,
            name: format!("Resume {id}"),
            template: "professional".to_string(),
            color: "indigo".to_string(),
            data: document(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_ids_increment_from_one() {
        let store = MemoryResumeStore::new();
        assert_eq!(store.next_id().await, 1);
        assert_eq!(store.next_id().await, 2);
        assert_eq!(store.next_id().await, 3);
    }

    #[tokio::test]
    async fn test_put_get_delete() {
        let store = MemoryResumeStore::new();
        store.put(record(7)).await;
        assert_eq!(store.get(7).await.unwrap().name, "Resume 7");
        assert!(store.delete(7).await);
        assert!(store.get(7).await.is_none());
        assert!(!store.delete(7).await);
    }

    #[tokio::test]
    async fn test_update_edits_in_place() {
        let store = MemoryResumeStore::new();
        store.put(record(4)).await;
        let updated = store
            .update(4, Box::new(|r: &mut ResumeRecord| r.name = "Renamed".to_string()))
            .await
            .unwrap();
        assert_eq!(updated.name, "Renamed");
        assert_eq!(store.get(4).await.unwrap().name, "Renamed");
    }

    #[tokio::test]
    async fn test_update_of_deleted_record_does_not_recreate_it() {
        let store = MemoryResumeStore::new();
        store.put(record(5)).await;
        assert!(store.delete(5).await);

        let result = store
            .update(5, Box::new(|r: &mut ResumeRecord| r.name = "Ghost".to_string()))
            .await;
        assert!(result.is_none());
        assert!(store.get(5).await.is_none());
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let store = MemoryResumeStore::new();
        store.put(record(3)).await;
        store.put(record(1)).await;
        store.put(record(2)).await;
        let ids: Vec<i64> = store.list().await.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}

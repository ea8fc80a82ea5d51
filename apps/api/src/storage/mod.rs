//! Key-value storage for resume records.
//!
//! The service layer only talks to `ResumeStore`, so the in-memory map can be
//! swapped for a database-backed store without touching handlers.

pub mod memory;

use async_trait::async_trait;

use crate::models::resume::ResumeRecord;

pub use memory::MemoryResumeStore;

/// In-place edit applied by `ResumeStore::update`.
pub type RecordPatch = Box<dyn FnOnce(&mut ResumeRecord) + Send>;

#[async_trait]
pub trait ResumeStore: Send + Sync {
    /// Reserves the next record id.
    async fn next_id(&self) -> i64;

    async fn get(&self, id: i64) -> Option<ResumeRecord>;

    /// Inserts or replaces the record under `record.id`.
    async fn put(&self, record: ResumeRecord);

    /// Applies `patch` to the stored record atomically and returns the result.
    /// `None` when there is no record under `id`; nothing is written then.
    async fn update(&self, id: i64, patch: RecordPatch) -> Option<ResumeRecord>;

    /// Returns whether a record was removed.
    async fn delete(&self, id: i64) -> bool;

    /// All records in id order.
    async fn list(&self) -> Vec<ResumeRecord>;
}

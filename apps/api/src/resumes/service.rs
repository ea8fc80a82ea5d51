//! Persistence service: create/get/update/delete resume records over a `ResumeStore`.
//!
//! No concurrency control: an update is read-merge-write, so two concurrent
//! updates to the same record race and the last write wins.

use chrono::Utc;
use tracing::info;

use crate::models::resume::{
    CreateResumeRequest, ResumeRecord, UpdateResumeRequest, DEFAULT_COLOR, DEFAULT_TEMPLATE,
};
use crate::storage::ResumeStore;

fn or_default(value: Option<String>, default: &str) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

pub async fn create_resume(store: &dyn ResumeStore, req: CreateResumeRequest) -> ResumeRecord {
    let id = store.next_id().await;
    let now = Utc::now();

    let record = ResumeRecord {
        id,
        user_id: req.user_id,
        name: req.name,
        template: or_default(req.template, DEFAULT_TEMPLATE),
        color: or_default(req.color, DEFAULT_COLOR),
        data: req.data,
        created_at: now,
        updated_at: now,
    };

    store.put(record.clone()).await;
    info!("Created resume {} ({})", record.id, record.name);
    record
}

pub async fn get_resume(store: &dyn ResumeStore, id: i64) -> Option<ResumeRecord> {
    store.get(id).await
}

/// Resumes owned by `user_id`, or every resume when no user is given.
pub async fn list_resumes(store: &dyn ResumeStore, user_id: Option<i64>) -> Vec<ResumeRecord> {
    store
        .list()
        .await
        .into_iter()
        .filter(|r| user_id.is_none() || r.user_id == user_id)
        .collect()
}

/// Merges the provided fields into the record and refreshes `updated_at`.
/// Returns `None` when the id does not exist. The merge runs inside the
/// store, so a record deleted concurrently stays deleted.
pub async fn update_resume(
    store: &dyn ResumeStore,
    id: i64,
    patch: UpdateResumeRequest,
) -> Option<ResumeRecord> {
    let record = store
        .update(id, Box::new(move |record: &mut ResumeRecord| merge(record, patch)))
        .await?;
    info!("Updated resume {id}");
    Some(record)
}

fn merge(record: &mut ResumeRecord, patch: UpdateResumeRequest) {
    if let Some(name) = patch.name {
        record.name = name;
    }
    if let Some(data) = patch.data {
        record.data = data;
    }
    if let Some(user_id) = patch.user_id {
        record.user_id = user_id;
    }
    if let Some(template) = patch.template {
        record.template = or_default(template, DEFAULT_TEMPLATE);
    }
    if let Some(color) = patch.color {
        record.color = or_default(color, DEFAULT_COLOR);
    }
    record.updated_at = Utc::now();
}

pub async fn delete_resume(store: &dyn ResumeStore, id: i64) -> bool {
    let existed = store.delete(id).await;
    if existed {
        info!("Deleted resume {id}");
    }
    existed
}

use crate::shared::api_client::{get_json, put_json, ApiError};
use contracts::domain::common::{EntityId, EntityRecord, EntityStatus};
use contracts::shared::api::{ApiEnvelope, StatusChange};
use contracts::shared::metadata::EntityMetadataInfo;
use futures::future::join_all;

/// Per-id results of a concurrent fan-out
pub type BulkResults = Vec<(EntityId, Result<(), ApiError>)>;

/// Whole collection, as stored
pub async fn fetch_all(meta: &EntityMetadataInfo) -> Result<Vec<EntityRecord>, ApiError> {
    let envelope: ApiEnvelope<Vec<EntityRecord>> = get_json(&meta.list_path()).await?;
    Ok(envelope.data)
}

/// One `{id, status}` PUT per id, all in flight at once
pub async fn change_status(
    meta: &EntityMetadataInfo,
    ids: &[EntityId],
    status: EntityStatus,
) -> BulkResults {
    send_status(meta.update_path(), ids, status).await
}

/// Soft delete: status `terminated` through the delete endpoint
pub async fn soft_delete(meta: &EntityMetadataInfo, ids: &[EntityId]) -> BulkResults {
    send_status(meta.delete_path(), ids, EntityStatus::Terminated).await
}

async fn send_status(path: String, ids: &[EntityId], status: EntityStatus) -> BulkResults {
    let requests = ids.iter().map(|&id| {
        let path = path.clone();
        async move {
            let body = StatusChange { id, status };
            let result = put_json::<_, serde_json::Value>(&path, &body)
                .await
                .map(|_| ());
            (id, result)
        }
    });
    let results = join_all(requests).await;
    let failed = results.iter().filter(|(_, r)| r.is_err()).count();
    if failed > 0 {
        log::warn!("{}: {} of {} requests failed", path, failed, results.len());
    } else {
        log::debug!("{}: {} records set to {}", path, results.len(), status);
    }
    results
}

/// First rejection caused by an expired session, if any
pub fn unauthorized(results: &BulkResults) -> Option<&ApiError> {
    results
        .iter()
        .filter_map(|(_, r)| r.as_ref().err())
        .find(|e| e.is_unauthorized())
}

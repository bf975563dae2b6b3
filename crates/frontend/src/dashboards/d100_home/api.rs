use crate::shared::api_client::{get_json, ApiError};
use contracts::dashboards::d100_stats::{DashboardStats, STATS_PATH};
use contracts::shared::api::ApiEnvelope;

pub async fn get_stats() -> Result<DashboardStats, ApiError> {
    let envelope: ApiEnvelope<DashboardStats> = get_json(STATS_PATH).await?;
    Ok(envelope.data)
}

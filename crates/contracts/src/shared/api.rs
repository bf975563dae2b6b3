//! Wire envelopes shared by every admin endpoint

use crate::domain::common::{EntityId, EntityStatus};
use serde::{Deserialize, Serialize};

/// Successful responses wrap their payload in `{ "data": ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
}

/// Error body: `{ "error": { "message": ... } }` or `{ "message": ... }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<ApiErrorDetail>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// Human readable reason, if the server sent one
    pub fn reason(&self) -> Option<String> {
        self.error
            .as_ref()
            .and_then(|e| e.message.clone())
            .or_else(|| self.message.clone())
            .filter(|m| !m.trim().is_empty())
    }

    /// Parse a raw response body, tolerating non-JSON payloads
    pub fn reason_from_body(body: &str) -> Option<String> {
        serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.reason())
    }
}

/// Body of status updates and soft deletes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChange {
    pub id: EntityId,
    pub status: EntityStatus,
}

/// Body of `POST /admin/portfolio/updateOrder`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub order: Vec<EntityId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_reason_nested() {
        let body = r#"{"error":{"message":"Invalid email or password"}}"#;
        assert_eq!(
            ApiErrorBody::reason_from_body(body),
            Some("Invalid email or password".to_string())
        );
    }

    #[test]
    fn test_error_reason_flat_and_garbage() {
        assert_eq!(
            ApiErrorBody::reason_from_body(r#"{"message":"Nope"}"#),
            Some("Nope".to_string())
        );
        assert_eq!(ApiErrorBody::reason_from_body("<html>502</html>"), None);
    }

    #[test]
    fn test_status_change_body() {
        let body = StatusChange {
            id: 7,
            status: EntityStatus::Terminated,
        };
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({ "id": 7, "status": "terminated" })
        );
    }

    #[test]
    fn test_order_update_body() {
        let body = OrderUpdate { order: vec![3, 1, 2] };
        assert_eq!(serde_json::to_value(body).unwrap(), json!({ "order": [3, 1, 2] }));
    }
}

use super::EntityStatus;
use crate::shared::metadata::{ColumnMetadata, FieldKind};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Server-assigned identifier of every entity
pub type EntityId = i64;

/// A single row as returned by any `get*` endpoint.
///
/// Only `id`, `status` and `pinOrder` are shared by all entities; everything
/// else is kept as raw JSON and interpreted through the entity metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityRecord {
    pub id: EntityId,
    #[serde(default, deserialize_with = "super::entity_status::deserialize_lenient")]
    pub status: EntityStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pin_order: Option<i64>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl EntityRecord {
    pub fn new(id: EntityId, status: EntityStatus) -> Self {
        Self {
            id,
            status,
            pin_order: None,
            fields: Map::new(),
        }
    }

    /// Builder used by tests and fixtures
    pub fn with_field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    pub fn is_terminated(&self) -> bool {
        self.status == EntityStatus::Terminated
    }

    /// Plain text of any field, including the shared ones
    pub fn text(&self, name: &str) -> String {
        match name {
            "id" => self.id.to_string(),
            "status" => self.status.as_str().to_string(),
            "pinOrder" => self.pin_order.map(|o| o.to_string()).unwrap_or_default(),
            _ => self.fields.get(name).map(value_text).unwrap_or_default(),
        }
    }

    /// Text for a table or CSV cell, shaped by the column kind
    pub fn cell_text(&self, column: &ColumnMetadata) -> String {
        match column.kind {
            FieldKind::Status => self.status.label().to_string(),
            FieldKind::ImageList { .. } => self
                .list_values(column.field)
                .into_iter()
                .next()
                .unwrap_or_default(),
            FieldKind::LinkList => self.list_values(column.field).join(", "),
            FieldKind::NumberedText { count } => self.numbered_values(column.field, count).join(" | "),
            FieldKind::Date => normalize_date(&self.text(column.field)),
            _ => self.text(column.field),
        }
    }

    /// Non-empty values of `<prefix>1` .. `<prefix>count`
    pub fn numbered_values(&self, prefix: &str, count: u8) -> Vec<String> {
        (1..=count)
            .map(|i| self.text(&format!("{}{}", prefix, i)))
            .filter(|v| !v.trim().is_empty())
            .collect()
    }

    /// Values of a list field. Accepts a JSON array, a JSON-encoded array
    /// string or a comma separated string.
    pub fn list_values(&self, name: &str) -> Vec<String> {
        match self.fields.get(name) {
            Some(Value::Array(items)) => items
                .iter()
                .map(value_text)
                .filter(|v| !v.trim().is_empty())
                .collect(),
            Some(Value::String(raw)) => split_list(raw),
            Some(Value::Null) | None => Vec::new(),
            Some(other) => vec![value_text(other)],
        }
    }

    /// Image paths stored under `name`, for single and multi image fields
    pub fn image_paths(&self, name: &str, kind: FieldKind) -> Vec<String> {
        match kind {
            FieldKind::ImageList { .. } => self.list_values(name),
            _ => {
                let path = self.text(name);
                if path.trim().is_empty() {
                    Vec::new()
                } else {
                    vec![path]
                }
            }
        }
    }

    /// Lowercased text the search box is matched against
    pub fn search_text(&self, fields: &[&str]) -> String {
        fields
            .iter()
            .map(|f| self.text(f))
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(value_text).collect::<Vec<_>>().join(", "),
        other => other.to_string(),
    }
}

fn split_list(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.starts_with('[') {
        if let Ok(items) = serde_json::from_str::<Vec<String>>(trimmed) {
            return items.into_iter().filter(|v| !v.trim().is_empty()).collect();
        }
    }
    trimmed
        .split(',')
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

/// Reduce a server timestamp to the `YYYY-MM-DD` form date inputs expect.
/// Values that are neither RFC 3339 nor a plain date are returned unchanged.
pub fn normalize_date(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(ts) = chrono::DateTime::parse_from_rfc3339(raw) {
        return ts.format("%Y-%m-%d").to_string();
    }
    if let Ok(date) = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%Y-%m-%d").to_string();
    }
    match raw.get(..10).map(|d| chrono::NaiveDate::parse_from_str(d, "%Y-%m-%d")) {
        Some(Ok(date)) => date.format("%Y-%m-%d").to_string(),
        _ => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_flattened() {
        let record: EntityRecord = serde_json::from_value(json!({
            "id": 5,
            "status": "inactive",
            "title": "Spring sale",
            "image": "/uploads/a.png"
        }))
        .unwrap();
        assert_eq!(record.id, 5);
        assert_eq!(record.status, EntityStatus::Inactive);
        assert_eq!(record.text("title"), "Spring sale");
        assert_eq!(record.text("missing"), "");
    }

    #[test]
    fn test_odd_status_values_keep_the_list_readable() {
        let records: Vec<EntityRecord> = serde_json::from_value(json!([
            { "id": 1, "status": null, "title": "No status" },
            { "id": 2, "status": "Active" },
            { "id": 3, "status": "pending" },
            { "id": 4, "status": 7 },
            { "id": 5 }
        ]))
        .unwrap();
        let statuses: Vec<_> = records.iter().map(|r| r.status).collect();
        assert_eq!(
            statuses,
            vec![
                EntityStatus::Active,
                EntityStatus::Active,
                EntityStatus::Inactive,
                EntityStatus::Inactive,
                EntityStatus::Active,
            ]
        );
        assert_eq!(records[0].text("title"), "No status");
    }

    #[test]
    fn test_pin_order_roundtrip_name() {
        let record: EntityRecord =
            serde_json::from_value(json!({ "id": 1, "status": "active", "pinOrder": 3 })).unwrap();
        assert_eq!(record.pin_order, Some(3));
        assert_eq!(record.text("pinOrder"), "3");
    }

    #[test]
    fn test_list_values_shapes() {
        let record = EntityRecord::new(1, EntityStatus::Active)
            .with_field("images", json!(["/a.png", "/b.png"]))
            .with_field("encoded", "[\"/c.png\"]")
            .with_field("links", "https://a, https://b ,");
        assert_eq!(record.list_values("images"), vec!["/a.png", "/b.png"]);
        assert_eq!(record.list_values("encoded"), vec!["/c.png"]);
        assert_eq!(record.list_values("links"), vec!["https://a", "https://b"]);
        assert!(record.list_values("absent").is_empty());
    }

    #[test]
    fn test_numbered_cell() {
        let record = EntityRecord::new(1, EntityStatus::Active)
            .with_field("description1", "Hosting")
            .with_field("description2", "")
            .with_field("description3", "Support");
        let column = ColumnMetadata::new(
            "Description",
            "description",
            FieldKind::NumberedText { count: 15 },
        );
        assert_eq!(record.cell_text(&column), "Hosting | Support");
    }

    #[test]
    fn test_status_cell_uses_label() {
        let record = EntityRecord::new(1, EntityStatus::Inactive);
        let column = ColumnMetadata::new("Status", "status", FieldKind::Status);
        assert_eq!(record.cell_text(&column), "Inactive");
    }

    #[test]
    fn test_search_text() {
        let record = EntityRecord::new(42, EntityStatus::Active).with_field("title", "Hero BANNER");
        assert_eq!(record.search_text(&["id", "title", "status"]), "42 hero banner active");
    }

    #[test]
    fn test_normalize_date() {
        assert_eq!(normalize_date("2024-03-05T10:00:00.000Z"), "2024-03-05");
        assert_eq!(normalize_date("2024-03-05"), "2024-03-05");
        assert_eq!(normalize_date("2024-03-05 10:00"), "2024-03-05");
        assert_eq!(normalize_date("soon"), "soon");
    }
}

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Lifecycle status shared by every entity.
///
/// `Terminated` is the soft-delete marker: terminated records never come back
/// to the local collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityStatus {
    #[default]
    Active,
    Inactive,
    Terminated,
}

impl EntityStatus {
    /// Statuses an operator can pick from the row dropdown
    pub const SELECTABLE: [EntityStatus; 2] = [EntityStatus::Active, EntityStatus::Inactive];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Terminated => "terminated",
        }
    }

    /// Human readable label ("Active")
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Terminated => "Terminated",
        }
    }

    /// CSS modifier used by tables and the print report
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Active => "status-active",
            _ => "status-inactive",
        }
    }
}

impl fmt::Display for EntityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "terminated" => Ok(Self::Terminated),
            other => Err(format!("Unknown status: {}", other)),
        }
    }
}

/// Reads a row status without failing the whole collection.
///
/// Missing or `null` reads as the default; any other unreadable value reads
/// as `Inactive` so the row is not shown as live.
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<EntityStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    let status = match raw {
        None | Some(Value::Null) => EntityStatus::default(),
        Some(Value::String(text)) => text.parse().unwrap_or_else(|e| {
            log::warn!("{}, treating as inactive", e);
            EntityStatus::Inactive
        }),
        Some(other) => {
            log::warn!("Unexpected status value {}, treating as inactive", other);
            EntityStatus::Inactive
        }
    };
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        assert_eq!(
            serde_json::to_string(&EntityStatus::Terminated).unwrap(),
            "\"terminated\""
        );
        let parsed: EntityStatus = serde_json::from_str("\"inactive\"").unwrap();
        assert_eq!(parsed, EntityStatus::Inactive);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Active".parse::<EntityStatus>(), Ok(EntityStatus::Active));
        assert!("archived".parse::<EntityStatus>().is_err());
    }
}

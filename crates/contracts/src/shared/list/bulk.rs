use crate::domain::common::{EntityId, EntityStatus};
use crate::shared::metadata::EntityMetadataInfo;

/// Per-id result of a fan-out of independent requests.
///
/// Only confirmed ids are reflected in the local list; failed ids keep their
/// previous state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkOutcome {
    pub confirmed: Vec<EntityId>,
    pub failed: Vec<EntityId>,
}

impl BulkOutcome {
    pub fn from_results<E>(results: impl IntoIterator<Item = (EntityId, Result<(), E>)>) -> Self {
        let mut outcome = Self::default();
        for (id, result) in results {
            match result {
                Ok(()) => outcome.confirmed.push(id),
                Err(_) => outcome.failed.push(id),
            }
        }
        outcome
    }

    pub fn total(&self) -> usize {
        self.confirmed.len() + self.failed.len()
    }

    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Notification text for a bulk status change: `Ok` for a success toast,
/// `Err` for an error toast
pub fn status_message(
    meta: &EntityMetadataInfo,
    outcome: &BulkOutcome,
    status: EntityStatus,
) -> Result<String, String> {
    let noun = meta.noun();
    if outcome.confirmed.is_empty() {
        return Err("Failed to update status".to_string());
    }
    if outcome.is_complete() {
        Ok(format!(
            "Updated {} {}(s) to \"{}\"",
            outcome.confirmed.len(),
            noun,
            status
        ))
    } else {
        Err(format!(
            "Updated {} of {} {}(s) to \"{}\"; {} failed",
            outcome.confirmed.len(),
            outcome.total(),
            noun,
            status,
            outcome.failed.len()
        ))
    }
}

/// Notification text for a soft delete
pub fn delete_message(meta: &EntityMetadataInfo, outcome: &BulkOutcome) -> Result<String, String> {
    if outcome.confirmed.is_empty() {
        return Err("Delete failed".to_string());
    }
    if outcome.is_complete() {
        Ok(format!("{} deleted successfully!", meta.ui.element_name))
    } else {
        Err(format!(
            "Deleted {} of {} {}; {} failed",
            outcome.confirmed.len(),
            outcome.total(),
            meta.plural_noun(),
            outcome.failed.len()
        ))
    }
}

/// Question shown in the delete confirmation dialog
pub fn delete_question(meta: &EntityMetadataInfo, count: usize) -> String {
    if count > 1 {
        format!("Are you sure you want to delete selected {}?", meta.plural_noun())
    } else {
        format!("Are you sure you want to delete this {}?", meta.noun())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{a003_banner, a010_price};

    fn outcome(confirmed: &[EntityId], failed: &[EntityId]) -> BulkOutcome {
        BulkOutcome {
            confirmed: confirmed.to_vec(),
            failed: failed.to_vec(),
        }
    }

    #[test]
    fn test_from_results_splits_ids() {
        let results = vec![(1, Ok(())), (2, Err("boom")), (3, Ok(()))];
        let outcome = BulkOutcome::from_results(results);
        assert_eq!(outcome.confirmed, vec![1, 3]);
        assert_eq!(outcome.failed, vec![2]);
        assert!(!outcome.is_complete());
        assert_eq!(outcome.total(), 3);
    }

    #[test]
    fn test_status_message_success() {
        let meta = &a003_banner::ENTITY_METADATA;
        assert_eq!(
            status_message(meta, &outcome(&[1, 2], &[]), EntityStatus::Inactive),
            Ok("Updated 2 banner(s) to \"inactive\"".to_string())
        );
    }

    #[test]
    fn test_status_message_partial_and_total_failure() {
        let meta = &a003_banner::ENTITY_METADATA;
        assert_eq!(
            status_message(meta, &outcome(&[1], &[2, 3]), EntityStatus::Active),
            Err("Updated 1 of 3 banner(s) to \"active\"; 2 failed".to_string())
        );
        assert_eq!(
            status_message(meta, &outcome(&[], &[1]), EntityStatus::Active),
            Err("Failed to update status".to_string())
        );
    }

    #[test]
    fn test_delete_messages() {
        let meta = &a010_price::ENTITY_METADATA;
        assert_eq!(
            delete_message(meta, &outcome(&[1], &[])),
            Ok("Price Plan deleted successfully!".to_string())
        );
        assert_eq!(
            delete_message(meta, &outcome(&[1], &[2])),
            Err("Deleted 1 of 2 price plans; 1 failed".to_string())
        );
    }

    #[test]
    fn test_delete_question() {
        let meta = &a003_banner::ENTITY_METADATA;
        assert_eq!(
            delete_question(meta, 1),
            "Are you sure you want to delete this banner?"
        );
        assert_eq!(
            delete_question(meta, 3),
            "Are you sure you want to delete selected banners?"
        );
    }
}

//! Entity catalogue: one entry per managed entity, in navigation order

use super::*;
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata};
use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Category,
    Event,
    Banner,
    About,
    Card,
    Service,
    Portfolio,
    Team,
    Process,
    Price,
    Contact,
    Blog,
    Testimonial,
    Logo,
}

static BY_SLUG: Lazy<HashMap<&'static str, EntityKind>> = Lazy::new(|| {
    EntityKind::ALL
        .iter()
        .map(|kind| (kind.metadata().slug, *kind))
        .collect()
});

impl EntityKind {
    /// Sidebar order
    pub const ALL: [EntityKind; 14] = [
        EntityKind::Category,
        EntityKind::Event,
        EntityKind::Banner,
        EntityKind::About,
        EntityKind::Card,
        EntityKind::Service,
        EntityKind::Portfolio,
        EntityKind::Team,
        EntityKind::Process,
        EntityKind::Price,
        EntityKind::Contact,
        EntityKind::Blog,
        EntityKind::Testimonial,
        EntityKind::Logo,
    ];

    pub fn metadata(self) -> &'static EntityMetadataInfo {
        match self {
            Self::Category => &a001_category::ENTITY_METADATA,
            Self::Event => &a002_event::ENTITY_METADATA,
            Self::Banner => &a003_banner::ENTITY_METADATA,
            Self::About => &a004_about::ENTITY_METADATA,
            Self::Card => &a005_card::ENTITY_METADATA,
            Self::Service => &a006_service::ENTITY_METADATA,
            Self::Portfolio => &a007_portfolio::ENTITY_METADATA,
            Self::Team => &a008_team::ENTITY_METADATA,
            Self::Process => &a009_process::ENTITY_METADATA,
            Self::Price => &a010_price::ENTITY_METADATA,
            Self::Contact => &a011_contact::ENTITY_METADATA,
            Self::Blog => &a012_blog::ENTITY_METADATA,
            Self::Testimonial => &a013_testimonial::ENTITY_METADATA,
            Self::Logo => &a014_logo::ENTITY_METADATA,
        }
    }

    pub fn fields(self) -> &'static [FieldMetadata] {
        match self {
            Self::Category => a001_category::FIELDS,
            Self::Event => a002_event::FIELDS,
            Self::Banner => a003_banner::FIELDS,
            Self::About => a004_about::FIELDS,
            Self::Card => a005_card::FIELDS,
            Self::Service => a006_service::FIELDS,
            Self::Portfolio => a007_portfolio::FIELDS,
            Self::Team => a008_team::FIELDS,
            Self::Process => a009_process::FIELDS,
            Self::Price => a010_price::FIELDS,
            Self::Contact => a011_contact::FIELDS,
            Self::Blog => a012_blog::FIELDS,
            Self::Testimonial => a013_testimonial::FIELDS,
            Self::Logo => a014_logo::FIELDS,
        }
    }

    pub fn slug(self) -> &'static str {
        self.metadata().slug
    }

    /// Sidebar label
    pub fn label(self) -> &'static str {
        self.metadata().entity_name
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        BY_SLUG.get(slug).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metadata::{FieldKind, SubmitEncoding};
    use std::collections::HashSet;

    #[test]
    fn test_slugs_unique_and_resolvable() {
        let slugs: HashSet<_> = EntityKind::ALL.iter().map(|k| k.slug()).collect();
        assert_eq!(slugs.len(), 14);
        for kind in EntityKind::ALL {
            assert_eq!(EntityKind::from_slug(kind.slug()), Some(kind));
        }
        assert_eq!(EntityKind::from_slug("dashboard"), None);
    }

    #[test]
    fn test_endpoints() {
        let category = EntityKind::Category.metadata();
        assert_eq!(category.list_path(), "/admin/category/getCategories");
        assert_eq!(category.delete_path(), "/admin/category/deleteCategory");
        assert_eq!(
            EntityKind::Process.metadata().list_path(),
            "/admin/process/getProcesses"
        );
    }

    #[test]
    fn test_soft_delete_through_update() {
        assert_eq!(
            EntityKind::Contact.metadata().delete_path(),
            "/admin/contact/updateContact"
        );
        assert_eq!(
            EntityKind::Testimonial.metadata().delete_path(),
            "/admin/testimonial/updateTestimonial"
        );
    }

    #[test]
    fn test_every_entity_searches_id_and_status() {
        for kind in EntityKind::ALL {
            let fields = kind.metadata().list.search_fields;
            assert!(fields.contains(&"id"), "{:?}", kind);
            assert!(fields.contains(&"status"), "{:?}", kind);
        }
    }

    #[test]
    fn test_json_entities_have_no_media() {
        for kind in EntityKind::ALL {
            if kind.metadata().submit == SubmitEncoding::Json {
                assert!(kind.fields().iter().all(|f| !f.kind.is_media()), "{:?}", kind);
            }
        }
    }

    #[test]
    fn test_only_portfolio_orderable() {
        let orderable: Vec<_> = EntityKind::ALL
            .into_iter()
            .filter(|k| k.metadata().list.orderable)
            .collect();
        assert_eq!(orderable, vec![EntityKind::Portfolio]);
        assert!(EntityKind::Price
            .fields()
            .iter()
            .any(|f| f.kind == FieldKind::NumberedText { count: 15 }));
    }
}

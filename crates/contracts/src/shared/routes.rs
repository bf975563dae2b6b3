//! Client-side route table.
//!
//! Entity pages follow one naming scheme: `/<slug>` for the list,
//! `/create-<slug>` for the create form and `/edit-<slug>/<id>` for editing.

use crate::domain::common::EntityId;
use crate::domain::EntityKind;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("Unknown page: {0}")]
    UnknownPage(String),
    #[error("Invalid record id: {0}")]
    InvalidId(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Login,
    Register,
    List(EntityKind),
    Create(EntityKind),
    Edit(EntityKind, EntityId),
    NotFound,
}

impl AppRoute {
    /// Unknown or malformed paths resolve to `NotFound`
    pub fn parse(path: &str) -> Self {
        Self::resolve(path).unwrap_or(Self::NotFound)
    }

    pub fn resolve(path: &str) -> Result<Self, RouteError> {
        let trimmed = path.trim_matches('/');
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Ok(Self::Home),
            ["login"] => Ok(Self::Login),
            ["register"] => Ok(Self::Register),
            [page] => Self::page(page),
            [page, id] => Self::detail(page, id),
            _ => Err(RouteError::UnknownPage(trimmed.to_string())),
        }
    }

    /// Single-segment page: list or create form
    pub fn page(page: &str) -> Result<Self, RouteError> {
        let (slug, create) = match page.strip_prefix("create-") {
            Some(slug) => (slug, true),
            None => (page, false),
        };
        let kind = EntityKind::from_slug(slug)
            .ok_or_else(|| RouteError::UnknownPage(page.to_string()))?;
        Ok(if create {
            Self::Create(kind)
        } else {
            Self::List(kind)
        })
    }

    /// Two-segment page: only `edit-<slug>/<id>` exists
    pub fn detail(page: &str, id: &str) -> Result<Self, RouteError> {
        let kind = page
            .strip_prefix("edit-")
            .and_then(EntityKind::from_slug)
            .ok_or_else(|| RouteError::UnknownPage(page.to_string()))?;
        let id = id
            .parse::<EntityId>()
            .map_err(|_| RouteError::InvalidId(id.to_string()))?;
        Ok(Self::Edit(kind, id))
    }

    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::List(kind) => kind.metadata().list_route(),
            Self::Create(kind) => kind.metadata().create_route(),
            Self::Edit(kind, id) => kind.metadata().edit_route(*id),
            Self::NotFound => "/".to_string(),
        }
    }

    /// Entity the page belongs to, used to highlight the sidebar
    pub fn entity(&self) -> Option<EntityKind> {
        match self {
            Self::List(kind) | Self::Create(kind) | Self::Edit(kind, _) => Some(*kind),
            _ => None,
        }
    }

    /// Pages reachable without a session
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }
}

/// Whether the sidebar item of `kind` is active on `path`
pub fn is_active_for(kind: EntityKind, path: &str) -> bool {
    AppRoute::parse(path).entity() == Some(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entity_routes() {
        assert_eq!(AppRoute::parse("/"), AppRoute::Home);
        assert_eq!(AppRoute::parse("/banner"), AppRoute::List(EntityKind::Banner));
        assert_eq!(
            AppRoute::parse("/create-banner"),
            AppRoute::Create(EntityKind::Banner)
        );
        assert_eq!(
            AppRoute::parse("/edit-portfolio/12"),
            AppRoute::Edit(EntityKind::Portfolio, 12)
        );
        assert_eq!(AppRoute::parse("/login"), AppRoute::Login);
    }

    #[test]
    fn test_unknown_routes() {
        assert_eq!(AppRoute::parse("/nope"), AppRoute::NotFound);
        assert_eq!(AppRoute::parse("/edit-banner/abc"), AppRoute::NotFound);
        assert_eq!(AppRoute::parse("/banner/7"), AppRoute::NotFound);
        assert_eq!(AppRoute::parse("/edit-banner/7/x"), AppRoute::NotFound);
        assert_eq!(
            AppRoute::resolve("/edit-banner/abc"),
            Err(RouteError::InvalidId("abc".to_string()))
        );
        assert_eq!(
            AppRoute::resolve("/create-widget"),
            Err(RouteError::UnknownPage("create-widget".to_string()))
        );
    }

    #[test]
    fn test_path_round_trips_for_every_entity() {
        for kind in EntityKind::ALL {
            for route in [
                AppRoute::List(kind),
                AppRoute::Create(kind),
                AppRoute::Edit(kind, 3),
            ] {
                assert_eq!(AppRoute::parse(&route.path()), route);
            }
        }
    }

    #[test]
    fn test_sidebar_activity() {
        assert!(is_active_for(EntityKind::Team, "/edit-team/4"));
        assert!(is_active_for(EntityKind::Team, "/create-team"));
        assert!(!is_active_for(EntityKind::Team, "/banner"));
        assert!(AppRoute::Login.is_public());
    }
}

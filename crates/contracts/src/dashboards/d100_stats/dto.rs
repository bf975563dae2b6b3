use serde::{Deserialize, Serialize};

/// Aggregated counters endpoint
pub const STATS_PATH: &str = "/admin/dashboard/stats";

/// Counts of non-terminated records. Missing counters read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub banners: u64,
    pub blogs: u64,
    pub services: u64,
    pub team_members: u64,
}

/// One card of the home page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: u64,
    pub icon: &'static str,
    /// List route the card links to
    pub route: &'static str,
}

impl DashboardStats {
    pub fn cards(&self) -> Vec<StatCard> {
        vec![
            StatCard {
                title: "Banners",
                value: self.banners,
                icon: "image",
                route: "/banner",
            },
            StatCard {
                title: "Blogs",
                value: self.blogs,
                icon: "file-text",
                route: "/blog",
            },
            StatCard {
                title: "Services",
                value: self.services,
                icon: "briefcase",
                route: "/service",
            },
            StatCard {
                title: "Team Members",
                value: self.team_members,
                icon: "users",
                route: "/team",
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_payload_defaults_to_zero() {
        let stats: DashboardStats =
            serde_json::from_str(r#"{"banners":4,"teamMembers":2}"#).unwrap();
        assert_eq!(stats.banners, 4);
        assert_eq!(stats.team_members, 2);
        assert_eq!(stats.blogs, 0);
        assert_eq!(stats.cards().len(), 4);
        assert_eq!(stats.cards()[3].value, 2);
    }
}

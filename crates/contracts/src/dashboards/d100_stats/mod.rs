//! Home page counters

mod dto;

pub use dto::{DashboardStats, StatCard, STATS_PATH};

//! Role dashboards and public statistics.

pub mod service;

pub use service::{
    AdminDashboard, CitizenDashboard, DashboardService, DisasterStats, PublicStatistics,
    ResourceStats, VolunteerDashboard,
};

pub mod use_revenue;
pub mod use_roster;
pub mod use_session;
pub mod use_statistics;

pub use use_revenue::{use_revenue, DatePreset, UseRevenueResult};
pub use use_roster::{use_roster, UseRosterResult};
pub use use_session::{use_session, UseSessionResult};
pub use use_statistics::{use_statistics, UseStatisticsResult};

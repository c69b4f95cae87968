pub mod active_staff;
pub mod admin_dashboard;
pub mod admin_login;
pub mod confirm_dialog;
pub mod inactive_staff;
pub mod revenue_report;
pub mod staff_form;
pub mod statistics_dashboard;

pub use active_staff::ActiveStaff;
pub use admin_dashboard::AdminDashboard;
pub use admin_login::AdminLogin;
pub use confirm_dialog::{ConfirmDialog, ConfirmTone};
pub use inactive_staff::InactiveStaff;
pub use revenue_report::RevenueReportView;
pub use staff_form::StaffForm;
pub use statistics_dashboard::StatisticsDashboard;

pub mod api;
pub mod csv_export;
pub mod date_utils;
pub mod format;
pub mod logging;
pub mod roster;
pub mod session;
pub mod stats;
pub mod validation;

pub use api::{ApiClient, ApiError};
pub use logging::Logger;

use gloo::console;

/// Console logger used at fetch and mutation boundaries. Messages are
/// prefixed with the emitting component so combined-view flows are easy
/// to follow in the browser console.
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        console::debug!(format!("[{}] {}", component, message));
    }

    pub fn info_with_component(component: &str, message: &str) {
        console::info!(format!("[{}] {}", component, message));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        console::warn!(format!("[{}] {}", component, message));
    }

    pub fn error_with_component(component: &str, message: &str) {
        console::error!(format!("[{}] {}", component, message));
    }
}

//! Session guard for the admin console.
//!
//! Credentials live in browser local storage under two keys: an opaque
//! token and a JSON-encoded administrator profile. The guard never
//! trusts the raw strings: a session exists only when the token is
//! non-empty, the profile parses, its role string parses to an
//! administrative role and that role may view the dashboard. Any
//! failure clears both keys so half-written state cannot linger.
//!
//! Storage access goes through the [`SessionStore`] port so the guard
//! logic runs against an in-memory store in tests.

use shared::{AdminProfile, AdminRole, AdminSession, Capability};
#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

pub const TOKEN_KEY: &str = "adminToken";
pub const PROFILE_KEY: &str = "adminData";

/// Demo credentials accepted while the service has no credential
/// endpoint. This is a display gate, not a security boundary; see
/// [`SessionService::demo_login`].
pub const DEMO_EMAIL: &str = "admin@abcclinics.ph";
pub const DEMO_PASSWORD: &str = "admin123";

/// Key-value storage port for session credentials
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Browser local storage. Storage failures (disabled storage, private
/// mode quotas) degrade to "no value", which the guard treats as an
/// absent session.
#[derive(Clone, Default)]
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory store backing the guard tests
#[cfg(test)]
#[derive(Default)]
pub struct MemorySessionStore {
    values: RefCell<HashMap<String, String>>,
}

#[cfg(test)]
impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

/// Session guard over a [`SessionStore`]
pub struct SessionService<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> SessionService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the stored session if it passes every check; otherwise
    /// clear both keys and report no session.
    pub fn load_session(&self) -> Option<AdminSession> {
        match self.validate_stored() {
            Some(session) => Some(session),
            None => {
                self.clear();
                None
            }
        }
    }

    fn validate_stored(&self) -> Option<AdminSession> {
        let token = self.store.get(TOKEN_KEY).filter(|t| !t.is_empty())?;
        let raw_profile = self.store.get(PROFILE_KEY)?;
        let profile: AdminProfile = serde_json::from_str(&raw_profile).ok()?;
        let role = AdminRole::parse(&profile.role).ok()?;
        if !role.has_capability(Capability::ViewAdminDashboard) {
            return None;
        }
        Some(AdminSession { token, profile, role })
    }

    /// Write a token/profile pair through the port
    pub fn store_session(&self, token: &str, profile: &AdminProfile) {
        self.store.set(TOKEN_KEY, token);
        if let Ok(json) = serde_json::to_string(profile) {
            self.store.set(PROFILE_KEY, &json);
        }
    }

    /// Remove both stored values (logout, or any failed validation)
    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(PROFILE_KEY);
    }

    /// Placeholder credential exchange pending a real verification
    /// endpoint: accepts the fixed demo pair, fabricates a
    /// super-administrator profile and stores it through the port. The
    /// guard itself never special-cases sessions created here.
    pub fn demo_login(&self, email: &str, password: &str) -> Result<AdminSession, String> {
        if email != DEMO_EMAIL || password != DEMO_PASSWORD {
            return Err("Invalid email or password".to_string());
        }

        let profile = AdminProfile {
            admin_id: "admin-001".to_string(),
            full_name: "System Administrator".to_string(),
            email: email.to_string(),
            role: "SuperAdmin".to_string(),
            contact_no: Some("+63-900-000-0000".to_string()),
            last_login: Some(chrono::Utc::now().to_rfc3339()),
        };
        let role = AdminRole::parse(&profile.role).map_err(|e| e.to_string())?;
        let token = format!("demo-{}", chrono::Utc::now().timestamp_millis());

        self.store_session(&token, &profile);
        Ok(AdminSession {
            token,
            profile,
            role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> SessionService<MemorySessionStore> {
        SessionService::new(MemorySessionStore::default())
    }

    fn store_profile(service: &SessionService<MemorySessionStore>, token: &str, profile: &str) {
        service.store.set(TOKEN_KEY, token);
        service.store.set(PROFILE_KEY, profile);
    }

    #[test]
    fn test_valid_super_admin_session_loads() {
        let service = service();
        store_profile(
            &service,
            "token-123",
            r#"{"admin_id":"ADM-001","full_name":"System Administrator","email":"admin@abcclinics.ph","role":"SuperAdmin","contact_no":null,"last_login":null}"#,
        );

        let session = service.load_session().unwrap();
        assert_eq!(session.role, AdminRole::SuperAdmin);
        assert_eq!(session.token, "token-123");
        assert_eq!(session.profile.full_name, "System Administrator");
    }

    #[test]
    fn test_role_containing_admin_is_accepted() {
        let service = service();
        store_profile(
            &service,
            "token-456",
            r#"{"role":"ClinicAdmin","contact_no":null,"last_login":null}"#,
        );

        let session = service.load_session().unwrap();
        assert_eq!(session.role, AdminRole::Admin);
    }

    #[test]
    fn test_non_admin_role_clears_storage() {
        let service = service();
        store_profile(
            &service,
            "token-789",
            r#"{"role":"Staff","contact_no":null,"last_login":null}"#,
        );

        assert!(service.load_session().is_none());
        assert!(service.store.get(TOKEN_KEY).is_none());
        assert!(service.store.get(PROFILE_KEY).is_none());
    }

    #[test]
    fn test_malformed_profile_clears_storage() {
        let service = service();
        store_profile(&service, "token-789", "not json at all {");

        assert!(service.load_session().is_none());
        assert!(service.store.get(TOKEN_KEY).is_none());
        assert!(service.store.get(PROFILE_KEY).is_none());
    }

    #[test]
    fn test_missing_token_clears_storage() {
        let service = service();
        service.store.set(
            PROFILE_KEY,
            r#"{"role":"SuperAdmin","contact_no":null,"last_login":null}"#,
        );

        assert!(service.load_session().is_none());
        assert!(service.store.get(PROFILE_KEY).is_none());
    }

    #[test]
    fn test_empty_token_clears_storage() {
        let service = service();
        store_profile(
            &service,
            "",
            r#"{"role":"SuperAdmin","contact_no":null,"last_login":null}"#,
        );

        assert!(service.load_session().is_none());
        assert!(service.store.get(TOKEN_KEY).is_none());
        assert!(service.store.get(PROFILE_KEY).is_none());
    }

    #[test]
    fn test_demo_login_round_trip() {
        let service = service();

        let session = service.demo_login(DEMO_EMAIL, DEMO_PASSWORD).unwrap();
        assert_eq!(session.role, AdminRole::SuperAdmin);
        assert_eq!(session.profile.email, DEMO_EMAIL);

        // The stored values must satisfy the guard on the next load
        let reloaded = service.load_session().unwrap();
        assert_eq!(reloaded.profile.email, DEMO_EMAIL);
    }

    #[test]
    fn test_demo_login_rejects_bad_credentials() {
        let service = service();

        let err = service.demo_login(DEMO_EMAIL, "wrong").unwrap_err();
        assert_eq!(err, "Invalid email or password");
        assert!(service.store.get(TOKEN_KEY).is_none());

        assert!(service.demo_login("someone@else.ph", DEMO_PASSWORD).is_err());
    }

    #[test]
    fn test_clear_removes_both_keys() {
        let service = service();
        store_profile(
            &service,
            "token-123",
            r#"{"role":"SuperAdmin","contact_no":null,"last_login":null}"#,
        );

        service.clear();
        assert!(service.store.get(TOKEN_KEY).is_none());
        assert!(service.store.get(PROFILE_KEY).is_none());
    }
}

use yew::prelude::*;
use shared::AdminSession;
use wasm_bindgen_futures::spawn_local;
use crate::services::logging::Logger;
use crate::services::session::{BrowserSessionStore, SessionService};

const COMPONENT: &str = "use_session";

#[derive(Clone)]
pub struct SessionHookState {
    /// Present only when the stored credentials passed every guard check
    pub session: Option<AdminSession>,
    pub login_error: Option<String>,
    pub logging_in: bool,
}

#[derive(Clone)]
pub struct UseSessionActions {
    /// (email, password) from the login form
    pub login: Callback<(String, String)>,
    pub logout: Callback<()>,
}

pub struct UseSessionResult {
    pub state: SessionHookState,
    pub actions: UseSessionActions,
}

/// Session lifecycle for the whole console. The stored session is
/// validated once when the hook first runs; the login and logout
/// callbacks write through the same storage guard.
#[hook]
pub fn use_session() -> UseSessionResult {
    let session = use_state(|| SessionService::new(BrowserSessionStore).load_session());
    let login_error = use_state(|| None::<String>);
    let logging_in = use_state(|| false);

    let login = {
        let session = session.clone();
        let login_error = login_error.clone();
        let logging_in = logging_in.clone();

        use_callback((), move |(email, password): (String, String), _| {
            let session = session.clone();
            let login_error = login_error.clone();
            let logging_in = logging_in.clone();

            logging_in.set(true);
            login_error.set(None);

            spawn_local(async move {
                let service = SessionService::new(BrowserSessionStore);
                match service.demo_login(&email, &password) {
                    Ok(loaded) => {
                        Logger::info_with_component(
                            COMPONENT,
                            &format!("Administrator {} logged in", loaded.profile.email),
                        );
                        session.set(Some(loaded));
                    }
                    Err(message) => {
                        login_error.set(Some(message));
                    }
                }
                logging_in.set(false);
            });
        })
    };

    let logout = {
        let session = session.clone();

        use_callback((), move |_: (), _| {
            SessionService::new(BrowserSessionStore).clear();
            Logger::info_with_component(COMPONENT, "Administrator logged out");
            session.set(None);
        })
    };

    let state = SessionHookState {
        session: (*session).clone(),
        login_error: (*login_error).clone(),
        logging_in: *logging_in,
    };

    UseSessionResult {
        state,
        actions: UseSessionActions { login, logout },
    }
}

use yew::prelude::*;

use crate::services::{perform_login, register_user};
use crate::utils::{
    load_from_storage, remove_from_storage, save_to_storage, STORAGE_KEY_ACCESS_TOKEN,
};

#[derive(Clone, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub is_logged_in: bool,
    pub loading: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
    pub show_register: bool,
}

impl AuthState {
    fn logged_out() -> Self {
        Self {
            token: None,
            is_logged_in: false,
            loading: false,
            error: None,
            notice: None,
            show_register: false,
        }
    }
}

pub struct UseAuthHandle {
    pub state: UseStateHandle<AuthState>,
    pub login: Callback<(String, String)>,
    pub register: Callback<(String, String)>,
    pub logout: Callback<()>,
    pub show_register: Callback<()>,
    pub back_to_login: Callback<()>,
}

#[hook]
pub fn use_auth() -> UseAuthHandle {
    let state = use_state(AuthState::logged_out);

    // Restore a persisted session on mount. The token is trusted
    // optimistically; a stale one surfaces as a failed task call later.
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            if let Some(token) = load_from_storage(STORAGE_KEY_ACCESS_TOKEN) {
                log::info!("🔑 Restored session from saved token");
                let mut current_state = (*state).clone();
                current_state.token = Some(token);
                current_state.is_logged_in = true;
                state.set(current_state);
            }
            || ()
        });
    }

    let login = {
        let state = state.clone();
        Callback::from(move |(email, password): (String, String)| {
            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let mut current_state = (*state).clone();
                current_state.loading = true;
                current_state.error = None;
                current_state.notice = None;
                state.set(current_state.clone());

                match perform_login(&email, &password).await {
                    Ok(token) => {
                        if let Err(e) = save_to_storage(STORAGE_KEY_ACCESS_TOKEN, &token) {
                            log::error!("❌ Failed to persist token: {}", e);
                        }
                        log::info!("✅ Login successful: {}", email);
                        current_state.token = Some(token);
                        current_state.is_logged_in = true;
                        current_state.loading = false;
                        state.set(current_state);
                    }
                    Err(e) => {
                        log::error!("❌ Login failed: {}", e);
                        current_state.loading = false;
                        current_state.error = Some("Something went wrong!".to_string());
                        state.set(current_state);
                    }
                }
            });
        })
    };

    let register = {
        let state = state.clone();
        Callback::from(move |(email, password): (String, String)| {
            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let mut current_state = (*state).clone();
                current_state.loading = true;
                current_state.error = None;
                current_state.notice = None;
                state.set(current_state.clone());

                match register_user(&email, &password).await {
                    Ok(()) => {
                        log::info!("📝 Registration successful: {}", email);
                        // Back to login mode; no auto-login after registration
                        current_state.loading = false;
                        current_state.show_register = false;
                        current_state.notice =
                            Some("Registration successful! Please login.".to_string());
                        state.set(current_state);
                    }
                    Err(e) => {
                        log::error!("❌ Registration failed: {}", e);
                        current_state.loading = false;
                        current_state.error = Some("Something went wrong!".to_string());
                        state.set(current_state);
                    }
                }
            });
        })
    };

    // Purely local: never calls the backend
    let logout = {
        let state = state.clone();
        Callback::from(move |_| {
            if let Err(e) = remove_from_storage(STORAGE_KEY_ACCESS_TOKEN) {
                log::error!("❌ Failed to clear saved token: {}", e);
            }
            log::info!("👋 Logout");
            state.set(AuthState::logged_out());
        })
    };

    let show_register = {
        let state = state.clone();
        Callback::from(move |_| {
            let mut current_state = (*state).clone();
            current_state.show_register = true;
            current_state.error = None;
            current_state.notice = None;
            state.set(current_state);
        })
    };

    let back_to_login = {
        let state = state.clone();
        Callback::from(move |_| {
            let mut current_state = (*state).clone();
            current_state.show_register = false;
            current_state.error = None;
            current_state.notice = None;
            state.set(current_state);
        })
    };

    UseAuthHandle {
        state,
        login,
        register,
        logout,
        show_register,
        back_to_login,
    }
}

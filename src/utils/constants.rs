/// Backend base URL, resolved at compile time:
/// - Development: http://localhost:8000 (default)
/// - Production: set BACKEND_URL in .env (injected by build.rs)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// localStorage key holding the bearer token for the current session.
pub const STORAGE_KEY_ACCESS_TOKEN: &str = "taskManager_accessToken";

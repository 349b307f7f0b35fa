use gloo_net::http::Request;
use web_sys::UrlSearchParams;

use crate::models::TokenResponse;
use crate::utils::BACKEND_URL;

/// Exchange credentials for a bearer token. The login endpoint is OAuth2
/// form-encoded and expects the email in the `username` field.
pub async fn perform_login(email: &str, password: &str) -> Result<String, String> {
    let url = format!("{}/login", BACKEND_URL);

    let params =
        UrlSearchParams::new().map_err(|_| "Failed to build form data".to_string())?;
    params.append("username", email);
    params.append("password", password);

    let response = Request::post(&url)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(params)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let token_response = response
        .json::<TokenResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(token_response.access_token)
}

/// Create a new user account. Only success or failure is consumed; the
/// created-user body is discarded.
pub async fn register_user(email: &str, password: &str) -> Result<(), String> {
    let url = format!("{}/users/", BACKEND_URL);

    let response = Request::post(&url)
        .json(&serde_json::json!({
            "email": email,
            "password": password,
        }))
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        let status = response.status();
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(format!("HTTP error {}: {}", status, error_text));
    }

    Ok(())
}

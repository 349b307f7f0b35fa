use gloo_net::http::Request;

use crate::models::{Task, TaskPayload};
use crate::utils::BACKEND_URL;

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Fetch the full task collection for the authenticated user.
pub async fn fetch_tasks(token: &str) -> Result<Vec<Task>, String> {
    let url = format!("{}/tasks/", BACKEND_URL);

    let response = Request::get(&url)
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<Vec<Task>>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Create a task; the server assigns `task_id` and `created_at`.
pub async fn create_task(token: &str, payload: &TaskPayload) -> Result<Task, String> {
    let url = format!("{}/tasks/", BACKEND_URL);

    let response = Request::post(&url)
        .header("Authorization", &bearer(token))
        .json(payload)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<Task>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Replace a task's mutable fields in one call; returns the server's
/// representation so derived fields stay authoritative.
pub async fn update_task(
    token: &str,
    task_id: i64,
    payload: &TaskPayload,
) -> Result<Task, String> {
    let url = format!("{}/tasks/{}", BACKEND_URL, task_id);

    let response = Request::put(&url)
        .header("Authorization", &bearer(token))
        .json(payload)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<Task>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Delete a task. The confirmation payload is not consumed.
pub async fn delete_task(token: &str, task_id: i64) -> Result<(), String> {
    let url = format!("{}/tasks/{}", BACKEND_URL, task_id);

    let response = Request::delete(&url)
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    Ok(())
}

//! REST calls to the feedback backend via `gloo-net`.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<T, String>` with a message fit for a notice: the
//! backend's `detail` field when it sent one, otherwise a generic
//! "<operation> failed: <status>" line. Transport errors surface their own
//! description. Nothing here panics.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use gloo_net::http::{Request, Response};
use serde::Deserialize;

use super::types::{
    AcknowledgeRequest, Feedback, FeedbackCreate, LoginRequest, SignupRequest, TokenResponse,
};

/// Compile-time override for the backend origin; empty means same-origin
/// relative paths. Every call goes through [`endpoint`] so no request can
/// target a different base than the rest.
const API_BASE: &str = match option_env!("API_BASE_URL") {
    Some(base) => base,
    None => "",
};

fn endpoint(path: &str) -> String {
    format!("{API_BASE}{path}")
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

fn failure_message(operation: &str, status: u16, detail: Option<String>) -> String {
    detail.unwrap_or_else(|| format!("{operation} failed: {status}"))
}

/// Error body the backend attaches to non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

async fn rejection(operation: &str, resp: Response) -> String {
    let status = resp.status();
    let detail = resp.json::<ErrorBody>().await.ok().and_then(|body| body.detail);
    log::warn!("{operation} rejected with status {status}");
    failure_message(operation, status, detail)
}

/// Authenticate via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns a displayable message if the request fails to send or the backend
/// rejects the credentials.
pub async fn login(request: &LoginRequest) -> Result<TokenResponse, String> {
    let resp = Request::post(&endpoint("/api/auth/login"))
        .json(request)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(rejection("login", resp).await);
    }
    resp.json::<TokenResponse>().await.map_err(|e| e.to_string())
}

/// Register a new account via `POST /api/auth/signup`.
///
/// The success body is only a confirmation message, so the caller gets `()`;
/// signing in afterwards goes through [`login`].
///
/// # Errors
///
/// Returns a displayable message if the request fails to send or the backend
/// rejects the registration (for example, an already-registered email).
pub async fn signup(request: &SignupRequest) -> Result<(), String> {
    let resp = Request::post(&endpoint("/api/auth/signup"))
        .json(request)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(rejection("signup", resp).await);
    }
    Ok(())
}

/// Fetch feedback the authenticated employee has received.
///
/// # Errors
///
/// Returns a displayable message on transport failure or a non-2xx response.
pub async fn employee_feedback(token: &str) -> Result<Vec<Feedback>, String> {
    fetch_feedback("/api/feedback/employee", token).await
}

/// Fetch feedback the authenticated manager has given.
///
/// # Errors
///
/// Returns a displayable message on transport failure or a non-2xx response.
pub async fn manager_feedback(token: &str) -> Result<Vec<Feedback>, String> {
    fetch_feedback("/api/feedback/manager", token).await
}

async fn fetch_feedback(path: &str, token: &str) -> Result<Vec<Feedback>, String> {
    let resp = Request::get(&endpoint(path))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(rejection("feedback fetch", resp).await);
    }
    resp.json::<Vec<Feedback>>().await.map_err(|e| e.to_string())
}

/// Submit a new feedback record via `POST /api/feedback/`.
///
/// # Errors
///
/// Returns a displayable message on transport failure or a non-2xx response.
pub async fn submit_feedback(token: &str, draft: &FeedbackCreate) -> Result<Feedback, String> {
    // The backend routes feedback creation at the prefix root, so the
    // trailing slash is load-bearing.
    let resp = Request::post(&endpoint("/api/feedback/"))
        .header("Authorization", &bearer(token))
        .json(draft)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(rejection("feedback submit", resp).await);
    }
    resp.json::<Feedback>().await.map_err(|e| e.to_string())
}

/// Mark a feedback record as acknowledged via `PUT /api/feedback/acknowledge`.
///
/// # Errors
///
/// Returns a displayable message on transport failure or a non-2xx response.
pub async fn acknowledge_feedback(token: &str, feedback_id: i64) -> Result<(), String> {
    let payload = AcknowledgeRequest { feedback_id, acknowledged: true };
    let resp = Request::put(&endpoint("/api/feedback/acknowledge"))
        .header("Authorization", &bearer(token))
        .json(&payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(rejection("acknowledge", resp).await);
    }
    Ok(())
}

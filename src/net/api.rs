//! REST API helper for communicating with the registration backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stub returning an error since the endpoint is only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a `Result` instead of panics so a failed registration
//! degrades to a no-op in the UI without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

/// Registration endpoint. Fixed, not configurable.
#[cfg(any(test, feature = "hydrate"))]
pub const USERS_ENDPOINT: &str = "http://localhost:8000/users/";

/// Wire schema for the registration request: exactly two string fields.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, serde::Serialize)]
struct RegisterUserRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[cfg(any(test, feature = "hydrate"))]
fn register_payload<'a>(email: &'a str, password: &'a str) -> RegisterUserRequest<'a> {
    RegisterUserRequest { email, password }
}

#[cfg(any(test, feature = "hydrate"))]
fn register_failed_message(status: u16) -> String {
    format!("register failed: {status}")
}

/// Register a new user via `POST http://localhost:8000/users/`.
///
/// The body is the JSON serialization of `{email, password}` with the
/// values passed through verbatim; `Content-Type: application/json` is set
/// by the `.json()` builder. Any 2xx status counts as success and the
/// response body is not read.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-2xx status.
pub async fn register_user(email: &str, password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = register_payload(email, password);
        let resp = gloo_net::http::Request::post(USERS_ENDPOINT)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(register_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

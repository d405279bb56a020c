//! REST Client
//!
//! Shared HTTP plumbing for the finance backend, organized by domain.

mod finanzas;

pub use finanzas::*;

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

/// Base path of the backend REST service.
pub const API_BASE_URL: &str = "http://localhost:8000/api";

#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never completed (connection refused, CORS, offline).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("server returned status {status}")]
    Status { status: u16, detail: Option<String> },

    /// The body did not match the shape the endpoint promises.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// User-facing message: the server's `detail` text verbatim when it
    /// sent one, otherwise the caller's fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Error bodies optionally carry a `detail` string meant for the user.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

fn extract_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.detail)
}

async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let detail = match response.text().await {
        Ok(body) => extract_detail(&body),
        Err(_) => None,
    };
    Err(ApiError::Status { status, detail })
}

pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(&format!("{API_BASE_URL}{path}"))
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    ensure_success(response)
        .await?
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

/// POST with an empty body; only the status matters.
pub(crate) async fn post_action(path: &str) -> Result<(), ApiError> {
    let response = Request::post(&format!("{API_BASE_URL}{path}"))
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    ensure_success(response).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_extracted_from_error_body() {
        assert_eq!(
            extract_detail(r#"{"detail": "El pago no está pendiente de confirmación."}"#),
            Some("El pago no está pendiente de confirmación.".to_string())
        );
    }

    #[test]
    fn missing_detail_yields_none() {
        assert_eq!(extract_detail(r#"{"error": "otra cosa"}"#), None);
        assert_eq!(extract_detail("not json at all"), None);
        assert_eq!(extract_detail(r#"{"detail": null}"#), None);
    }

    #[test]
    fn user_message_prefers_server_detail() {
        let err = ApiError::Status {
            status: 400,
            detail: Some("Pago ya confirmado.".to_string()),
        };
        assert_eq!(err.user_message("fallback"), "Pago ya confirmado.");
    }

    #[test]
    fn user_message_falls_back_without_detail() {
        let sin_detalle = ApiError::Status {
            status: 500,
            detail: None,
        };
        assert_eq!(sin_detalle.user_message("Error desconocido"), "Error desconocido");

        let red = ApiError::Network("fetch failed".to_string());
        assert_eq!(red.user_message("Error desconocido"), "Error desconocido");
    }
}

//! Fetch Lifecycle
//!
//! The mutually exclusive render states a fetching card moves through. A
//! read starts in `Loading` and lands in `Ready` or `Failed`; there is no
//! retry, so `Failed` is terminal until the component remounts.

use crate::api::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> FetchState<T> {
    /// Resolve the pending read: the payload on success, otherwise the
    /// server's `detail` text when present or `fallback`.
    pub fn resolved(result: Result<T, ApiError>, fallback: &str) -> Self {
        match result {
            Ok(data) => FetchState::Ready(data),
            Err(err) => FetchState::Failed(err.user_message(fallback)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_becomes_ready() {
        let state = FetchState::resolved(Ok(vec![1, 2, 3]), "fallback");
        assert_eq!(state, FetchState::Ready(vec![1, 2, 3]));
    }

    #[test]
    fn failure_keeps_server_detail_verbatim() {
        let err = ApiError::Status {
            status: 403,
            detail: Some("No tiene permisos.".to_string()),
        };
        let state = FetchState::<Vec<u32>>::resolved(Err(err), "Error al cargar.");
        assert_eq!(state, FetchState::Failed("No tiene permisos.".to_string()));
    }

    #[test]
    fn failure_without_detail_uses_fallback() {
        let err = ApiError::Network("connection refused".to_string());
        let state = FetchState::<Vec<u32>>::resolved(Err(err), "Error al cargar.");
        assert_eq!(state, FetchState::Failed("Error al cargar.".to_string()));
    }
}

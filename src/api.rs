use crate::models::{AdminAnalytics, Note};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::env;

/// A failed call against the notes backend. Carries the endpoint so the log
/// line says which fetch went wrong.
#[derive(Debug)]
pub struct ApiError {
    pub endpoint: String,
    pub detail: String,
}

impl ApiError {
    fn new(endpoint: &str, detail: impl ToString) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            detail: detail.to_string(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GET {}: {}", self.endpoint, self.detail)
    }
}

impl std::error::Error for ApiError {}

/// Thin client for the notes backend. Attaches the bearer token when one is
/// configured; authentication itself happens elsewhere.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    pub fn from_env() -> Self {
        Self::new(resolve_base_url(), env::var("NOTES_API_TOKEN").ok())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// All notes visible to the current user.
    pub async fn fetch_notes(&self) -> Result<Vec<Note>, ApiError> {
        self.get_json("/api/notes").await
    }

    /// Pre-aggregated admin timelines; this layer only reformats labels.
    pub async fn fetch_admin_analytics(&self) -> Result<AdminAnalytics, ApiError> {
        self.get_json("/api/admin/analytics").await
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let mut request = self.http.get(format!("{}{}", self.base_url, endpoint));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|err| ApiError::new(endpoint, err))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::new(endpoint, format!("unexpected status {status}")));
        }

        response.json().await.map_err(|err| ApiError::new(endpoint, err))
    }
}

pub fn resolve_base_url() -> String {
    env::var("NOTES_API_URL").unwrap_or_else(|_| "http://localhost:8000".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped_from_base_url() {
        let client = ApiClient::new("http://localhost:8000/", None);
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn api_error_names_the_endpoint() {
        let err = ApiError::new("/api/notes", "unexpected status 503");
        assert_eq!(err.to_string(), "GET /api/notes: unexpected status 503");
    }
}

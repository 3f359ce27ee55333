//! HTTP client for the showcase backend.
//!
//! One method per backend capability. Every call attaches the bearer
//! credential when one is available, normalizes the response shape, and maps
//! failures into [`ApiError`].

use crate::credentials::CredentialStore;
use crate::{ApiError, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use showcase_types::{
    RankingEntry, RankingsEnvelope, RankingsPage, SignupRequest, UserProfile, Video, ALL_CITIES,
};
use std::sync::RwLock;

/// Maximum number of characters of a non-JSON body carried as diagnostic
/// detail.
const BODY_SNIPPET_LEN: usize = 100;

/// API client for the showcase backend.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    credentials: CredentialStore,
    token: RwLock<Option<String>>,
}

impl ApiClient {
    /// Create a client against `base_url`, pre-loading any stored credential.
    pub fn new(base_url: impl Into<String>, credentials: CredentialStore) -> Self {
        let token = credentials.load().unwrap_or_default();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            credentials,
            token: RwLock::new(token),
        }
    }

    /// Whether a bearer credential is currently available.
    pub fn is_authenticated(&self) -> bool {
        self.bearer_token().is_some()
    }

    /// Current credential: the in-memory copy when present, otherwise the
    /// persistent store (which stays authoritative across processes).
    fn bearer_token(&self) -> Option<String> {
        if let Some(token) = self.token.read().ok().and_then(|t| t.clone()) {
            return Some(token);
        }
        self.credentials.load().unwrap_or_default()
    }

    fn set_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.token.write() {
            *guard = token;
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    // ── auth ────────────────────────────────────────────────────────────

    /// `POST /api/auth/signup`. Persists the bearer token if the response
    /// carries one.
    pub async fn signup(&self, request: &SignupRequest) -> Result<()> {
        let value = self
            .execute(self.http.post(self.url("/api/auth/signup")).json(request))
            .await?;
        self.persist_token_from(&value)?;
        Ok(())
    }

    /// `POST /api/auth/login`. Persists the returned bearer token for
    /// subsequent calls.
    pub async fn login(&self, email: &str, password: &str) -> Result<()> {
        let body = serde_json::json!({ "email": email, "password": password });
        let value = self
            .execute(self.http.post(self.url("/api/auth/login")).json(&body))
            .await?;
        self.persist_token_from(&value)?;
        Ok(())
    }

    /// `GET /api/auth/profile`.
    pub async fn profile(&self) -> Result<UserProfile> {
        self.get_json("/api/auth/profile").await
    }

    /// `POST /api/auth/logout`. The server-side invalidation is best-effort;
    /// the local credential is always cleared afterward.
    pub async fn logout(&self) -> Result<()> {
        if self.bearer_token().is_some() {
            if let Err(e) = self
                .execute(self.http.post(self.url("/api/auth/logout")))
                .await
            {
                tracing::warn!(error = %e, "server logout failed");
            }
        }
        self.set_token(None);
        self.credentials.clear()
    }

    // ── videos ──────────────────────────────────────────────────────────

    /// `GET /api/videos/` — the session owner's videos.
    pub async fn my_videos(&self) -> Result<Vec<Video>> {
        self.get_list("/api/videos/").await
    }

    /// `GET /api/public/videos/` — the public video list.
    pub async fn public_videos(&self) -> Result<Vec<Video>> {
        self.get_list("/api/public/videos/").await
    }

    /// `GET /api/videos/{id}`.
    pub async fn get_video(&self, video_id: &str) -> Result<Video> {
        self.get_json(&format!("/api/videos/{}", video_id)).await
    }

    /// `DELETE /api/videos/{id}`.
    pub async fn delete_video(&self, video_id: &str) -> Result<()> {
        self.expect_empty(self.http.delete(self.url(&format!("/api/videos/{}", video_id))))
            .await
    }

    /// `POST /api/videos/upload` — the sole multipart call. The content type
    /// is left to the transport so it can set the boundary itself; title,
    /// binary payload, and visibility flag travel as separate fields.
    pub async fn upload_video(
        &self,
        title: &str,
        file_name: &str,
        payload: Vec<u8>,
        is_public: bool,
    ) -> Result<Video> {
        tracing::debug!(title, file_name, is_public, bytes = payload.len(), "uploading video");

        let part = reqwest::multipart::Part::bytes(payload).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new()
            .text("title", title.to_string())
            .part("video_file", part)
            .text("is_public", is_public.to_string());

        let value = self
            .execute(self.http.post(self.url("/api/videos/upload")).multipart(form))
            .await?;
        from_value(value)
    }

    // ── voting ──────────────────────────────────────────────────────────

    /// `POST /api/public/videos/{id}/vote`.
    pub async fn vote(&self, video_id: &str) -> Result<()> {
        self.expect_empty(
            self.http
                .post(self.url(&format!("/api/public/videos/{}/vote", video_id))),
        )
        .await
    }

    /// `DELETE /api/public/videos/{id}/vote`.
    pub async fn unvote(&self, video_id: &str) -> Result<()> {
        self.expect_empty(
            self.http
                .delete(self.url(&format!("/api/public/videos/{}/vote", video_id))),
        )
        .await
    }

    // ── rankings ────────────────────────────────────────────────────────

    /// `GET /api/public/rankings` — unwraps the paginated envelope,
    /// defaulting every field when the envelope is malformed.
    pub async fn rankings(&self, page_size: u64, city: &str, page: u64) -> Result<RankingsPage> {
        let mut request = self
            .http
            .get(self.url("/api/public/rankings"))
            .query(&[("page_size", page_size.to_string()), ("page", page.to_string())]);
        if !city.is_empty() && !city.eq_ignore_ascii_case(ALL_CITIES) {
            request = request.query(&[("city", city)]);
        }

        let value = self.execute(request).await?;
        let envelope: RankingsEnvelope = serde_json::from_value(value).unwrap_or_default();
        Ok(envelope.into_page(page_size))
    }

    /// `GET /api/public/rankings/{user_id}` — a single user's ranking row.
    pub async fn player_ranking(&self, user_id: &str) -> Result<RankingEntry> {
        self.get_json(&format!("/api/public/rankings/{}", user_id))
            .await
    }

    /// `POST /api/public/rankings/refresh`.
    pub async fn refresh_rankings(&self) -> Result<()> {
        self.expect_empty(self.http.post(self.url("/api/public/rankings/refresh")))
            .await
    }

    // ── misc ────────────────────────────────────────────────────────────

    /// `GET /api/health`.
    pub async fn health(&self) -> Result<()> {
        self.expect_empty(self.http.get(self.url("/api/health"))).await
    }

    // ── request plumbing ────────────────────────────────────────────────

    /// Store a token found in an auth response, both in memory and on disk.
    fn persist_token_from(&self, value: &Value) -> Result<()> {
        if let Some(token) = value.get("token").and_then(Value::as_str) {
            self.credentials.store(token)?;
            self.set_token(Some(token.to_string()));
        }
        Ok(())
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let value = self.execute(self.http.get(self.url(endpoint))).await?;
        from_value(value)
    }

    /// GET an endpoint whose payload must always be an array; any non-array
    /// or absent payload yields an empty vector.
    async fn get_list<T: DeserializeOwned>(&self, endpoint: &str) -> Result<Vec<T>> {
        let value = self.execute(self.http.get(self.url(endpoint))).await?;
        if !value.is_array() {
            return Ok(Vec::new());
        }
        from_value(value)
    }

    async fn expect_empty(&self, request: reqwest::RequestBuilder) -> Result<()> {
        self.execute(request).await.map(|_| ())
    }

    /// Send a request with the bearer attached and normalize the response:
    /// 204 maps to null, non-JSON bodies fail as `NonJson`, error statuses
    /// carry the body's error/message field when present.
    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<Value> {
        let request = match self.bearer_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NO_CONTENT {
            return Ok(Value::Null);
        }

        let is_json = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.contains("application/json"))
            .unwrap_or(false);

        let body = response.text().await?;

        if body.is_empty() && status.is_success() {
            return Ok(Value::Null);
        }

        if !is_json {
            return Err(ApiError::NonJson {
                status: status.as_u16(),
                body: truncate(&body, BODY_SNIPPET_LEN),
            });
        }

        let value: Value = serde_json::from_str(&body).map_err(|_| ApiError::NonJson {
            status: status.as_u16(),
            body: truncate(&body, BODY_SNIPPET_LEN),
        })?;

        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                message: error_message(&value, status.as_u16()),
            });
        }

        Ok(value)
    }
}

fn from_value<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| ApiError::Transport(format!("JSON parse error: {}", e)))
}

/// Pull the human-readable message out of an error body, preferring the
/// `error` field, then `message`, then a generic status line.
fn error_message(value: &Value, status: u16) -> String {
    value
        .get("error")
        .and_then(Value::as_str)
        .or_else(|| value.get("message").and_then(Value::as_str))
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP error! status: {}", status))
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

//! Outbound client for the external directory API.

use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::DirectoryError;

/// Stateless client for directory lookups.
///
/// Only invoked on a cache miss; every response is handed back as raw JSON
/// because the dashboard relays profiles without interpreting them.
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    http: reqwest::Client,
    base: Url,
    token: String,
}

impl DirectoryClient {
    pub fn new(base: Url, token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base,
            token: token.into(),
        }
    }

    /// The authenticated bot's own profile.
    pub async fn get_self(&self) -> Result<Value, DirectoryError> {
        self.get(&["users", "@me"]).await
    }

    /// A user profile by id.
    pub async fn get_user(&self, id: &str) -> Result<Value, DirectoryError> {
        self.get(&["users", id]).await
    }

    /// The public preview of a guild by id.
    pub async fn get_guild_preview(&self, id: &str) -> Result<Value, DirectoryError> {
        self.get(&["guilds", id, "preview"]).await
    }

    /// The guilds the authenticated bot belongs to.
    pub async fn get_self_guilds(&self) -> Result<Value, DirectoryError> {
        self.get(&["users", "@me", "guilds"]).await
    }

    async fn get(&self, segments: &[&str]) -> Result<Value, DirectoryError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .expect("directory base URL must support path segments")
            .pop_if_empty()
            .extend(segments);

        debug!("directory lookup: {}", url.path());

        let response = self
            .http
            .get(url)
            .header("Authorization", format!("Bot {}", self.token))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::Status(status));
        }

        Ok(response.json().await?)
    }
}

//! Moderator note attached to a user.

use serde::{Deserialize, Serialize};

use super::fresh_id;

/// A note a moderator left about a user in one guild.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserNote {
    /// Unique id, minted on construction.
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "guildSnowflake")]
    pub guild_snowflake: i64,

    #[serde(rename = "userSnowflake")]
    pub user_snowflake: i64,

    /// Note body.
    #[serde(rename = "noteContent")]
    pub note_content: String,

    /// Moderator who wrote the note.
    #[serde(rename = "authorSnowflake")]
    pub author_snowflake: i64,

    /// Unix timestamp the note was created.
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

impl UserNote {
    pub fn new(
        guild_snowflake: i64,
        user_snowflake: i64,
        author_snowflake: i64,
        note_content: impl Into<String>,
    ) -> Self {
        Self {
            id: fresh_id(),
            guild_snowflake,
            user_snowflake,
            note_content: note_content.into(),
            author_snowflake,
            created_at: chrono::Utc::now().timestamp(),
        }
    }
}

//! Mod-mail transcript line.

use serde::{Deserialize, Serialize};

use super::fresh_id;

/// One archived message from a mod-mail conversation.
///
/// Written singly as messages arrive, or in a batch when a ticket is closed
/// and its backlog is archived at once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    #[serde(rename = "_id")]
    pub id: String,

    /// Ticket this line belongs to.
    #[serde(rename = "modmailId")]
    pub modmail_id: String,

    #[serde(rename = "sendersnowflake")]
    pub sender_snowflake: i64,

    /// Message text.
    pub content: String,

    /// Attachment URLs, empty for text-only messages.
    pub attachments: Vec<String>,

    /// Unix timestamp the message was sent.
    #[serde(rename = "createdat")]
    pub created_at: i64,

    #[serde(rename = "guildSnowflake")]
    pub guild_snowflake: i64,
}

impl Transcript {
    pub fn new(
        modmail_id: impl Into<String>,
        sender_snowflake: i64,
        guild_snowflake: i64,
        content: impl Into<String>,
        attachments: Vec<String>,
    ) -> Self {
        Self {
            id: fresh_id(),
            modmail_id: modmail_id.into(),
            sender_snowflake,
            content: content.into(),
            attachments,
            created_at: chrono::Utc::now().timestamp(),
            guild_snowflake,
        }
    }
}

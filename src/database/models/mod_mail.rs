//! Mod-mail ticket.

use serde::{Deserialize, Serialize};

use super::fresh_id;

/// Ticket status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModMailStatus {
    Open,
    Closed,
}

/// An open or archived mod-mail conversation between a user and the mod team.
///
/// Messages themselves are persisted separately as [`Transcript`] documents
/// keyed by this ticket's id.
///
/// [`Transcript`]: super::Transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModMail {
    /// Unique id, minted on construction. Every call site uses this same
    /// policy; tickets never derive their id from a document count.
    #[serde(rename = "_id")]
    pub id: String,

    /// User the ticket belongs to.
    #[serde(rename = "userSnowflake")]
    pub user_snowflake: i64,

    #[serde(rename = "guildSnowflake")]
    pub guild_snowflake: i64,

    /// Channel the ticket thread lives in.
    #[serde(rename = "channelSnowflake")]
    pub channel_snowflake: i64,

    pub status: ModMailStatus,
}

impl ModMail {
    pub fn new(user_snowflake: i64, guild_snowflake: i64, channel_snowflake: i64) -> Self {
        Self {
            id: fresh_id(),
            user_snowflake,
            guild_snowflake,
            channel_snowflake,
            status: ModMailStatus::Open,
        }
    }
}

//! Jail record for a temporarily restricted user.

use serde::{Deserialize, Serialize};

use super::fresh_id;

/// A user currently (or formerly) jailed in a guild.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Jail {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "userSnowflake")]
    pub user_snowflake: i64,

    #[serde(rename = "guildSnowflake")]
    pub guild_snowflake: i64,

    /// Channel created for the jailed user.
    #[serde(rename = "channelSnowflake")]
    pub channel_snowflake: i64,

    /// Reason given by the moderator.
    pub reason: String,

    /// Unix timestamp the user was jailed.
    #[serde(rename = "jailTime")]
    pub jail_time: i64,
}

impl Jail {
    pub fn new(
        user_snowflake: i64,
        guild_snowflake: i64,
        channel_snowflake: i64,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            id: fresh_id(),
            user_snowflake,
            guild_snowflake,
            channel_snowflake,
            reason: reason.into(),
            jail_time: chrono::Utc::now().timestamp(),
        }
    }
}

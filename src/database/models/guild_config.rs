//! Per-guild configuration entry.

use serde::{Deserialize, Serialize};

/// One configuration key/value pair for one guild.
///
/// The logical key is (guild, key). The store enforces no uniqueness on the
/// pair itself; [`ModStore::set_guild_config`] keeps at most one document per
/// pair by always writing through an atomic upsert.
///
/// [`ModStore::set_guild_config`]: crate::database::ModStore::set_guild_config
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuildConfig {
    /// Guild this entry belongs to.
    #[serde(rename = "guildSnowflake")]
    pub guild_snowflake: i64,

    /// Configuration key, e.g. `"prefix"`.
    #[serde(rename = "configKey")]
    pub config_key: String,

    /// Configuration value, stored as an opaque string.
    #[serde(rename = "configValue")]
    pub config_value: String,
}

impl GuildConfig {
    pub fn new(guild_snowflake: i64, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            guild_snowflake,
            config_key: key.into(),
            config_value: value.into(),
        }
    }
}

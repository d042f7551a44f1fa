//! Moderation record store.
//!
//! `ModStore` is the single data-access facade: one typed [`Repository`] per
//! collection, plus the derived guild-config view. The command layer and the
//! dashboard both go through it; neither touches collections directly.

use std::collections::HashMap;

use mongodb::bson::doc;

use super::models::{Blacklist, GuildConfig, Jail, ModMail, Transcript, UserNote};
use super::{Database, Repository};
use crate::error::StoreError;

/// Facade over every moderation collection.
#[derive(Debug)]
pub struct ModStore {
    guild_configs: Repository<GuildConfig>,
    user_notes: Repository<UserNote>,
    mod_mails: Repository<ModMail>,
    jails: Repository<Jail>,
    blacklist: Repository<Blacklist>,
    transcripts: Repository<Transcript>,
}

impl ModStore {
    pub fn new(db: &Database) -> Self {
        Self {
            guild_configs: Repository::new(db, "guild_configs"),
            user_notes: Repository::new(db, "user_notes"),
            mod_mails: Repository::new(db, "mod_mails"),
            jails: Repository::new(db, "jails"),
            blacklist: Repository::new(db, "blacklist"),
            transcripts: Repository::new(db, "transcripts"),
        }
    }

    // --- Guild configs ---

    /// All guild config entries, ungrouped.
    pub async fn guild_configs(&self) -> Result<Vec<GuildConfig>, StoreError> {
        self.guild_configs.find_all().await
    }

    /// Write a config entry, keeping at most one document per
    /// (guild, key) pair. The replace-or-insert is a single atomic store
    /// operation, so concurrent writers cannot duplicate a pair.
    pub async fn set_guild_config(&self, config: &GuildConfig) -> Result<(), StoreError> {
        let key = doc! {
            "guildSnowflake": config.guild_snowflake,
            "configKey": &config.config_key,
        };
        self.guild_configs.upsert_by_key(key, config).await
    }

    /// Derived two-level view: guild id -> config key -> value.
    ///
    /// Recomputed from a full fetch on every call; there is no cached copy
    /// to go stale. Cost is linear in the number of config documents, which
    /// stays small.
    pub async fn config_map(&self) -> Result<HashMap<u64, HashMap<String, String>>, StoreError> {
        let configs = self.guild_configs.find_all().await?;
        Ok(group_configs(configs))
    }

    // --- User notes ---

    /// Notes for one user in one guild.
    pub async fn user_notes(
        &self,
        guild_snowflake: i64,
        user_snowflake: i64,
    ) -> Result<Vec<UserNote>, StoreError> {
        let filter = doc! {
            "guildSnowflake": guild_snowflake,
            "userSnowflake": user_snowflake,
        };
        self.user_notes.find_by(filter).await
    }

    pub async fn add_user_note(&self, note: &UserNote) -> Result<(), StoreError> {
        self.user_notes.insert_one(note).await
    }

    /// Remove a note by id. Removing an unknown id is a no-op.
    pub async fn remove_user_note(&self, id: &str) -> Result<bool, StoreError> {
        self.user_notes.delete_by_id(id).await
    }

    // --- Mod mail ---

    pub async fn mod_mails(&self) -> Result<Vec<ModMail>, StoreError> {
        self.mod_mails.find_all().await
    }

    pub async fn add_mod_mail(&self, mail: &ModMail) -> Result<(), StoreError> {
        self.mod_mails.insert_one(mail).await
    }

    pub async fn remove_mod_mail(&self, id: &str) -> Result<bool, StoreError> {
        self.mod_mails.delete_by_id(id).await
    }

    // --- Jails ---

    pub async fn jails(&self) -> Result<Vec<Jail>, StoreError> {
        self.jails.find_all().await
    }

    pub async fn add_jail(&self, jail: &Jail) -> Result<(), StoreError> {
        self.jails.insert_one(jail).await
    }

    pub async fn remove_jail(&self, id: &str) -> Result<bool, StoreError> {
        self.jails.delete_by_id(id).await
    }

    // --- Blacklist ---

    pub async fn blacklist(&self) -> Result<Vec<Blacklist>, StoreError> {
        self.blacklist.find_all().await
    }

    pub async fn add_blacklist(&self, entry: &Blacklist) -> Result<(), StoreError> {
        self.blacklist.insert_one(entry).await
    }

    pub async fn remove_blacklist(&self, id: &str) -> Result<bool, StoreError> {
        self.blacklist.delete_by_id(id).await
    }

    /// Remove every blacklist entry for a user; returns how many were removed.
    pub async fn clear_blacklist(&self, user_snowflake: i64) -> Result<u64, StoreError> {
        self.blacklist
            .delete_by(doc! { "userSnowflake": user_snowflake })
            .await
    }

    // --- Transcripts ---

    pub async fn add_transcript(&self, transcript: &Transcript) -> Result<(), StoreError> {
        self.transcripts.insert_one(transcript).await
    }

    /// Archive a batch of transcript lines.
    ///
    /// Not atomic: see [`Repository::insert_many`].
    pub async fn add_transcripts(&self, transcripts: &[Transcript]) -> Result<(), StoreError> {
        self.transcripts.insert_many(transcripts).await
    }

    /// All archived lines for one mod-mail ticket.
    pub async fn transcripts_for(&self, modmail_id: &str) -> Result<Vec<Transcript>, StoreError> {
        self.transcripts
            .find_by(doc! { "modmailId": modmail_id })
            .await
    }
}

/// Group config entries into guild id -> key -> value.
///
/// Last write wins if the collection ever holds two documents for the same
/// (guild, key) pair, which the upsert path is supposed to prevent.
pub fn group_configs(configs: Vec<GuildConfig>) -> HashMap<u64, HashMap<String, String>> {
    let mut grouped: HashMap<u64, HashMap<String, String>> = HashMap::new();
    for config in configs {
        grouped
            .entry(config.guild_snowflake as u64)
            .or_default()
            .insert(config.config_key, config.config_value);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(guild: i64, key: &str, value: &str) -> GuildConfig {
        GuildConfig::new(guild, key, value)
    }

    #[test]
    fn groups_by_guild_then_key() {
        let configs = vec![
            cfg(1, "prefix", "!"),
            cfg(2, "locale", "de"),
            cfg(1, "locale", "en"),
            cfg(2, "prefix", "?"),
        ];

        let map = group_configs(configs);

        assert_eq!(map.len(), 2);
        assert_eq!(map[&1]["prefix"], "!");
        assert_eq!(map[&1]["locale"], "en");
        assert_eq!(map[&2]["prefix"], "?");
        assert_eq!(map[&2]["locale"], "de");
    }

    #[test]
    fn grouping_is_insertion_order_independent() {
        let forward = vec![cfg(1, "prefix", "!"), cfg(2, "prefix", "?")];
        let reversed: Vec<_> = forward.iter().rev().cloned().collect();

        assert_eq!(group_configs(forward), group_configs(reversed));
    }

    #[test]
    fn duplicate_pair_takes_last_value() {
        let configs = vec![cfg(7, "prefix", "!"), cfg(7, "prefix", "$")];

        let map = group_configs(configs);

        assert_eq!(map[&7]["prefix"], "$");
        assert_eq!(map[&7].len(), 1);
    }

    #[test]
    fn empty_input_yields_empty_map() {
        assert!(group_configs(Vec::new()).is_empty());
    }
}

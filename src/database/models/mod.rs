//! Persisted entity types.
//!
//! Field names follow the collection schemas the dashboard and bot already
//! read, hence the camelCase serde renames.

mod blacklist;
mod guild_config;
mod jail;
mod mod_mail;
mod transcript;
mod user_note;

pub use blacklist::Blacklist;
pub use guild_config::GuildConfig;
pub use jail::Jail;
pub use mod_mail::{ModMail, ModMailStatus};
pub use transcript::Transcript;
pub use user_note::UserNote;

use mongodb::bson::oid::ObjectId;

/// Generate a fresh unique document id.
///
/// Ids are ObjectId hex strings minted at construction time, so concurrent
/// writers can never collide the way a count-then-insert scheme would.
pub(crate) fn fresh_id() -> String {
    ObjectId::new().to_hex()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::fresh_id;

    #[test]
    fn concurrent_ids_are_distinct() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| (0..64).map(|_| fresh_id()).collect::<Vec<_>>()))
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "duplicate id generated");
            }
        }
        assert_eq!(seen.len(), 8 * 64);
    }
}

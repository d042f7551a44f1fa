//! Blacklist entry.

use serde::{Deserialize, Serialize};

use super::fresh_id;

/// A user barred from opening mod-mail tickets.
///
/// A user can accumulate several entries; clearing a user removes all of
/// them in one bulk delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blacklist {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "userSnowflake")]
    pub user_snowflake: i64,
}

impl Blacklist {
    pub fn new(user_snowflake: i64) -> Self {
        Self {
            id: fresh_id(),
            user_snowflake,
        }
    }
}

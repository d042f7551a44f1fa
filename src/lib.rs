//! Warden - persistence and directory-cache core for a community
//! moderation bot.
//!
//! ## Architecture
//!
//! - `config` - Environment configuration
//! - `database` - MongoDB integration: connection, generic repositories,
//!   the moderation record store and the derived guild-config view
//! - `directory` - Read-through cache over the external directory API
//! - `api` - Dashboard lookup endpoints (axum)
//! - `error` - Error taxonomy shared by the layers above
//!
//! The bot's command layer and gateway connection consume this crate as a
//! library; the binary serves the dashboard API.

pub mod api;
pub mod config;
pub mod database;
pub mod directory;
pub mod error;

//! Directory lookups - read-through cache over the external directory API.
//!
//! The cache sits in front of the client: endpoints ask the cache, the cache
//! asks the client on a miss. Records are cached for the process lifetime.

mod cache;
mod client;

pub use cache::DirectoryCache;
pub use client::DirectoryClient;

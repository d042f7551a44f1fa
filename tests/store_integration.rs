//! Integration tests against a live MongoDB.
//!
//! Run with `MONGODB_URI=... cargo test -- --ignored`. Each test uses its own
//! database and drops it up front, so reruns start clean.

use std::collections::HashSet;
use std::sync::Arc;

use warden::database::{Database, GuildConfig, ModStore, UserNote};

async fn fresh_store(db_name: &str) -> ModStore {
    let uri =
        std::env::var("MONGODB_URI").expect("MONGODB_URI must be set for integration tests");
    let db = Database::connect(&uri, db_name).await.expect("connect");
    db.db().drop().await.expect("drop test database");
    ModStore::new(&db)
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn guild_config_round_trips_through_the_aggregated_view() {
    let store = fresh_store("warden_test_roundtrip").await;

    store
        .set_guild_config(&GuildConfig::new(1, "prefix", "!"))
        .await
        .unwrap();
    store
        .set_guild_config(&GuildConfig::new(1, "locale", "en"))
        .await
        .unwrap();
    store
        .set_guild_config(&GuildConfig::new(2, "prefix", "?"))
        .await
        .unwrap();

    let map = store.config_map().await.unwrap();

    assert_eq!(map[&1]["prefix"], "!");
    assert_eq!(map[&1]["locale"], "en");
    assert_eq!(map[&2]["prefix"], "?");
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn upserting_the_same_config_twice_leaves_one_document() {
    let store = fresh_store("warden_test_upsert").await;

    let config = GuildConfig::new(5, "prefix", "!");
    store.set_guild_config(&config).await.unwrap();
    store.set_guild_config(&config).await.unwrap();

    let matching: Vec<_> = store
        .guild_configs()
        .await
        .unwrap()
        .into_iter()
        .filter(|c| c.guild_snowflake == 5 && c.config_key == "prefix")
        .collect();

    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].config_value, "!");
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn deleting_a_note_by_id_removes_exactly_that_note() {
    let store = fresh_store("warden_test_delete").await;

    let notes: Vec<_> = (0..3)
        .map(|i| UserNote::new(10, 20, 99, format!("note {i}")))
        .collect();
    for note in &notes {
        store.add_user_note(note).await.unwrap();
    }

    let removed = store.remove_user_note(&notes[1].id).await.unwrap();
    assert!(removed);

    let remaining = store.user_notes(10, 20).await.unwrap();
    let ids: HashSet<_> = remaining.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(remaining.len(), 2);
    assert!(ids.contains(notes[0].id.as_str()));
    assert!(ids.contains(notes[2].id.as_str()));

    // Deleting an unknown id is a no-op, not an error.
    let removed = store.remove_user_note("no-such-id").await.unwrap();
    assert!(!removed);
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn concurrent_note_insertions_get_distinct_ids() {
    let store = Arc::new(fresh_store("warden_test_concurrent").await);
    let n = 16;

    let mut handles = Vec::new();
    for i in 0..n {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            let note = UserNote::new(30, 40, 99, format!("concurrent {i}"));
            store.add_user_note(&note).await.unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let notes = store.user_notes(30, 40).await.unwrap();
    let ids: HashSet<_> = notes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(notes.len(), n);
    assert_eq!(ids.len(), n, "ids must be distinct under concurrency");
}

//! Dashboard lookup endpoints.
//!
//! Four endpoints share one read-through path: they differ only in the cache
//! key and the fetch the cache runs on a miss. Successful object responses
//! carry a `cached` boolean telling the dashboard whether the record came
//! from memory.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;

use super::error::ApiError;
use crate::directory::{DirectoryCache, DirectoryClient};

/// Cache key for the bot's own profile.
const SELF_KEY: &str = "@me";

/// Shared state for the lookup endpoints.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<DirectoryCache>,
    pub client: Arc<DirectoryClient>,
}

/// Build the dashboard router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/me", get(get_me))
        .route("/user", get(get_user))
        .route("/user/:id", get(get_user))
        .route("/guild", get(get_guild))
        .route("/guild/:id", get(get_guild))
        .route("/guilds", get(get_guilds))
        .with_state(state)
}

async fn get_me(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let client = state.client.clone();
    let (record, cached) = state
        .cache
        .get_or_fetch(SELF_KEY, || async move { client.get_self().await })
        .await?;
    Ok(Json(with_cached_flag(record, cached)))
}

async fn get_user(
    State(state): State<AppState>,
    id: Option<Path<String>>,
) -> Result<Json<Value>, ApiError> {
    let Some(Path(id)) = id else {
        return Err(ApiError::not_found("Could not find that user"));
    };

    let client = state.client.clone();
    let fetch_id = id.clone();
    let (record, cached) = state
        .cache
        .get_or_fetch(&id, || async move { client.get_user(&fetch_id).await })
        .await?;
    Ok(Json(with_cached_flag(record, cached)))
}

async fn get_guild(
    State(state): State<AppState>,
    id: Option<Path<String>>,
) -> Result<Json<Value>, ApiError> {
    let Some(Path(id)) = id else {
        return Err(ApiError::not_found("Could not find that guild"));
    };

    let client = state.client.clone();
    let fetch_id = id.clone();
    let (record, cached) = state
        .cache
        .get_or_fetch(&id, || async move {
            client.get_guild_preview(&fetch_id).await
        })
        .await?;
    Ok(Json(with_cached_flag(record, cached)))
}

async fn get_guilds(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    // The guild list is cached per caller, keyed off the caller's own id.
    let client = state.client.clone();
    let (me, _) = state
        .cache
        .get_or_fetch(SELF_KEY, || async move { client.get_self().await })
        .await?;

    let self_id = me.get("id").and_then(Value::as_str).unwrap_or_default();
    let key = format!("{self_id}guilds");

    let client = state.client.clone();
    let (record, cached) = state
        .cache
        .get_or_fetch(&key, || async move { client.get_self_guilds().await })
        .await?;
    Ok(Json(with_cached_flag(record, cached)))
}

/// Add the `cached` flag to object payloads.
///
/// Array payloads (the guild list) are returned untouched; an array has no
/// place to carry the flag.
fn with_cached_flag(mut record: Value, cached: bool) -> Value {
    if let Value::Object(map) = &mut record {
        map.insert("cached".to_string(), Value::Bool(cached));
    }
    record
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;
    use url::Url;

    use super::*;

    /// State whose client points at an unroutable address, so any fetch that
    /// does run fails loudly instead of succeeding silently.
    fn dead_end_state() -> AppState {
        let base = Url::parse("http://127.0.0.1:1/api").unwrap();
        AppState {
            cache: Arc::new(DirectoryCache::new()),
            client: Arc::new(DirectoryClient::new(base, "test-token")),
        }
    }

    #[tokio::test]
    async fn user_lookup_without_id_is_404_and_skips_the_client() {
        let state = dead_end_state();

        let err = get_user(State(state.clone()), None).await.unwrap_err();

        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Could not find that user");
        // The guard returned before the read-through path ran.
        assert!(state.cache.is_empty());
    }

    #[tokio::test]
    async fn guild_lookup_without_id_is_404() {
        let state = dead_end_state();

        let err = get_guild(State(state.clone()), None).await.unwrap_err();

        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Could not find that guild");
        assert!(state.cache.is_empty());
    }

    #[tokio::test]
    async fn upstream_failure_maps_to_generic_500() {
        let state = dead_end_state();

        let err = get_user(State(state), Some(Path("42".to_string())))
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "An error occurred, try again later!");
    }

    #[test]
    fn cached_flag_lands_on_objects_only() {
        let object = with_cached_flag(json!({ "id": "1" }), true);
        assert_eq!(object["cached"], true);

        let array = with_cached_flag(json!([{ "id": "1" }]), false);
        assert_eq!(array, json!([{ "id": "1" }]));
    }
}

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use super::SharedStore;
use super::error::ApiError;
use crate::error::Result;
use crate::types::{NewWord, RescoreEntry, RescoreReport, Word, WordId, WordPatch};
use crate::vocab::VocabStore;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub words: usize,
}

/// Runs a store call on the blocking pool; locking and file writes stay off the
/// async workers.
async fn with_store<T, F>(store: SharedStore, op: F) -> std::result::Result<T, ApiError>
where
    F: FnOnce(&VocabStore) -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    let result = tokio::task::spawn_blocking(move || op(&store)).await?;
    Ok(result?)
}

pub async fn list_words(
    State(store): State<SharedStore>,
) -> std::result::Result<Json<Vec<Word>>, ApiError> {
    let words = with_store(store, |store| Ok(store.list())).await?;
    Ok(Json(words))
}

pub async fn get_word(
    State(store): State<SharedStore>,
    Path(id): Path<WordId>,
) -> std::result::Result<Json<Word>, ApiError> {
    let word = with_store(store, move |store| store.get(id)).await?;
    Ok(Json(word))
}

pub async fn add_word(
    State(store): State<SharedStore>,
    Json(word): Json<NewWord>,
) -> std::result::Result<(StatusCode, Json<Vec<Word>>), ApiError> {
    let words = with_store(store, move |store| store.add(word)).await?;
    Ok((StatusCode::CREATED, Json(words)))
}

pub async fn update_word(
    State(store): State<SharedStore>,
    Path(id): Path<WordId>,
    Json(patch): Json<WordPatch>,
) -> std::result::Result<(StatusCode, Json<Vec<Word>>), ApiError> {
    let words = with_store(store, move |store| store.update(id, &patch)).await?;
    Ok((StatusCode::CREATED, Json(words)))
}

pub async fn remove_word(
    State(store): State<SharedStore>,
    Path(id): Path<WordId>,
    Json(expected): Json<Word>,
) -> std::result::Result<Json<Vec<Word>>, ApiError> {
    let words = with_store(store, move |store| store.remove(id, &expected)).await?;
    Ok(Json(words))
}

pub async fn rescore_words(
    State(store): State<SharedStore>,
    Json(entries): Json<Vec<RescoreEntry>>,
) -> std::result::Result<Json<RescoreReport>, ApiError> {
    let report = with_store(store, move |store| store.rescore(&entries)).await?;
    Ok(Json(report))
}

pub async fn health(
    State(store): State<SharedStore>,
) -> std::result::Result<Json<HealthResponse>, ApiError> {
    let words = with_store(store, |store| Ok(store.len())).await?;
    Ok(Json(HealthResponse {
        status: "ok".to_owned(),
        words,
    }))
}

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    models::{ListParams, ProductPayload, SearchParams},
    AppState,
};

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let store = state.store.read().await;

    let filtered: Vec<_> = store
        .all()
        .iter()
        .filter(|p| params.category.as_deref().map_or(true, |c| p.category == c))
        .collect();

    let total = filtered.len();
    let page = params.page();
    let limit = params.limit(total);

    // Slice bounds clamp to the filtered length, so an out-of-range page
    // yields empty data with the true total.
    let start = (page - 1).saturating_mul(limit).min(total);
    let end = page.saturating_mul(limit).min(total);
    let data = &filtered[start..end];

    info!(total, page, limit, "Listed products");

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "total": total,
            "page": page,
            "limit": limit,
            "data": data,
        })),
    ))
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let store = state.store.read().await;
    let product = store.find(&id).ok_or(AppError::NotFound)?;

    Ok((StatusCode::OK, Json(serde_json::json!(product))))
}

// ── Create ────────────────────────────────────────────────────────────────────

/// Body already passed the validation stage; the extractor re-reads the same
/// bytes.
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductPayload>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let product = payload.into_new_product();

    let mut store = state.store.write().await;
    store.insert(product.clone());

    info!(id = %product.id, name = %product.name, "Created product");

    Ok((StatusCode::CREATED, Json(serde_json::json!(product))))
}

// ── Update ────────────────────────────────────────────────────────────────────

/// Full replacement: the stored record becomes the five payload fields under
/// the URL id. Extra body fields were already dropped at deserialization.
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ProductPayload>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let mut store = state.store.write().await;
    let index = store.position(&id).ok_or(AppError::NotFound)?;
    let product = store.replace(index, payload.into_product(id)).clone();

    info!(id = %product.id, name = %product.name, "Updated product");

    Ok((StatusCode::OK, Json(serde_json::json!(product))))
}

// ── Delete ────────────────────────────────────────────────────────────────────

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let mut store = state.store.write().await;
    let index = store.position(&id).ok_or(AppError::NotFound)?;
    let removed = store.remove(index);

    info!(id = %removed.id, name = %removed.name, "Deleted product");

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "message": "Product deleted",
            "deleted": [removed],
        })),
    ))
}

// ── Search ────────────────────────────────────────────────────────────────────

pub async fn search_products(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let store = state.store.read().await;
    let hits = store.search(params.name.as_deref().unwrap_or(""));

    info!(count = hits.len(), "Searched products");

    Ok((StatusCode::OK, Json(serde_json::json!(hits))))
}

// ── Stats ─────────────────────────────────────────────────────────────────────

pub async fn category_stats(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let store = state.store.read().await;
    let stats = store.stats();

    Ok((StatusCode::OK, Json(serde_json::json!(stats))))
}

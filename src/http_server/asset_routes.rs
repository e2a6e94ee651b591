//! Asset HTTP Routes
//!
//! CRUD endpoints for the asset inventory. Each handler maps one request onto
//! one repository call.

use std::sync::Arc;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use super::errors::RestResult;
use crate::asset::{Asset, AssetFilter, AssetPayload};
use crate::repository::AssetRepository;

// ==================
// Shared State
// ==================

/// Asset state shared across handlers
pub struct AssetsState {
    pub repository: AssetRepository,
}

impl AssetsState {
    pub fn new(repository: AssetRepository) -> Self {
        Self { repository }
    }
}

// ==================
// Asset Routes
// ==================

/// Create asset routes
pub fn asset_routes(state: Arc<AssetsState>) -> Router {
    Router::new()
        .route("/assets", get(list_assets_handler).post(create_asset_handler))
        .route(
            "/assets/:id",
            get(get_asset_handler)
                .put(update_asset_handler)
                .delete(delete_asset_handler),
        )
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn list_assets_handler(
    State(state): State<Arc<AssetsState>>,
    filter: Result<Query<AssetFilter>, QueryRejection>,
) -> RestResult<Json<Vec<Asset>>> {
    let Query(filter) = filter?;
    let assets = state.repository.list(&filter).await?;
    Ok(Json(assets))
}

async fn get_asset_handler(
    State(state): State<Arc<AssetsState>>,
    id: Result<Path<i64>, PathRejection>,
) -> RestResult<Json<Asset>> {
    let Path(id) = id?;
    let asset = state.repository.get(id).await?;
    Ok(Json(asset))
}

async fn create_asset_handler(
    State(state): State<Arc<AssetsState>>,
    body: Result<Json<AssetPayload>, JsonRejection>,
) -> RestResult<Json<Asset>> {
    let Json(payload) = body?;
    let new_asset = payload.validate()?;

    let created = state.repository.create(&new_asset).await?;
    tracing::info!(id = created.id, "asset created");

    Ok(Json(created))
}

async fn update_asset_handler(
    State(state): State<Arc<AssetsState>>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<AssetPayload>, JsonRejection>,
) -> RestResult<Json<Asset>> {
    let Path(id) = id?;
    let Json(payload) = body?;
    let new_asset = payload.validate()?;

    let saved = state.repository.save(id, &new_asset).await?;
    tracing::info!(id, "asset saved");

    Ok(Json(saved))
}

async fn delete_asset_handler(
    State(state): State<Arc<AssetsState>>,
    id: Result<Path<i64>, PathRejection>,
) -> RestResult<StatusCode> {
    let Path(id) = id?;
    state.repository.delete(id).await?;
    tracing::info!(id, "asset deleted");

    Ok(StatusCode::OK)
}

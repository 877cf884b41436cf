//! Category Handlers

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use crate::auth::{OperatorAuth, StoreAuth};
use crate::core::ServerState;
use crate::db::models::{Category, CategoryCreate, CategoryUpdate};
use crate::db::repository::{CategoryRepository, MenuItemRepository};
use crate::utils::respond::ok;
use shared::{ApiResponse, AppError, ErrorCode};

#[derive(Debug, Deserialize)]
pub struct ListCategoriesQuery {
    #[serde(default)]
    pub include_inactive: bool,
}

pub async fn list(
    State(state): State<ServerState>,
    StoreAuth(store_id): StoreAuth,
    Query(query): Query<ListCategoriesQuery>,
) -> Result<Json<ApiResponse<Vec<Category>>>, AppError> {
    let repo = CategoryRepository::new(state.get_db());
    let categories = repo.find_all(&store_id, query.include_inactive).await?;
    Ok(ok(categories))
}

pub async fn get(
    State(state): State<ServerState>,
    StoreAuth(store_id): StoreAuth,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Category>>, AppError> {
    let repo = CategoryRepository::new(state.get_db());
    let category = repo
        .find_by_id(&store_id, &id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::CategoryNotFound))?;
    Ok(ok(category))
}

pub async fn create(
    State(state): State<ServerState>,
    OperatorAuth(operator): OperatorAuth,
    Json(req): Json<CategoryCreate>,
) -> Result<Json<ApiResponse<Category>>, AppError> {
    if req.name.trim().is_empty() {
        return Err(AppError::required_field("name"));
    }
    let repo = CategoryRepository::new(state.get_db());
    let created = repo.create(&operator.store, req).await?;
    Ok(ok(created))
}

pub async fn update(
    State(state): State<ServerState>,
    OperatorAuth(operator): OperatorAuth,
    Path(id): Path<String>,
    Json(req): Json<CategoryUpdate>,
) -> Result<Json<ApiResponse<Category>>, AppError> {
    let repo = CategoryRepository::new(state.get_db());
    let updated = repo.update(&operator.store, &id, req).await?;
    Ok(ok(updated))
}

/// Soft-delete a category
///
/// Refused while any active menu item still references it.
pub async fn deactivate(
    State(state): State<ServerState>,
    OperatorAuth(operator): OperatorAuth,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Category>>, AppError> {
    let items = MenuItemRepository::new(state.get_db());
    let active_items = items.count_active_in_category(&operator.store, &id).await?;
    if active_items > 0 {
        return Err(AppError::new(ErrorCode::CategoryHasItems));
    }

    let repo = CategoryRepository::new(state.get_db());
    let deactivated = repo.deactivate(&operator.store, &id).await?;
    Ok(ok(deactivated))
}

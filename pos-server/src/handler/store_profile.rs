//! Store Profile Handlers

use axum::Json;
use axum::extract::State;

use crate::auth::{OperatorAuth, StoreAuth};
use crate::core::ServerState;
use crate::db::models::{StoreProfile, StoreProfileUpsert};
use crate::db::repository::StoreProfileRepository;
use crate::utils::respond::ok;
use shared::{ApiResponse, AppError, ErrorCode};

pub async fn get(
    State(state): State<ServerState>,
    StoreAuth(store_id): StoreAuth,
) -> Result<Json<ApiResponse<StoreProfile>>, AppError> {
    let repo = StoreProfileRepository::new(state.get_db());
    let profile = repo
        .get(&store_id)
        .await?
        .ok_or_else(|| AppError::with_message(ErrorCode::NotFound, "Store profile not set"))?;
    Ok(ok(profile))
}

pub async fn upsert(
    State(state): State<ServerState>,
    OperatorAuth(operator): OperatorAuth,
    Json(req): Json<StoreProfileUpsert>,
) -> Result<Json<ApiResponse<StoreProfile>>, AppError> {
    if req.name.trim().is_empty() {
        return Err(AppError::required_field("name"));
    }
    if req.tax_rate.is_sign_negative() {
        return Err(AppError::validation("Tax rate cannot be negative"));
    }

    let repo = StoreProfileRepository::new(state.get_db());
    let profile = repo.upsert(&operator.store, req).await?;
    Ok(ok(profile))
}

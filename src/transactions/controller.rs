use axum::{extract::State, Json};

use crate::{
    app::{
        models::api_error::ApiError,
        structs::{json_from_request::JsonFromRequest, path_from_request::PathFromRequest},
    },
    AppState,
};

use super::{
    dtos::transaction_base::TransactionBase, models::transaction::TransactionModel, service,
};

pub async fn create_transaction(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<TransactionBase>,
) -> Result<Json<TransactionModel>, ApiError> {
    match service::create_transaction(&dto, &state.pool).await {
        Ok(transaction) => Ok(Json(transaction)),
        Err(e) => Err(e),
    }
}

pub async fn get_transactions(
    State(state): State<AppState>,
) -> Result<Json<Vec<TransactionModel>>, ApiError> {
    match service::get_transactions(&state.pool).await {
        Ok(transactions) => Ok(Json(transactions)),
        Err(e) => Err(e),
    }
}

pub async fn get_transaction_by_id(
    State(state): State<AppState>,
    PathFromRequest(id): PathFromRequest<i64>,
) -> Result<Json<TransactionModel>, ApiError> {
    match service::get_transaction_by_id(id, &state.pool).await {
        Ok(transaction) => Ok(Json(transaction)),
        Err(e) => Err(e),
    }
}

pub async fn edit_transaction_by_id(
    State(state): State<AppState>,
    PathFromRequest(id): PathFromRequest<i64>,
    JsonFromRequest(dto): JsonFromRequest<TransactionBase>,
) -> Result<Json<TransactionModel>, ApiError> {
    match service::edit_transaction_by_id(id, &dto, &state.pool).await {
        Ok(transaction) => Ok(Json(transaction)),
        Err(e) => Err(e),
    }
}

pub async fn delete_transaction_by_id(
    State(state): State<AppState>,
    PathFromRequest(id): PathFromRequest<i64>,
) -> Result<(), ApiError> {
    service::delete_transaction_by_id(id, &state.pool).await
}

use sqlx::SqlitePool;

use crate::app::{errors::DefaultApiError, models::api_error::ApiError};

use super::{
    dtos::transaction_base::TransactionBase, errors::TransactionsApiError,
    models::transaction::TransactionModel,
};

pub async fn create_transaction(
    dto: &TransactionBase,
    pool: &SqlitePool,
) -> Result<TransactionModel, ApiError> {
    let sqlx_result = sqlx::query(
        "
        INSERT INTO transactions (
            amount, category, description, is_income, date
        )
        VALUES (?, ?, ?, ?, ?)
        ",
    )
    .bind(dto.amount)
    .bind(&dto.category)
    .bind(&dto.description)
    .bind(dto.is_income)
    .bind(&dto.date)
    .execute(pool)
    .await;

    match sqlx_result {
        Ok(result) => {
            let transaction = TransactionModel::new(result.last_insert_rowid(), dto);
            tracing::debug!(id = transaction.id, "created transaction");
            Ok(transaction)
        }
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn get_transactions(pool: &SqlitePool) -> Result<Vec<TransactionModel>, ApiError> {
    let sqlx_result = sqlx::query_as::<_, TransactionModel>(
        "
        SELECT * FROM transactions
        ORDER BY id ASC
        ",
    )
    .fetch_all(pool)
    .await;

    match sqlx_result {
        Ok(transactions) => Ok(transactions),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn get_transaction_by_id(
    id: i64,
    pool: &SqlitePool,
) -> Result<TransactionModel, ApiError> {
    let sqlx_result = sqlx::query_as::<_, TransactionModel>(
        "
        SELECT * FROM transactions
        WHERE id = ?
        ",
    )
    .bind(id)
    .fetch_optional(pool)
    .await;

    match sqlx_result {
        Ok(transaction) => match transaction {
            Some(transaction) => Ok(transaction),
            None => Err(TransactionsApiError::TransactionNotFound.value()),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

/// Replaces every field of the stored transaction.
pub async fn edit_transaction_by_id(
    id: i64,
    dto: &TransactionBase,
    pool: &SqlitePool,
) -> Result<TransactionModel, ApiError> {
    let sqlx_result = sqlx::query(
        "
        UPDATE transactions
        SET amount = ?, category = ?, description = ?, is_income = ?, date = ?
        WHERE id = ?
        ",
    )
    .bind(dto.amount)
    .bind(&dto.category)
    .bind(&dto.description)
    .bind(dto.is_income)
    .bind(&dto.date)
    .bind(id)
    .execute(pool)
    .await;

    match sqlx_result {
        Ok(result) => match result.rows_affected() > 0 {
            true => Ok(TransactionModel::new(id, dto)),
            false => Err(TransactionsApiError::TransactionNotFound.value()),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn delete_transaction_by_id(id: i64, pool: &SqlitePool) -> Result<(), ApiError> {
    let sqlx_result = sqlx::query(
        "
        DELETE FROM transactions
        WHERE id = ?
        ",
    )
    .bind(id)
    .execute(pool)
    .await;

    match sqlx_result {
        Ok(result) => match result.rows_affected() > 0 {
            true => Ok(()),
            false => Err(TransactionsApiError::TransactionNotFound.value()),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

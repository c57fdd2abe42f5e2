use std::{str::FromStr, time::Duration};

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};

use super::env::Envy;

pub async fn connect(envy: &Envy) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&envy.database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(envy.database_max_connections)
        .idle_timeout(Some(Duration::from_secs(60)))
        .connect_with(options)
        .await
}

pub async fn create_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "
        CREATE TABLE IF NOT EXISTS transactions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            amount REAL NOT NULL,
            category TEXT NOT NULL,
            description TEXT NOT NULL,
            is_income BOOLEAN NOT NULL,
            date TEXT NOT NULL
        )
        ",
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS transactions_id_idx ON transactions (id)")
        .execute(pool)
        .await?;

    Ok(())
}

/// Single-connection in-memory pool; every new connection to `sqlite::memory:`
/// would open a separate empty database.
#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    create_schema(&pool).await.unwrap();

    pool
}

#[cfg(test)]
mod tests {
    use super::{create_schema, test_pool};

    #[tokio::test]
    async fn schema_creation_is_idempotent() {
        let pool = test_pool().await;

        create_schema(&pool).await.unwrap();

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM transactions")
            .fetch_one(&pool)
            .await
            .unwrap();

        assert_eq!(count.0, 0);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let pool = test_pool().await;
        let insert = "INSERT INTO transactions (amount, category, description, is_income, date)
            VALUES (1.0, 'a', '', 0, '2024-01-01') RETURNING id";

        let first: (i64,) = sqlx::query_as(insert).fetch_one(&pool).await.unwrap();
        sqlx::query("DELETE FROM transactions WHERE id = ?")
            .bind(first.0)
            .execute(&pool)
            .await
            .unwrap();
        let second: (i64,) = sqlx::query_as(insert).fetch_one(&pool).await.unwrap();

        assert!(second.0 > first.0);
    }
}

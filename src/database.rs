// src/database.rs
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::config::Config;

const CREATE_PRODUCTS: &str = "CREATE TABLE IF NOT EXISTS products (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT    NOT NULL,
    description TEXT    NOT NULL,
    price       REAL    NOT NULL,
    image_url   TEXT    NOT NULL
)";

// No foreign key on product_id: cart items may name any product id.
const CREATE_CART_ITEMS: &str = "CREATE TABLE IF NOT EXISTS cart_items (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    product_id INTEGER NOT NULL,
    quantity   INTEGER NOT NULL
)";

/// Opens (creating if absent) the SQLite file named by `DATABASE_URL`
/// and makes sure both tables exist.
pub async fn create_pool(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    init_schema(&pool).await?;
    Ok(pool)
}

pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_PRODUCTS).execute(pool).await?;
    sqlx::query(CREATE_CART_ITEMS).execute(pool).await?;
    tracing::debug!("Database schema ready");
    Ok(())
}

/// Single-connection in-memory database; every `:memory:` connection is
/// its own database, so the pool must never open a second one.
#[cfg(test)]
pub async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None::<std::time::Duration>)
        .max_lifetime(None::<std::time::Duration>)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory database");
    init_schema(&pool).await.expect("schema");
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn schema_init_is_idempotent() {
        let pool = memory_pool().await;
        init_schema(&pool).await.unwrap();

        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('products', 'cart_items') ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();
        assert_eq!(tables, vec!["cart_items".to_string(), "products".to_string()]);
    }

    #[tokio::test]
    async fn cart_items_accept_dangling_product_ids() {
        let pool = memory_pool().await;
        let result = sqlx::query("INSERT INTO cart_items (product_id, quantity) VALUES (424242, 1)")
            .execute(&pool)
            .await
            .unwrap();
        assert_eq!(result.rows_affected(), 1);
    }
}

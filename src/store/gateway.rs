//! Data access gateway.
//!
//! Thin, rule-free wrapper over an `AnyPool`. Every statement is
//! parameterized with `?` placeholders, which both MySQL and SQLite accept.
//! Keys arrive as text exactly as the caller sent them; the store coerces
//! them against the integer columns.

use serde::Serialize;
use sqlx::any::{AnyPoolOptions, AnyQueryResult};
use sqlx::AnyPool;

use crate::config::DatabaseConfig;
use crate::store::models::{Category, Product};

/// Store-generated metadata for an INSERT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertMetadata {
    pub affected_rows: u64,
    pub insert_id: Option<i64>,
}

impl From<AnyQueryResult> for InsertMetadata {
    fn from(result: AnyQueryResult) -> Self {
        Self {
            affected_rows: result.rows_affected(),
            insert_id: result.last_insert_id(),
        }
    }
}

/// Shared handle to the relational store.
#[derive(Clone, Debug)]
pub struct Gateway {
    pool: AnyPool,
}

impl Gateway {
    /// Open the pool. Fails if the first connection cannot be established.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        sqlx::any::install_default_drivers();

        let pool = AnyPoolOptions::new()
            .max_connections(config.max_connections)
            // An in-memory SQLite database lives only as long as its connection.
            .idle_timeout(None)
            .max_lifetime(None)
            .connect(&config.url)
            .await?;

        tracing::info!(
            max_connections = config.max_connections,
            "Database connection established"
        );

        Ok(Self { pool })
    }

    /// Get the underlying pool reference.
    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    // --- categoria ---

    pub async fn list_categories(&self) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>("SELECT id, nombre FROM categoria")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn categories_by_id(&self, key: &str) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>("SELECT id, nombre FROM categoria WHERE id = ?")
            .bind(key.to_owned())
            .fetch_all(&self.pool)
            .await
    }

    pub async fn category_ids_named(&self, name: &str) -> Result<Vec<i64>, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT id FROM categoria WHERE nombre = ?")
            .bind(name.to_owned())
            .fetch_all(&self.pool)
            .await
    }

    /// Categories named `name` whose id differs from `key`.
    pub async fn categories_named_except(
        &self,
        name: &str,
        key: &str,
    ) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>(
            "SELECT id, nombre FROM categoria WHERE nombre = ? AND id <> ?",
        )
        .bind(name.to_owned())
        .bind(key.to_owned())
        .fetch_all(&self.pool)
        .await
    }

    pub async fn insert_category(&self, name: &str) -> Result<InsertMetadata, sqlx::Error> {
        let result = sqlx::query("INSERT INTO categoria (nombre) VALUES (?)")
            .bind(name.to_owned())
            .execute(&self.pool)
            .await?;
        Ok(result.into())
    }

    /// Returns the number of affected rows.
    pub async fn rename_category(&self, key: &str, name: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE categoria SET nombre = ? WHERE id = ?")
            .bind(name.to_owned())
            .bind(key.to_owned())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Returns the number of affected rows.
    pub async fn delete_category(&self, key: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categoria WHERE id = ?")
            .bind(key.to_owned())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    // --- producto ---

    /// Ids of products referencing the category; reads no other column.
    pub async fn product_ids_in_category(&self, key: &str) -> Result<Vec<i64>, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT id FROM producto WHERE categoria_id = ?")
            .bind(key.to_owned())
            .fetch_all(&self.pool)
            .await
    }

    pub async fn products_in_category(&self, key: &str) -> Result<Vec<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            "SELECT id, nombre, descripcion, categoria_id FROM producto WHERE categoria_id = ?",
        )
        .bind(key.to_owned())
        .fetch_all(&self.pool)
        .await
    }

    pub async fn product_ids_named(&self, name: &str) -> Result<Vec<i64>, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT id FROM producto WHERE nombre = ?")
            .bind(name.to_owned())
            .fetch_all(&self.pool)
            .await
    }

    pub async fn insert_product(
        &self,
        name: &str,
        description: &str,
        category_key: &str,
    ) -> Result<InsertMetadata, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO producto (nombre, descripcion, categoria_id) VALUES (?, ?, ?)",
        )
        .bind(name.to_owned())
        .bind(description.to_owned())
        .bind(category_key.to_owned())
        .execute(&self.pool)
        .await?;
        Ok(result.into())
    }
}

//! Table bootstrap.
//!
//! Creates the two tables when they are missing. There is no versioning and
//! no alteration of existing tables. The `nombre` columns carry UNIQUE
//! indexes so concurrent creates that both pass the application-level check
//! cannot both commit.

use crate::store::Gateway;

/// SQL dialect, derived from the connection URL scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    MySql,
    Sqlite,
}

impl Dialect {
    pub fn from_url(url: &str) -> Option<Self> {
        if url.starts_with("mysql:") {
            Some(Dialect::MySql)
        } else if url.starts_with("sqlite:") {
            Some(Dialect::Sqlite)
        } else {
            None
        }
    }

    fn statements(self) -> &'static [&'static str] {
        match self {
            Dialect::MySql => &[
                "CREATE TABLE IF NOT EXISTS categoria (
                    id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
                    nombre VARCHAR(255) NOT NULL,
                    UNIQUE KEY uq_categoria_nombre (nombre)
                )",
                "CREATE TABLE IF NOT EXISTS producto (
                    id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
                    nombre VARCHAR(255) NOT NULL,
                    descripcion TEXT NOT NULL,
                    categoria_id BIGINT NOT NULL,
                    UNIQUE KEY uq_producto_nombre (nombre),
                    KEY ix_producto_categoria (categoria_id)
                )",
            ],
            Dialect::Sqlite => &[
                "CREATE TABLE IF NOT EXISTS categoria (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    nombre TEXT NOT NULL UNIQUE
                )",
                "CREATE TABLE IF NOT EXISTS producto (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    nombre TEXT NOT NULL UNIQUE,
                    descripcion TEXT NOT NULL DEFAULT '',
                    categoria_id INTEGER NOT NULL
                )",
                "CREATE INDEX IF NOT EXISTS ix_producto_categoria ON producto (categoria_id)",
            ],
        }
    }
}

/// Create missing tables for the given dialect.
pub async fn bootstrap(gateway: &Gateway, dialect: Dialect) -> Result<(), sqlx::Error> {
    for statement in dialect.statements() {
        sqlx::query(statement).execute(gateway.pool()).await?;
    }
    tracing::info!(?dialect, "Schema bootstrap complete");
    Ok(())
}

//! Row types for the two catalog tables.
//!
//! Field names match the column names, which are also the JSON field names
//! of the HTTP contract.

use serde::{Deserialize, Serialize};

/// A row of `categoria`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    pub nombre: String,
}

/// A row of `producto`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub nombre: String,
    pub descripcion: String,
    pub categoria_id: i64,
}

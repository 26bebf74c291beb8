//! Relational store subsystem.
//!
//! # Data Flow
//! ```text
//! rule engine
//!     → gateway.rs (parameterized SELECT/INSERT/UPDATE/DELETE)
//!     → sqlx AnyPool (MySQL in production, SQLite in tests)
//!     ← rows (models.rs) or affected-row / insert-id metadata
//! ```
//!
//! # Design Decisions
//! - No business rules live here
//! - The pool is created once at startup; a failed first connection is fatal
//! - No transactions: each call is an independent round-trip

pub mod gateway;
pub mod models;
pub mod schema;

pub use gateway::{Gateway, InsertMetadata};
pub use models::{Category, Product};
pub use schema::{bootstrap, Dialect};

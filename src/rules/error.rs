//! Rule failures.
//!
//! `Display` of every variant is the exact message sent to callers in the
//! `{"Error": ...}` envelope. Callers match on those strings, so they must
//! not change.

use serde::Serialize;

pub const MSG_MISSING_CATEGORY_NAME: &str = "Falta enviar el nombre!";
pub const MSG_MISSING_PRODUCT_FIELDS: &str = "No enviaste todos los datos obligatorios!";
pub const MSG_DUPLICATE_CATEGORY: &str = "Esa cataegoria ya existe";
pub const MSG_DUPLICATE_CATEGORY_RENAME: &str =
    "El nombre de la categoria que querés poner ya existe!";
pub const MSG_DUPLICATE_PRODUCT: &str = "Ese producto ya existe!";
pub const MSG_UNKNOWN_CATEGORY: &str = "Esa categoria no existe!";
pub const MSG_HAS_DEPENDENTS: &str =
    "Esta categoria tiene productos asociados, no se puede eliminar";

/// Discriminant of a [`RuleError`], stable for logs, metrics and the tagged envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    MissingField,
    InvalidPayload,
    DuplicateName,
    UnknownCategory,
    HasDependents,
    StoreError,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::MissingField => "missing_field",
            ErrorKind::InvalidPayload => "invalid_payload",
            ErrorKind::DuplicateName => "duplicate_name",
            ErrorKind::UnknownCategory => "unknown_category",
            ErrorKind::HasDependents => "has_dependents",
            ErrorKind::StoreError => "store_error",
        }
    }
}

/// Error raised by the category and product rule engines.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// A required body field is absent or empty.
    #[error("{0}")]
    MissingField(&'static str),

    /// The body could not be decoded into the expected shape.
    #[error("{0}")]
    InvalidPayload(String),

    /// A name uniqueness rule was violated.
    #[error("{0}")]
    DuplicateName(&'static str),

    /// `categoria_id` does not reference an existing category.
    #[error("Esa categoria no existe!")]
    UnknownCategory,

    /// Delete blocked by products still referencing the category.
    #[error("Esta categoria tiene productos asociados, no se puede eliminar")]
    HasDependents,

    /// Any failure of the underlying store.
    #[error("{0}")]
    Store(#[from] sqlx::Error),
}

impl RuleError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RuleError::MissingField(_) => ErrorKind::MissingField,
            RuleError::InvalidPayload(_) => ErrorKind::InvalidPayload,
            RuleError::DuplicateName(_) => ErrorKind::DuplicateName,
            RuleError::UnknownCategory => ErrorKind::UnknownCategory,
            RuleError::HasDependents => ErrorKind::HasDependents,
            RuleError::Store(_) => ErrorKind::StoreError,
        }
    }

    /// Map a failed insert/update, turning a unique-index violation into
    /// the same duplicate error the pre-check would have raised.
    pub(crate) fn from_write(err: sqlx::Error, duplicate_message: &'static str) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                RuleError::DuplicateName(duplicate_message)
            }
            _ => RuleError::Store(err),
        }
    }
}

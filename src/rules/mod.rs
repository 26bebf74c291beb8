//! Validation and consistency rules.
//!
//! # Data Flow
//! ```text
//! decoded body (CategoryInput / ProductInput)
//!     → required-field check            → MissingField
//!     → field shapes, uppercase name    → InvalidPayload
//!     → 0-2 existence/uniqueness reads  → DuplicateName / UnknownCategory / HasDependents
//!     → mutating statement              → affected rows / insert metadata
//! ```
//!
//! # Design Decisions
//! - Rule engines hold no state besides the gateway handle
//! - Check-then-act without a transaction; the store's UNIQUE indexes are the backstop
//! - Every failure is a `RuleError`; the HTTP layer decides the status code

pub mod category;
pub mod error;
pub mod product;

pub use category::{CategoryInput, CategoryRules};
pub use error::{ErrorKind, RuleError};
pub use product::{ProductInput, ProductRules};

use serde_json::Value;

/// The value when it counts as supplied: `null`, `false`, `0` and `""` do not.
pub fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| match v {
        Value::Null | Value::Bool(false) => false,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Bool(true) | Value::Array(_) | Value::Object(_) => true,
    })
}

/// Uppercase a supplied name. Only strings are names.
pub fn normalize_name(value: &Value) -> Result<String, RuleError> {
    value
        .as_str()
        .map(str::to_uppercase)
        .ok_or_else(|| RuleError::InvalidPayload(format!("nombre must be a string, got {value}")))
}

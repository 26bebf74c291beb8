//! Product rule engine.
//!
//! Only creation exists. Checks run in a fixed order: presence of both
//! required fields, their shapes, category existence, then name uniqueness.

use serde::Deserialize;
use serde_json::Value;

use crate::rules::error::{RuleError, MSG_DUPLICATE_PRODUCT, MSG_MISSING_PRODUCT_FIELDS};
use crate::rules::{normalize_name, present};
use crate::store::Gateway;

/// Body of POST `/producto`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductInput {
    #[serde(default)]
    pub nombre: Option<Value>,

    /// Number or numeric string. `0`, `""`, `false` and `null` count as absent.
    #[serde(default)]
    pub categoria_id: Option<Value>,

    #[serde(default)]
    pub descripcion: Option<Value>,
}

impl ProductInput {
    pub fn new(nombre: impl Into<String>, categoria_id: i64) -> Self {
        Self {
            nombre: Some(Value::String(nombre.into())),
            categoria_id: Some(Value::from(categoria_id)),
            descripcion: None,
        }
    }

    pub fn with_descripcion(mut self, descripcion: impl Into<String>) -> Self {
        self.descripcion = Some(Value::String(descripcion.into()));
        self
    }
}

/// Store key for a supplied `categoria_id`. `true` is the key `"1"`.
fn category_key(value: &Value) -> Result<String, RuleError> {
    match value {
        Value::Bool(b) => Ok(if *b { "1" } else { "0" }.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::String(s) => Ok(s.clone()),
        other => Err(RuleError::InvalidPayload(format!(
            "categoria_id must be a number or string, got {other}"
        ))),
    }
}

/// Stored description. Absent values become the empty string.
fn description_text(value: Option<&Value>) -> Result<String, RuleError> {
    match present(value) {
        None => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(v @ (Value::Number(_) | Value::Bool(_))) => Ok(v.to_string()),
        Some(other) => Err(RuleError::InvalidPayload(format!(
            "descripcion must be a string, got {other}"
        ))),
    }
}

#[derive(Clone, Debug)]
pub struct ProductRules {
    gateway: Gateway,
}

impl ProductRules {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Create a product and return its store-generated id.
    pub async fn create(&self, input: &ProductInput) -> Result<Option<i64>, RuleError> {
        let (Some(nombre), Some(category)) = (
            present(input.nombre.as_ref()),
            present(input.categoria_id.as_ref()),
        ) else {
            return Err(RuleError::MissingField(MSG_MISSING_PRODUCT_FIELDS));
        };
        let nombre = normalize_name(nombre)?;
        let category = category_key(category)?;
        let descripcion = description_text(input.descripcion.as_ref())?;

        if self.gateway.categories_by_id(&category).await?.is_empty() {
            return Err(RuleError::UnknownCategory);
        }

        if !self.gateway.product_ids_named(&nombre).await?.is_empty() {
            return Err(RuleError::DuplicateName(MSG_DUPLICATE_PRODUCT));
        }

        let meta = self
            .gateway
            .insert_product(&nombre, &descripcion, &category)
            .await
            .map_err(|e| RuleError::from_write(e, MSG_DUPLICATE_PRODUCT))?;

        tracing::info!(
            nombre = %nombre,
            categoria_id = %category,
            insert_id = ?meta.insert_id,
            "Product created"
        );
        Ok(meta.insert_id)
    }
}

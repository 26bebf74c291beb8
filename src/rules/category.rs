//! Category rule engine.
//!
//! Every operation is a sequence of independent store round-trips with no
//! enclosing transaction. Two concurrent creates of the same name can both
//! pass the existence check; only a UNIQUE index on `categoria.nombre`
//! (see `store::schema`) stops the second insert.

use serde::Deserialize;
use serde_json::Value;

use crate::rules::error::{
    RuleError, MSG_DUPLICATE_CATEGORY, MSG_DUPLICATE_CATEGORY_RENAME, MSG_MISSING_CATEGORY_NAME,
};
use crate::rules::{normalize_name, present};
use crate::store::{Category, Gateway, InsertMetadata};

/// Body of POST/PUT/DELETE `/categoria`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryInput {
    /// Any JSON value; `null`, `false`, `0` and `""` count as absent.
    #[serde(default)]
    pub nombre: Option<Value>,
}

impl CategoryInput {
    pub fn named(nombre: impl Into<String>) -> Self {
        Self { nombre: Some(Value::String(nombre.into())) }
    }

    fn required_name(&self) -> Result<String, RuleError> {
        let nombre = present(self.nombre.as_ref())
            .ok_or(RuleError::MissingField(MSG_MISSING_CATEGORY_NAME))?;
        normalize_name(nombre)
    }
}

#[derive(Clone, Debug)]
pub struct CategoryRules {
    gateway: Gateway,
}

impl CategoryRules {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn list_all(&self) -> Result<Vec<Category>, RuleError> {
        Ok(self.gateway.list_categories().await?)
    }

    /// Zero or one category. An unknown id is an empty result, not an error.
    pub async fn get_by_id(&self, key: &str) -> Result<Vec<Category>, RuleError> {
        Ok(self.gateway.categories_by_id(key).await?)
    }

    pub async fn create(&self, input: &CategoryInput) -> Result<InsertMetadata, RuleError> {
        let nombre = input.required_name()?;

        if !self.gateway.category_ids_named(&nombre).await?.is_empty() {
            return Err(RuleError::DuplicateName(MSG_DUPLICATE_CATEGORY));
        }

        let meta = self
            .gateway
            .insert_category(&nombre)
            .await
            .map_err(|e| RuleError::from_write(e, MSG_DUPLICATE_CATEGORY))?;

        tracing::info!(nombre = %nombre, insert_id = ?meta.insert_id, "Category created");
        Ok(meta)
    }

    /// Rename. Matching no row is a successful update of 0 rows.
    pub async fn update(&self, key: &str, input: &CategoryInput) -> Result<u64, RuleError> {
        let nombre = input.required_name()?;

        if !self
            .gateway
            .categories_named_except(&nombre, key)
            .await?
            .is_empty()
        {
            return Err(RuleError::DuplicateName(MSG_DUPLICATE_CATEGORY_RENAME));
        }

        let affected = self
            .gateway
            .rename_category(key, &nombre)
            .await
            .map_err(|e| RuleError::from_write(e, MSG_DUPLICATE_CATEGORY_RENAME))?;

        tracing::info!(id = %key, nombre = %nombre, affected, "Category renamed");
        Ok(affected)
    }

    /// Delete a category that no product references.
    ///
    /// `nombre` must be present in the body but its value plays no part in
    /// the deletion; it is not compared against the stored name.
    pub async fn delete(&self, key: &str, input: &CategoryInput) -> Result<u64, RuleError> {
        input.required_name()?;

        if !self.gateway.product_ids_in_category(key).await?.is_empty() {
            return Err(RuleError::HasDependents);
        }

        let affected = self.gateway.delete_category(key).await?;
        tracing::info!(id = %key, affected, "Category deleted");
        Ok(affected)
    }
}

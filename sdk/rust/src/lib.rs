//! Async client for the grocery catalog HTTP API.

pub mod client;

pub use client::{CatalogClient, Category, ClientError, InsertMetadata, NewProduct};

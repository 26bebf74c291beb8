//! Grocery catalog service library: categories and products over a relational store.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod rules;
pub mod store;

pub use config::schema::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use store::Gateway;

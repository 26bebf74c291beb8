//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)          environment
//!     → loader.rs (parse)  ←  LISTA_SUPER_BIND / LISTA_SUPER_DATABASE_URL
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//!     → cloned into the subsystems that need it
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Defaults reproduce the historical hardcoded deployment (port 3000, local MySQL)

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{default_config, load_config, ConfigError};
pub use schema::{
    DatabaseConfig, ErrorStatusPolicy, HttpConfig, ListenerConfig, ObservabilityConfig,
    ServiceConfig,
};

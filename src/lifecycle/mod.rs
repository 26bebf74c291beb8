//! Lifecycle management.
//!
//! ```text
//! Startup (main.rs):
//!     Load config → Init logging → Connect store (fatal on failure)
//!     → Bootstrap schema (optional) → Bind listener → Serve
//!
//! Shutdown (shutdown.rs):
//!     Ctrl+C or Shutdown::trigger → stop accepting → drain in-flight → close pool
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;

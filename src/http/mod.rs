//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID, lenient JSON body)
//!     → handlers.rs (verb + path → rule engine call)
//!     → response.rs ({"respuesta": ...} or {"Error": ...})
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{Payload, UuidRequestId, X_REQUEST_ID};
pub use response::{ApiError, Respuesta};
pub use server::{AppState, HttpServer};

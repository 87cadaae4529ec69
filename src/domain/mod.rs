//! # Domain Layer
//!
//! Employee and department records and the errors their stores report.
//! This layer is independent of the HTTP transport and the runtime.

mod error;
pub mod models;

pub use error::*;
pub use models::*;

//! # Application Layer
//!
//! Repository contracts and the use cases that drive them on behalf of the
//! transport and CLI connectors.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;

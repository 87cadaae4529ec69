mod error;
mod record_client;

pub use error::*;
pub use record_client::*;

mod department;
mod employee;
mod record;

pub use department::*;
pub use employee::*;
pub use record::*;

mod manage_records;

pub use manage_records::*;

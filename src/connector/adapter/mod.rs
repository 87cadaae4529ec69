mod in_memory_record_repository;

pub use in_memory_record_repository::*;

pub mod in_memory_record_store;
pub mod record_store;

pub mod error;
pub mod pool;
pub mod repositories;

pub use error::{DbError, Result};
pub use pool::{MIGRATOR, connect, connect_in_memory};
pub use repositories::record_repository::RecordRepository;

pub mod cookies;
pub mod demos;
pub mod error;
pub mod records;

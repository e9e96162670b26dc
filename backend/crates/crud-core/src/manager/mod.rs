pub mod outcome;
pub mod record_manager;

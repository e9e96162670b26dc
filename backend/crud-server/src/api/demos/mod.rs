pub mod demos;
pub mod menu;
pub mod number_forms;

mod cookie_header;
mod error;
mod number_forms;

pub mod cookie_header;
pub mod cookies;
pub mod last_visited_response;
pub mod theme_form;
pub mod theme_response;

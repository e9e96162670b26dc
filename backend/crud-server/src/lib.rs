pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    cookies::{
        cookie_header::{expire_cookie, read_cookie, set_cookie},
        cookies::{
            delete_cookie, get_cookie, get_theme, last_visited, page, set_theme, set_username,
        },
        last_visited_response::LastVisitedResponse,
        theme_form::ThemeForm,
        theme_response::ThemeResponse,
    },
    demos::{
        demos::{
            add_path, add_query, contact_form, form_add, hello, menu, menu_item, operation,
        },
        menu::{MENU, MenuEntry, MenuResponse},
        number_forms::{AddForm, AddQuery, ContactForm, OperationQuery},
    },
    error::ApiError,
    error::Result as ApiResult,
    records::{
        field_dto::FieldDto,
        form_response::FormResponse,
        record_dto::RecordDto,
        record_list_response::RecordListResponse,
        record_response::RecordResponse,
        records::{
            create_record, delete_record, edit_record_form, get_record, list_records,
            new_record_form, update_record,
        },
    },
};
pub use app_state::AppState;
pub use routes::build_router;

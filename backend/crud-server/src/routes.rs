use crate::health;
use crate::{
    AppState, add_path, add_query, contact_form, create_record, delete_cookie, delete_record,
    edit_record_form, form_add, get_cookie, get_record, get_theme, hello, last_visited,
    list_records, menu, menu_item, new_record_form, operation, page, set_theme, set_username,
    update_record,
};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Records
        .route("/records/{entity}", get(list_records))
        .route(
            "/records/{entity}/new",
            get(new_record_form).post(create_record),
        )
        .route("/records/{entity}/{id}", get(get_record))
        .route(
            "/records/{entity}/{id}/edit",
            get(edit_record_form).post(update_record),
        )
        .route("/records/{entity}/{id}/delete", post(delete_record))
        // Cookies
        .route("/cookies/set", get(set_username))
        .route("/cookies/get", get(get_cookie))
        .route("/cookies/delete", get(delete_cookie))
        .route("/theme", get(get_theme).post(set_theme))
        .route("/pages/{n}", get(page))
        .route("/last-visited", get(last_visited))
        // Demos
        .route("/hello", get(hello))
        .route("/menu", get(menu))
        .route("/menu/{item}", get(menu_item))
        .route("/add", get(add_query))
        .route("/add/{num1}/{num2}", get(add_path))
        .route("/op", get(operation))
        .route("/form", post(contact_form))
        .route("/form/add", post(form_add))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

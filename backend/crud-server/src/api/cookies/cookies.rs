//! Cookie demo handlers
//!
//! A remembered username, a theme preference and the last visited page, each
//! kept only in the client's cookies.

use crate::{
    ApiError, ApiResult, AppState, LastVisitedResponse, ThemeForm, ThemeResponse, expire_cookie,
    read_cookie, set_cookie,
};

use axum::{
    Form, Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use http::header::SET_COOKIE;
use http::{HeaderMap, HeaderValue};
use log::debug;

const USERNAME_COOKIE: &str = "username";
const USERNAME_VALUE: &str = "John Doe";
const THEME_COOKIE: &str = "theme";
const LAST_VISITED_COOKIE: &str = "last_visited_page";
/// Path segments that name a page; nothing else is routed
const PAGES: [&str; 3] = ["1", "2", "3"];

// =============================================================================
// Username
// =============================================================================

/// GET /cookies/set
pub async fn set_username(State(state): State<AppState>) -> ApiResult<Response> {
    let cookie = set_cookie(
        USERNAME_COOKIE,
        USERNAME_VALUE,
        state.cookies.username_max_age_secs,
    );
    with_cookie("Cookie Set", &cookie)
}

/// GET /cookies/get
pub async fn get_cookie(headers: HeaderMap) -> String {
    match read_cookie(&headers, USERNAME_COOKIE) {
        Some(username) if !username.is_empty() => format!("Hello {}", username),
        _ => "No cookie found".to_string(),
    }
}

/// GET /cookies/delete
pub async fn delete_cookie() -> ApiResult<Response> {
    with_cookie("Cookie Deleted", &expire_cookie(USERNAME_COOKIE))
}

// =============================================================================
// Theme
// =============================================================================

/// GET /theme
pub async fn get_theme(State(state): State<AppState>, headers: HeaderMap) -> Json<ThemeResponse> {
    let theme = read_cookie(&headers, THEME_COOKIE)
        .filter(|theme| !theme.is_empty())
        .unwrap_or_else(|| state.cookies.default_theme.clone());

    Json(ThemeResponse { theme })
}

/// POST /theme
pub async fn set_theme(
    State(state): State<AppState>,
    Form(form): Form<ThemeForm>,
) -> ApiResult<Response> {
    let theme = form.theme.trim().to_string();
    if theme.is_empty() {
        return Err(ApiError::validation("Theme is required", Some("theme")));
    }

    let cookie = set_cookie(THEME_COOKIE, &theme, state.cookies.theme_max_age_secs);
    with_cookie(Json(ThemeResponse { theme }), &cookie)
}

// =============================================================================
// Last visited page
// =============================================================================

/// GET /pages/{n}
pub async fn page(State(state): State<AppState>, Path(n): Path<String>) -> ApiResult<Response> {
    if !PAGES.contains(&n.as_str()) {
        return Err(ApiError::not_found(format!("Page {} not found", n)));
    }

    let cookie = set_cookie(
        LAST_VISITED_COOKIE,
        &format!("page{}", n),
        state.cookies.last_visited_max_age_secs,
    );
    with_cookie(format!("Welcome to Page {}", n), &cookie)
}

/// GET /last-visited
pub async fn last_visited(headers: HeaderMap) -> Json<LastVisitedResponse> {
    Json(LastVisitedResponse {
        last_visited_page: read_cookie(&headers, LAST_VISITED_COOKIE),
    })
}

fn with_cookie(body: impl IntoResponse, cookie: &str) -> ApiResult<Response> {
    debug!("Set-Cookie: {}", cookie);
    let value = HeaderValue::from_str(cookie)
        .map_err(|e| ApiError::internal(format!("Unusable Set-Cookie header: {e}")))?;

    Ok(([(SET_COOKIE, value)], body).into_response())
}

//! `Cookie` / `Set-Cookie` handling.
//!
//! Values are percent-encoded on write and decoded on read, so separators
//! such as `;`, `,` and spaces survive the round trip.

use cookie::time::Duration;
use cookie::{Cookie, SameSite};
use http::HeaderMap;
use http::header::COOKIE;

/// Value of the named cookie from every `Cookie` header on the request.
pub fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| Cookie::split_parse_encoded(value))
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().to_string())
}

/// `Set-Cookie` value storing `value` for `max_age_secs` seconds.
pub fn set_cookie(name: &str, value: &str, max_age_secs: u64) -> String {
    let max_age = Duration::seconds(i64::try_from(max_age_secs).unwrap_or(i64::MAX));

    Cookie::build((name, value))
        .max_age(max_age)
        .path("/")
        .same_site(SameSite::Lax)
        .build()
        .encoded()
        .to_string()
}

/// `Set-Cookie` value that removes the named cookie.
pub fn expire_cookie(name: &str) -> String {
    let mut cookie = Cookie::build((name, "")).path("/").build();
    cookie.make_removal();
    cookie.encoded().to_string()
}

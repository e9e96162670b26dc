use crate::{expire_cookie, read_cookie, set_cookie};

use googletest::assert_that;
use googletest::prelude::{contains_substring, eq, none, not, some, starts_with};
use http::header::COOKIE;
use http::{HeaderMap, HeaderValue};

fn headers(cookies: &[&str]) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for cookie in cookies {
        headers.append(COOKIE, HeaderValue::from_str(cookie).unwrap());
    }
    headers
}

/// The `name=value` pair a client sends back for a `Set-Cookie` header
fn returned_pair(set_cookie_header: &str) -> &str {
    set_cookie_header.split(';').next().unwrap()
}

#[test]
fn given_plain_value_when_set_cookie_then_attributes_present() {
    // When
    let header = set_cookie("theme", "dark", 3600);

    // Then
    assert_that!(header, starts_with("theme=dark;"));
    assert_that!(header, contains_substring("Max-Age=3600"));
    assert_that!(header, contains_substring("Path=/"));
    assert_that!(header, contains_substring("SameSite=Lax"));
}

#[test]
fn given_value_with_space_when_set_cookie_then_percent_encoded() {
    // When
    let header = set_cookie("username", "John Doe", 15);

    // Then
    assert_that!(header, starts_with("username=John%20Doe;"));
    assert_that!(header, contains_substring("Max-Age=15"));
}

#[test]
fn given_value_with_separators_when_round_tripped_then_unchanged() {
    // Given
    let header = set_cookie("theme", "dark; blue, \"x\"", 3600);
    let request = headers(&[returned_pair(&header)]);

    // When
    let value = read_cookie(&request, "theme");

    // Then
    assert_that!(header, not(contains_substring("\"")));
    assert_that!(value.as_deref(), some(eq("dark; blue, \"x\"")));
}

#[test]
fn given_non_ascii_value_when_round_tripped_then_unchanged() {
    // Given
    let header = set_cookie("theme", "dunkel ü", 3600);
    let request = headers(&[returned_pair(&header)]);

    // Then
    assert_that!(read_cookie(&request, "theme").as_deref(), some(eq("dunkel ü")));
}

#[test]
fn given_several_cookies_when_read_then_named_one_found() {
    // Given
    let request = headers(&["a=1; theme=dark", "last_visited_page=page2"]);

    // Then
    assert_that!(read_cookie(&request, "theme").as_deref(), some(eq("dark")));
    assert_that!(
        read_cookie(&request, "last_visited_page").as_deref(),
        some(eq("page2"))
    );
}

#[test]
fn given_missing_cookie_when_read_then_none() {
    // Given
    let request = headers(&["themes=dark"]);

    // Then
    assert_that!(read_cookie(&request, "theme"), none());
}

#[test]
fn given_name_when_expire_cookie_then_max_age_zero() {
    // When
    let header = expire_cookie("username");

    // Then
    assert_that!(header, starts_with("username=;"));
    assert_that!(header, contains_substring("Max-Age=0"));
}

//! Small plain-text endpoints: a greeting, a menu, and arithmetic over path,
//! query and form inputs.

use crate::api::demos::menu::price_of;
use crate::api::demos::number_forms::{add_digits, parse_digits};
use crate::{AddForm, AddQuery, ContactForm, MenuResponse, OperationQuery};

use axum::{
    Form, Json,
    extract::{Path, Query},
};

const INVALID_INPUT: &str = "Invalid input";

/// GET /hello
pub async fn hello() -> &'static str {
    "Hello, world. You're at the polls index."
}

/// GET /menu
pub async fn menu() -> Json<MenuResponse> {
    Json(MenuResponse::full())
}

/// GET /menu/{item}
pub async fn menu_item(Path(item): Path<String>) -> String {
    match price_of(&item) {
        Some(price) => price.to_string(),
        None => format!("No Item Like {} is present.", item),
    }
}

/// GET /add/{num1}/{num2}
pub async fn add_path(Path((num1, num2)): Path<(String, String)>) -> String {
    add_digits(&num1, &num2).map_or_else(|| INVALID_INPUT.to_string(), |sum| sum.to_string())
}

/// GET /add?num1=&num2=
pub async fn add_query(Query(query): Query<AddQuery>) -> String {
    add_digits(&query.num1, &query.num2)
        .map_or_else(|| INVALID_INPUT.to_string(), |sum| sum.to_string())
}

/// GET /op?value1=&value2=&operation=
///
/// The operation is checked before the operands.
pub async fn operation(Query(query): Query<OperationQuery>) -> String {
    if !matches!(query.operation.as_str(), "add" | "sub") {
        return "Invalid Operation".to_string();
    }

    let (Some(a), Some(b)) = (parse_digits(&query.value1), parse_digits(&query.value2)) else {
        return "Invalid inputs".to_string();
    };

    let (a, b) = (i128::from(a), i128::from(b));
    match query.operation.as_str() {
        "add" => (a + b).to_string(),
        _ => (a - b).to_string(),
    }
}

/// POST /form
pub async fn contact_form(Form(form): Form<ContactForm>) -> String {
    format!("Name: {} Email: {}", form.name, form.email)
}

/// POST /form/add
pub async fn form_add(Form(form): Form<AddForm>) -> String {
    match add_digits(&form.num1, &form.num2) {
        Some(sum) => format!("Result: {}", sum),
        None => "Please enter valid numbers".to_string(),
    }
}

use crate::ApiError;

use crud_core::{CoreError, FieldErrors, RecordId};

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Item not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Item not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::validation("Theme is required", Some("theme"));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "theme");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Store operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_core_not_found_converts_to_not_found() {
    let api_error = ApiError::from(CoreError::not_found("books", RecordId(7)));

    match api_error {
        ApiError::NotFound { message, .. } => assert_eq!(message, "books record 7 not found"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_unknown_entity_converts_to_not_found() {
    let api_error = ApiError::from(CoreError::UnknownEntity {
        entity: "cars".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    assert!(matches!(api_error, ApiError::NotFound { .. }));
}

#[test]
fn test_invalid_record_id_converts_to_validation_on_id() {
    let core_error = RecordId::parse("abc").unwrap_err();

    match ApiError::from(core_error) {
        ApiError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("id")),
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[test]
fn test_core_validation_names_first_field() {
    let errors: FieldErrors = [("email", "Enter a valid email address"), ("name", "Name is required")]
        .into_iter()
        .collect();

    let api_error = ApiError::from(CoreError::Validation {
        entity: "users".into(),
        errors,
        location: ErrorLocation::from(Location::caller()),
    });

    match api_error {
        ApiError::Validation { field, message, .. } => {
            assert_eq!(field.as_deref(), Some("email"));
            assert!(message.contains("Name is required"));
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[tokio::test]
async fn test_store_error_hides_details() {
    let api_error = ApiError::from(CoreError::store("disk I/O error at /var/data.db"));

    let (status, json) = body_json(api_error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["message"], "Store operation failed");
}

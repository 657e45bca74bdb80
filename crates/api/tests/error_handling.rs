//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no server or
//! database is involved.

use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use trade_api::error::AppError;
use trade_core::error::CoreError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::not_found("Product", "7f1c"));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Product not found");
    assert_eq!(json["message"], "Product with identifier 7f1c does not exist");
}

#[tokio::test]
async fn invalid_fields_return_400_with_details() {
    let mut fields = BTreeMap::new();
    fields.insert("name".to_string(), "length".to_string());
    fields.insert("email".to_string(), "email".to_string());

    let (status, json) = error_to_response(AppError::Core(CoreError::InvalidFields(fields))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Validation errors");
    assert_eq!(json["details"]["name"], "length");
    assert_eq!(json["details"]["email"], "email");
    assert!(json.get("message").is_none());
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let (status, json) = error_to_response(AppError::BadRequest("bad page".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Bad Request");
    assert_eq!(json["message"], "bad page");
}

#[tokio::test]
async fn conflict_error_returns_409() {
    let err = AppError::Core(CoreError::Conflict("Email already exists".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["message"], "Email already exists");
}

#[tokio::test]
async fn unauthorized_error_returns_401() {
    let err = AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"], "Unauthorized");
}

#[tokio::test]
async fn forbidden_error_returns_401_not_403() {
    let err = AppError::Core(CoreError::Forbidden(
        "You are not allowed to access this data".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"], "Unauthorized");
    assert_eq!(json["message"], "You are not allowed to access this data");
}

#[tokio::test]
async fn invalid_password_returns_400() {
    let (status, json) = error_to_response(AppError::Core(CoreError::InvalidPassword)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "invalid password");
}

#[tokio::test]
async fn product_not_owned_returns_400() {
    let (status, json) = error_to_response(AppError::Core(CoreError::ProductNotOwned(9))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "product does not belong to the admin");
}

#[tokio::test]
async fn row_not_found_returns_404() {
    let (status, _) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn internal_errors_do_not_leak_details() {
    let err = AppError::InternalError("connection string postgres://secret".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "An internal error occurred");
    assert!(!json.to_string().contains("secret"));
}

#[tokio::test]
async fn other_database_errors_return_500() {
    let err = AppError::Database(sqlx::Error::PoolTimedOut);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Internal Server Error");
}

//! Request extractors whose rejections flow through [`AppError`].
//!
//! axum's stock `Json`, `Path` and `Query` reject with plain-text bodies;
//! the wrappers here reuse them but answer with the JSON error envelope.

use axum::extract::{FromRequest, FromRequestParts, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use trade_core::validation::validate_input;
use trade_db::models::product::ProductRequest;
use validator::Validate;

use crate::error::AppError;
use crate::state::AppState;
use crate::storage::ImageUpload;

/// `axum::Json` with [`AppError`] rejections.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// `axum::extract::Path` with [`AppError`] rejections.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// `axum::extract::Query` with [`AppError`] rejections.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

/// JSON body that has also passed its `#[validate]` rule table.
///
/// Every violated field is reported in one `{error, details}` response.
///
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<VariantRequest>) -> AppResult<...> { ... }
/// ```
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let ApiJson(data) = ApiJson::<T>::from_request(req, state).await?;
        validate_input(&data)?;
        Ok(ValidatedJson(data))
    }
}

/// Message returned for uploads that are not JPEG or PNG.
pub const INVALID_IMAGE_MESSAGE: &str =
    "Invalid file format. Only JPG, JPEG, and PNG images are allowed.";

/// Product create/update payload: a validated name plus an optional image.
///
/// Accepts `multipart/form-data` (text field `name`, file field `file`) or a
/// JSON body `{"name": ...}` without an image.
#[derive(Debug)]
pub struct ProductForm {
    pub request: ProductRequest,
    pub image: Option<ImageUpload>,
}

impl FromRequest<AppState> for ProductForm {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("multipart/form-data"));

        let form = if is_multipart {
            let multipart = Multipart::from_request(req, state).await?;
            read_multipart(multipart).await?
        } else {
            let ApiJson(request) = ApiJson::<ProductRequest>::from_request(req, state).await?;
            ProductForm {
                request,
                image: None,
            }
        };

        validate_input(&form.request)?;

        if let Some(image) = &form.image {
            if !image.is_allowed_type() {
                return Err(AppError::BadRequest(INVALID_IMAGE_MESSAGE.into()));
            }
        }

        Ok(form)
    }
}

async fn read_multipart(mut multipart: Multipart) -> Result<ProductForm, AppError> {
    let mut name = String::new();
    let mut image = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?
    {
        let field_name = field.name().map(str::to_owned);
        match field_name.as_deref() {
            Some("name") => {
                name = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.body_text()))?;
            }
            Some("file") => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.body_text()))?;

                // Browsers send an empty part when no file is chosen.
                if !bytes.is_empty() {
                    image = Some(ImageUpload {
                        file_name,
                        content_type,
                        bytes: bytes.to_vec(),
                    });
                }
            }
            _ => {}
        }
    }

    Ok(ProductForm {
        request: ProductRequest { name },
        image,
    })
}

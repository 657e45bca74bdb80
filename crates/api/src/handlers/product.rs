//! Handlers for the `/products` resource.

use std::future::Future;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use trade_db::models::product::{Product, ProductWithVariants};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ApiQuery, ProductForm};
use crate::middleware::auth::AuthAdmin;
use crate::middleware::ownership::ProductOwner;
use crate::query::ProductListParams;
use crate::response::{DataResponse, PageResponse};
use crate::services;
use crate::state::AppState;
use crate::storage::{ImageStore, ImageUpload};

/// POST /products
pub async fn create(
    State(state): State<AppState>,
    admin: AuthAdmin,
    form: ProductForm,
) -> AppResult<(StatusCode, Json<DataResponse<Product>>)> {
    let pool = &state.pool;
    let product = with_stored_image(&state.images, form.image.as_ref(), |image_url| {
        services::product::create(pool, form.request, image_url, admin.admin_id)
    })
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new("Successfully created product!", product)),
    ))
}

/// GET /products?name=&pageSize=&pageNum=
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ProductListParams>,
) -> AppResult<Json<PageResponse<ProductWithVariants>>> {
    let page = params.page()?;
    let (data, total) = services::product::list(
        &state.pool,
        page.limit(),
        page.offset(),
        params.name.as_deref(),
    )
    .await?;

    Ok(Json(PageResponse {
        message: "Successfully fetch products!",
        data,
        meta: page.meta(total),
    }))
}

/// GET /products/{uuid}
pub async fn get_by_uuid(
    State(state): State<AppState>,
    ApiPath(uuid): ApiPath<Uuid>,
) -> AppResult<Json<DataResponse<ProductWithVariants>>> {
    let product = services::product::get_by_uuid(&state.pool, uuid).await?;
    Ok(Json(DataResponse::new(
        "Successfully fetched specific product!",
        product,
    )))
}

/// PUT /products/{uuid}
///
/// The name is always replaced; the image only when a new file is sent.
pub async fn update(
    State(state): State<AppState>,
    owner: ProductOwner,
    form: ProductForm,
) -> AppResult<Json<DataResponse<Product>>> {
    let pool = &state.pool;
    let product = with_stored_image(&state.images, form.image.as_ref(), |image_url| {
        services::product::update(pool, form.request, image_url, owner.uuid, owner.admin.admin_id)
    })
    .await?;

    Ok(Json(DataResponse::new(
        "Successfully update the product!",
        product,
    )))
}

/// DELETE /products/{uuid}
pub async fn delete(
    State(state): State<AppState>,
    owner: ProductOwner,
) -> AppResult<Json<DataResponse<Product>>> {
    let product = services::product::delete(&state.pool, owner.uuid, owner.admin.admin_id).await?;
    Ok(Json(DataResponse::new(
        "Successfully delete the product!",
        product,
    )))
}

/// Store the optional upload, run `write` with its URL, and delete the file
/// again if `write` fails.
async fn with_stored_image<T, F, Fut>(
    images: &ImageStore,
    image: Option<&ImageUpload>,
    write: F,
) -> AppResult<T>
where
    F: FnOnce(Option<String>) -> Fut,
    Fut: Future<Output = AppResult<T>>,
{
    let stored = match image {
        Some(image) => Some(
            images
                .save(image)
                .await
                .map_err(|e| AppError::InternalError(format!("Failed to store image: {e}")))?,
        ),
        None => None,
    };

    let result = write(stored.as_ref().map(|s| s.url.clone())).await;
    if result.is_err() {
        if let Some(stored) = &stored {
            images.remove(stored).await;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use trade_core::error::CoreError;

    use super::*;
    use crate::storage::StorageConfig;

    fn store(dir: &std::path::Path) -> ImageStore {
        ImageStore::new(StorageConfig {
            upload_dir: dir.to_path_buf(),
            public_base_url: "http://localhost:8000".to_string(),
        })
    }

    fn png() -> ImageUpload {
        ImageUpload {
            file_name: "w.png".to_string(),
            content_type: "image/png".to_string(),
            bytes: vec![0x89, b'P', b'N', b'G'],
        }
    }

    fn stored_files(dir: &std::path::Path) -> usize {
        std::fs::read_dir(dir).unwrap().count()
    }

    #[tokio::test]
    async fn failed_write_removes_the_uploaded_file() {
        let dir = tempfile::tempdir().unwrap();
        let images = store(dir.path());

        let result: AppResult<()> = with_stored_image(&images, Some(&png()), |url| async move {
            assert!(url.is_some());
            Err(CoreError::not_found("Product", "gone").into())
        })
        .await;

        assert!(result.is_err());
        assert_eq!(stored_files(dir.path()), 0);
    }

    #[tokio::test]
    async fn successful_write_keeps_the_uploaded_file() {
        let dir = tempfile::tempdir().unwrap();
        let images = store(dir.path());

        let url = with_stored_image(&images, Some(&png()), |url| async move { Ok(url) })
            .await
            .unwrap()
            .unwrap();

        assert!(url.starts_with("http://localhost:8000/uploads/w_"));
        assert_eq!(stored_files(dir.path()), 1);
    }

    #[tokio::test]
    async fn no_upload_passes_no_url() {
        let dir = tempfile::tempdir().unwrap();
        let images = store(dir.path());

        let url = with_stored_image(&images, None, |url| async move { Ok(url) })
            .await
            .unwrap();

        assert_eq!(url, None);
    }
}

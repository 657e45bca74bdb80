//! Handlers for the `/products/variants` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use trade_db::models::variant::{Variant, VariantRequest};
use uuid::Uuid;

use crate::error::AppResult;
use crate::extract::{ApiPath, ApiQuery, ValidatedJson};
use crate::middleware::auth::AuthAdmin;
use crate::middleware::ownership::VariantOwner;
use crate::query::VariantListParams;
use crate::response::{DataResponse, PageResponse};
use crate::services;
use crate::state::AppState;

/// POST /products/variants
pub async fn create(
    State(state): State<AppState>,
    admin: AuthAdmin,
    ValidatedJson(input): ValidatedJson<VariantRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Variant>>)> {
    let variant = services::variant::create(&state.pool, input, admin.admin_id).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new("Successfully created variant!", variant)),
    ))
}

/// GET /products/variants?variantName=&pageSize=&pageNum=
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<VariantListParams>,
) -> AppResult<Json<PageResponse<Variant>>> {
    let page = params.page()?;
    let (data, total) = services::variant::list(
        &state.pool,
        page.limit(),
        page.offset(),
        params.variant_name.as_deref(),
    )
    .await?;

    Ok(Json(PageResponse {
        message: "Successfully fetch variants!",
        data,
        meta: page.meta(total),
    }))
}

/// GET /products/variants/{uuid}
pub async fn get_by_uuid(
    State(state): State<AppState>,
    ApiPath(uuid): ApiPath<Uuid>,
) -> AppResult<Json<DataResponse<Variant>>> {
    let variant = services::variant::get_by_uuid(&state.pool, uuid).await?;
    Ok(Json(DataResponse::new(
        "Successfully fetched specific variant!",
        variant,
    )))
}

/// PUT /products/variants/{uuid}
pub async fn update(
    State(state): State<AppState>,
    owner: VariantOwner,
    ValidatedJson(input): ValidatedJson<VariantRequest>,
) -> AppResult<Json<DataResponse<Variant>>> {
    let variant =
        services::variant::update(&state.pool, input, owner.uuid, owner.admin.admin_id).await?;
    Ok(Json(DataResponse::new(
        "Successfully update the variant!",
        variant,
    )))
}

/// DELETE /products/variants/{uuid}
pub async fn delete(
    State(state): State<AppState>,
    owner: VariantOwner,
) -> AppResult<Json<DataResponse<Variant>>> {
    let variant = services::variant::delete(&state.pool, owner.uuid, owner.admin.admin_id).await?;
    Ok(Json(DataResponse::new(
        "Successfully delete the variant!",
        variant,
    )))
}

//! Route definitions for the `/products/variants` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::variant;
use crate::state::AppState;

/// Routes mounted at `/products/variants`.
///
/// ```text
/// GET    /         -> list
/// POST   /         -> create (auth)
/// GET    /{uuid}   -> get_by_uuid
/// PUT    /{uuid}   -> update (owner)
/// DELETE /{uuid}   -> delete (owner)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(variant::list).post(variant::create))
        .route(
            "/{uuid}",
            get(variant::get_by_uuid)
                .put(variant::update)
                .delete(variant::delete),
        )
}

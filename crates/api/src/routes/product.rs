//! Route definitions for the `/products` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::product;
use crate::state::AppState;

/// Routes mounted at `/products`.
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
        .route("/", get(product::list).post(product::create))
        .route(
            "/{uuid}",
            get(product::get_by_uuid)
                .put(product::update)
                .delete(product::delete),
        )
}

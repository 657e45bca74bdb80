pub mod auth;
pub mod health;
pub mod product;
pub mod variant;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// ```text
/// /auth                         register, login
/// /products                     list, create
/// /products/{uuid}              get, update, delete
/// /products/variants            list, create
/// /products/variants/{uuid}     get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest(
            "/products",
            product::router().nest("/variants", variant::router()),
        )
}

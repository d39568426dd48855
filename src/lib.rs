//! Restaurant Directory Service Library
//!
//! This library crate defines the modules behind the HTTP service binary
//! (`main.rs`): CRUD-style endpoints for restaurants, cuisines, and
//! reviews, backed by a Redis-style key-value store used as a lightweight
//! relational substitute.
//!
//! ## Architecture Modules
//!
//! - **`store`**: the data-access layer. Deterministic key-space mapping
//!   plus the process-wide store connection created once at startup.
//! - **`restaurants`**: restaurant listing (rating-ordered, paged),
//!   creation with cuisine denormalization, and detail reads that bump the
//!   view counter.
//! - **`reviews`**: review submission with running-average maintenance,
//!   paged listing, and deletion.
//! - **`cuisines`**: read-only views over the cuisine catalog.
//! - **`middleware`**: the restaurant existence guard run before every
//!   restaurant-scoped handler.
//! - **`validate`**: payload schemas and the JSON extractor enforcing them.
//! - **`response`** / **`error`**: the uniform success/error envelopes and
//!   the single error-to-status translator.
//! - **`config`**: environment-derived process configuration.

pub mod config;
pub mod cuisines;
pub mod error;
pub mod middleware;
pub mod pagination;
pub mod response;
pub mod restaurants;
pub mod reviews;
pub mod store;
pub mod validate;

use axum::middleware::from_fn;
use axum::routing::{delete, get};
use axum::{Extension, Router};

use store::client::StoreClient;

/// Builds the application router with the store handle attached.
///
/// Restaurant-scoped routes sit behind the existence guard; the store
/// extension layer wraps everything so the guard can reach it.
pub fn router(store: StoreClient) -> Router {
    let guarded = Router::new()
        .route(
            "/restaurants/:restaurantId",
            get(restaurants::handlers::get_restaurant),
        )
        .route(
            "/restaurants/:restaurantId/reviews",
            get(reviews::handlers::list_reviews).post(reviews::handlers::create_review),
        )
        .route(
            "/restaurants/:restaurantId/reviews/:reviewId",
            delete(reviews::handlers::delete_review),
        )
        .route_layer(from_fn(middleware::check_restaurant_exists));

    Router::new()
        .route(
            "/restaurants",
            get(restaurants::handlers::list_restaurants)
                .post(restaurants::handlers::create_restaurant),
        )
        .route("/cuisines", get(cuisines::handlers::list_cuisines))
        .route(
            "/cuisines/:cuisine",
            get(cuisines::handlers::list_restaurants_by_cuisine),
        )
        .merge(guarded)
        .layer(Extension(store))
}

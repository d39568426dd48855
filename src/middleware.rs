//! Request guards shared across routes.

use std::collections::HashMap;

use axum::extract::{Path, Request};
use axum::middleware::Next;
use axum::response::Response;
use axum::Extension;
use redis::AsyncCommands;

use crate::error::ApiError;
use crate::store::client::StoreClient;
use crate::store::keys;

/// Verifies that the `restaurantId` path parameter references a stored
/// restaurant before the inner handler runs.
///
/// Performs exactly one `EXISTS` query, never a full read. A missing or
/// empty parameter is a `BadRequest`; an unknown id is a `NotFound`.
pub async fn check_restaurant_exists(
    Extension(store): Extension<StoreClient>,
    Path(params): Path<HashMap<String, String>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let restaurant_id = params
        .get("restaurantId")
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Restaurant ID not found".to_string()))?;

    let mut con = store.connection();
    let exists: bool = con.exists(keys::restaurant(restaurant_id)).await?;
    if !exists {
        return Err(ApiError::NotFound("Restaurant not found".to_string()));
    }

    Ok(next.run(request).await)
}

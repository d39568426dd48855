use axum::extract::Path;
use axum::Extension;
use futures::future;
use redis::AsyncCommands;

use crate::error::ApiError;
use crate::response::Envelope;
use crate::store::client::StoreClient;
use crate::store::keys;

/// `GET /cuisines` — every cuisine name seen so far, unordered.
pub async fn list_cuisines(
    Extension(store): Extension<StoreClient>,
) -> Result<Envelope<Vec<String>>, ApiError> {
    let mut con = store.connection();
    let cuisines: Vec<String> = con.smembers(keys::cuisines_catalog()).await?;

    Ok(Envelope::data(cuisines))
}

/// `GET /cuisines/:cuisine` — names of the restaurants serving a cuisine.
///
/// The membership set is trusted over the hashes: an id whose hash lacks a
/// name surfaces as a `null` entry rather than being filtered out.
pub async fn list_restaurants_by_cuisine(
    Extension(store): Extension<StoreClient>,
    Path(cuisine): Path<String>,
) -> Result<Envelope<Vec<Option<String>>>, ApiError> {
    let mut con = store.connection();
    let ids: Vec<String> = con.smembers(keys::cuisine(&cuisine)).await?;

    let reads = ids.into_iter().map(|id| {
        let mut con = store.connection();
        async move {
            let name: Option<String> = con.hget(keys::restaurant(&id), "name").await?;
            Ok::<_, ApiError>(name)
        }
    });
    let names = future::try_join_all(reads).await?;

    Ok(Envelope::data(names))
}

use std::collections::HashMap;

use axum::extract::{Path, Query};
use axum::Extension;
use futures::future::{self, BoxFuture};
use futures::FutureExt;
use redis::AsyncCommands;
use uuid::Uuid;

use super::types::{
    CreateRestaurant, CreatedRestaurant, RestaurantDetail, RestaurantPath, RestaurantRecord,
};
use crate::error::ApiError;
use crate::pagination::PageQuery;
use crate::response::Envelope;
use crate::store::client::StoreClient;
use crate::store::keys;
use crate::validate::ValidatedJson;

/// `GET /restaurants` — page through restaurants by descending average
/// rating.
pub async fn list_restaurants(
    Extension(store): Extension<StoreClient>,
    Query(page): Query<PageQuery>,
) -> Result<Envelope<Vec<RestaurantRecord>>, ApiError> {
    let (start, stop) = page.window();

    let mut con = store.connection();
    let ids: Vec<String> = con
        .zrevrange(keys::restaurants_by_rating(), start, stop)
        .await?;

    let reads = ids.into_iter().map(|id| {
        let mut con = store.connection();
        async move {
            let hash: HashMap<String, String> = con.hgetall(keys::restaurant(&id)).await?;
            Ok::<_, ApiError>(hash)
        }
    });
    let hashes = future::try_join_all(reads).await?;

    let restaurants = hashes
        .iter()
        .filter_map(RestaurantRecord::from_hash)
        .collect();

    Ok(Envelope::data(restaurants))
}

/// `POST /restaurants` — create a restaurant and index it.
///
/// The hash write, the rating-index entry, and the three cuisine-set
/// updates per cuisine are issued as one best-effort concurrent batch.
/// Failures are reported per key and the batch is never rolled back, so a
/// partial failure can leave partial state behind.
pub async fn create_restaurant(
    Extension(store): Extension<StoreClient>,
    ValidatedJson(payload): ValidatedJson<CreateRestaurant>,
) -> Result<Envelope<CreatedRestaurant>, ApiError> {
    let id = Uuid::new_v4().to_string();

    let mut writes: Vec<BoxFuture<'static, (String, redis::RedisResult<()>)>> = Vec::new();

    for cuisine in &payload.cuisines {
        let catalog_key = keys::cuisines_catalog().to_string();
        let member = cuisine.clone();
        let mut con = store.connection();
        writes.push(
            async move {
                let outcome: redis::RedisResult<()> = con.sadd(&catalog_key, &member).await;
                (catalog_key, outcome)
            }
            .boxed(),
        );

        let cuisine_key = keys::cuisine(cuisine);
        let member = id.clone();
        let mut con = store.connection();
        writes.push(
            async move {
                let outcome: redis::RedisResult<()> = con.sadd(&cuisine_key, &member).await;
                (cuisine_key, outcome)
            }
            .boxed(),
        );

        let memberships_key = keys::restaurant_cuisines(&id);
        let member = cuisine.clone();
        let mut con = store.connection();
        writes.push(
            async move {
                let outcome: redis::RedisResult<()> = con.sadd(&memberships_key, &member).await;
                (memberships_key, outcome)
            }
            .boxed(),
        );
    }

    let hash_key = keys::restaurant(&id);
    let fields = RestaurantRecord::creation_fields(&id, &payload.name, &payload.location);
    let mut con = store.connection();
    writes.push(
        async move {
            let outcome: redis::RedisResult<()> = con.hset_multiple(&hash_key, &fields).await;
            (hash_key, outcome)
        }
        .boxed(),
    );

    let rating_key = keys::restaurants_by_rating().to_string();
    let member = id.clone();
    let mut con = store.connection();
    writes.push(
        async move {
            let outcome: redis::RedisResult<()> = con.zadd(&rating_key, &member, 0f64).await;
            (rating_key, outcome)
        }
        .boxed(),
    );

    let mut first_failure = None;
    for (key, outcome) in future::join_all(writes).await {
        if let Err(e) = outcome {
            tracing::error!("Write to {} failed during restaurant create: {}", key, e);
            first_failure.get_or_insert(e);
        }
    }
    if let Some(e) = first_failure {
        return Err(e.into());
    }

    let created = CreatedRestaurant {
        id,
        name: payload.name,
        location: payload.location,
    };
    Ok(Envelope::with_message(created, "Added new restaurant"))
}

/// `GET /restaurants/:restaurantId` — detail read.
///
/// The view counter bump runs concurrently with the hash read, so the
/// returned `viewCount` may or may not include the current visit.
pub async fn get_restaurant(
    Extension(store): Extension<StoreClient>,
    Path(RestaurantPath { restaurant_id }): Path<RestaurantPath>,
) -> Result<Envelope<RestaurantDetail>, ApiError> {
    let restaurant_key = keys::restaurant(&restaurant_id);

    let mut count_con = store.connection();
    let mut read_con = store.connection();
    let mut cuisine_con = store.connection();

    let (_, hash, cuisines) = tokio::try_join!(
        async {
            let count: i64 = count_con.hincr(&restaurant_key, "viewCount", 1).await?;
            Ok::<_, ApiError>(count)
        },
        async {
            let hash: HashMap<String, String> = read_con.hgetall(&restaurant_key).await?;
            Ok::<_, ApiError>(hash)
        },
        async {
            let members: Vec<String> = cuisine_con
                .smembers(keys::restaurant_cuisines(&restaurant_id))
                .await?;
            Ok::<_, ApiError>(members)
        },
    )?;

    let restaurant = RestaurantRecord::from_hash(&hash)
        .ok_or_else(|| ApiError::NotFound("Restaurant not found".to_string()))?;

    Ok(Envelope::data(RestaurantDetail {
        restaurant,
        cuisines,
    }))
}

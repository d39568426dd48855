use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::extract::{Path, Query};
use axum::Extension;
use futures::future;
use redis::AsyncCommands;
use uuid::Uuid;

use super::types::{average_rating, CreateReview, ReviewPath, ReviewRecord};
use crate::error::ApiError;
use crate::pagination::PageQuery;
use crate::response::Envelope;
use crate::restaurants::types::RestaurantPath;
use crate::store::client::StoreClient;
use crate::store::keys;
use crate::validate::ValidatedJson;

/// `POST /restaurants/:restaurantId/reviews` — submit a review.
///
/// The list push, the detail write, and the `totalStars` increment run
/// concurrently; the average needs the post-push list length and the new
/// total, so the index update and `avgStars` write are issued only after
/// that batch completes.
pub async fn create_review(
    Extension(store): Extension<StoreClient>,
    Path(RestaurantPath { restaurant_id }): Path<RestaurantPath>,
    ValidatedJson(payload): ValidatedJson<CreateReview>,
) -> Result<Envelope<ReviewRecord>, ApiError> {
    let review_id = Uuid::new_v4().to_string();
    let record = ReviewRecord::new(
        review_id.clone(),
        restaurant_id.clone(),
        payload.rating,
        payload.text,
        unix_millis(),
    );

    let list_key = keys::restaurant_reviews(&restaurant_id);
    let details_key = keys::review_details(&review_id);
    let restaurant_key = keys::restaurant(&restaurant_id);

    let mut push_con = store.connection();
    let mut details_con = store.connection();
    let mut stars_con = store.connection();

    let (review_count, _, total_stars) = tokio::try_join!(
        async {
            let count: i64 = push_con.lpush(&list_key, &review_id).await?;
            Ok::<_, ApiError>(count)
        },
        async {
            let fields = record.to_fields();
            let written: () = details_con.hset_multiple(&details_key, &fields).await?;
            Ok::<_, ApiError>(written)
        },
        async {
            let total: f64 = redis::cmd("HINCRBYFLOAT")
                .arg(&restaurant_key)
                .arg("totalStars")
                .arg(record.rating)
                .query_async(&mut stars_con)
                .await?;
            Ok::<_, ApiError>(total)
        },
    )?;

    let average = average_rating(total_stars, review_count);

    let mut index_con = store.connection();
    let mut avg_con = store.connection();

    tokio::try_join!(
        async {
            let scored: () = index_con
                .zadd(keys::restaurants_by_rating(), &restaurant_id, average)
                .await?;
            Ok::<_, ApiError>(scored)
        },
        async {
            let written: () = avg_con.hset(&restaurant_key, "avgStars", average).await?;
            Ok::<_, ApiError>(written)
        },
    )?;

    Ok(Envelope::with_message(record, "Review added"))
}

/// `GET /restaurants/:restaurantId/reviews` — page through reviews,
/// newest first.
pub async fn list_reviews(
    Extension(store): Extension<StoreClient>,
    Path(RestaurantPath { restaurant_id }): Path<RestaurantPath>,
    Query(page): Query<PageQuery>,
) -> Result<Envelope<Vec<ReviewRecord>>, ApiError> {
    let (start, stop) = page.window();

    let mut con = store.connection();
    let ids: Vec<String> = con
        .lrange(keys::restaurant_reviews(&restaurant_id), start, stop)
        .await?;

    let reads = ids.into_iter().map(|id| {
        let mut con = store.connection();
        async move {
            let hash: HashMap<String, String> = con.hgetall(keys::review_details(&id)).await?;
            Ok::<_, ApiError>(hash)
        }
    });
    let hashes = future::try_join_all(reads).await?;

    let reviews = hashes.iter().filter_map(ReviewRecord::from_hash).collect();

    Ok(Envelope::data(reviews))
}

/// `DELETE /restaurants/:restaurantId/reviews/:reviewId` — remove a review
/// from both the list and the detail store.
///
/// The deleted rating stays inside `totalStars` and the index score; the
/// displayed average never forgets it.
pub async fn delete_review(
    Extension(store): Extension<StoreClient>,
    Path(ReviewPath {
        restaurant_id,
        review_id,
    }): Path<ReviewPath>,
) -> Result<Envelope<String>, ApiError> {
    let list_key = keys::restaurant_reviews(&restaurant_id);
    let details_key = keys::review_details(&review_id);

    let mut list_con = store.connection();
    let mut details_con = store.connection();

    let (removed, deleted) = tokio::try_join!(
        async {
            let removed: i64 = list_con.lrem(&list_key, 0, &review_id).await?;
            Ok::<_, ApiError>(removed)
        },
        async {
            let deleted: i64 = details_con.del(&details_key).await?;
            Ok::<_, ApiError>(deleted)
        },
    )?;

    if removed == 0 && deleted == 0 {
        return Err(ApiError::NotFound("Review not found".to_string()));
    }

    Ok(Envelope::with_message(review_id, "Review deleted"))
}

fn unix_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

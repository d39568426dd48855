//! Key generation for the store key-space.
//!
//! Centralizes every key pattern used by the service. Each pattern carries
//! its own constant prefix, so a restaurant id and a cuisine name can never
//! resolve to the same key.

/// Key prefix for restaurant hashes.
const RESTAURANT_PREFIX: &str = "restaurant:";

/// Key prefix for cuisine membership sets.
const CUISINE_PREFIX: &str = "cuisine:";

/// Key prefix for a restaurant's cuisine set.
const RESTAURANT_CUISINES_PREFIX: &str = "restaurant_cuisines:";

/// Key prefix for a restaurant's review id list.
const RESTAURANT_REVIEWS_PREFIX: &str = "restaurant_reviews:";

/// Key prefix for review detail hashes.
const REVIEW_DETAILS_PREFIX: &str = "review_details:";

/// Key of the global cuisine catalog set.
const CUISINES_CATALOG: &str = "cuisines";

/// Key of the sorted set scoring restaurant ids by average rating.
const RESTAURANTS_BY_RATING: &str = "restaurants_by_rating";

/// Key of the hash holding one restaurant.
pub fn restaurant(id: &str) -> String {
    format!("{}{}", RESTAURANT_PREFIX, id)
}

/// Key of the set of restaurant ids serving one cuisine.
pub fn cuisine(name: &str) -> String {
    format!("{}{}", CUISINE_PREFIX, name)
}

/// Key of the set of cuisines one restaurant serves.
pub fn restaurant_cuisines(id: &str) -> String {
    format!("{}{}", RESTAURANT_CUISINES_PREFIX, id)
}

/// Key of the list of review ids for one restaurant, newest first.
pub fn restaurant_reviews(restaurant_id: &str) -> String {
    format!("{}{}", RESTAURANT_REVIEWS_PREFIX, restaurant_id)
}

/// Key of the hash holding one review.
pub fn review_details(review_id: &str) -> String {
    format!("{}{}", REVIEW_DETAILS_PREFIX, review_id)
}

/// Key of the global cuisine catalog.
pub fn cuisines_catalog() -> &'static str {
    CUISINES_CATALOG
}

/// Key of the rating index.
pub fn restaurants_by_rating() -> &'static str {
    RESTAURANTS_BY_RATING
}

//! Review Module
//!
//! Review submission, listing, and deletion for a restaurant.
//!
//! ## Storage Shape
//! - One list of review ids per restaurant, newest pushed to the front.
//! - One detail hash per review (`review_details:<id>`).
//! - Submission also bumps the restaurant's `totalStars`, recomputes the
//!   one-decimal average from the post-push list length, and mirrors it
//!   into the rating index.

pub mod handlers;
pub mod types;

#[cfg(test)]
mod tests;

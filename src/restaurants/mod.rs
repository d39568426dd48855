//! Restaurant Module
//!
//! Listing, creation, and detail reads for restaurants.
//!
//! ## Storage Shape
//! - One hash per restaurant (`restaurant:<id>`) holding identity and the
//!   review counters.
//! - A global sorted set scoring ids by average rating, serving the
//!   rating-ordered listing.
//! - Per-restaurant cuisine sets maintained together with the global
//!   catalog on creation.

pub mod handlers;
pub mod types;

#[cfg(test)]
mod tests;

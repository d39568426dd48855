//! Store Access Layer
//!
//! Maps domain entities onto a Redis-style key-value store and owns the
//! process-wide connection.
//!
//! ## Core Concepts
//! - **Keys**: deterministic mapping from domain identifiers to store keys
//!   with disjoint namespaces (`keys`).
//! - **Client**: one multiplexed connection established at startup and
//!   cloned per operation (`client`).

pub mod client;
pub mod keys;

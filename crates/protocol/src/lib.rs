//! Wire protocol types for the shop snapshot collector.
//!
//! Everything the collector exchanges with the game service lives here:
//! the JSON message envelope, the request and event payloads, the shop
//! data model that ends up in `shop-info.json`, and the [`Session`]
//! boundary the orchestrator consumes.
//!
//! [`Session`]: session::Session

pub mod constants;
pub mod envelope;
pub mod ids;
pub mod messages;
pub mod session;
pub mod types;

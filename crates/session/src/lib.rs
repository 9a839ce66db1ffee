//! WebSocket protocol session for the shop snapshot collector.
//!
//! [`ShopSession`] realizes the [`shopsnap_protocol::session::Session`]
//! boundary over a JSON-envelope WebSocket: connect, send the login
//! request, then pump inbound frames into a single-consumer event channel.

mod client;
mod pumps;

pub use client::ShopSession;

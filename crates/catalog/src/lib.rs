//! Shop catalog state for the snapshot collector.
//!
//! Everything here is pure, synchronous state: the offer ledger mutated by
//! the event stream, the readiness gate over the two finalize
//! prerequisites, the validated catalog, the asset-derivation rules, and
//! the `shop-info.json` document model.

pub mod assets;
pub mod catalog;
pub mod offers;
pub mod readiness;
pub mod rules;
pub mod shop_info;

pub use catalog::{Catalog, CatalogError};
pub use offers::{OfferKey, OfferKind, OfferLedger};
pub use readiness::ReadinessGate;
pub use rules::AssetRules;
pub use shop_info::{SHOP_INFO_FILE, ShopInfo};

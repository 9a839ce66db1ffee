//! Shop data model.
//!
//! Field names are the `shop-info.json` contract; no rename attributes.

use serde::{Deserialize, Serialize};

/// One active promotional discount.
///
/// `item_id` alone is ambiguous: regular items and shaman objects live in
/// separate id namespaces, disambiguated by `is_regular_item`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialOffer {
    pub is_sale: bool,
    pub is_regular_item: bool,
    pub item_id: u32,
    pub ends_timestamp: i64,
    pub discount_percentage: u8,
}

/// One wearable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub category_id: u16,
    pub item_id: u32,
    pub num_colors: u8,
    pub is_new: bool,
    pub info: u8,
    pub cheese_cost: u32,
    pub fraise_cost: u32,
    pub needed_item: u32,
}

/// A predefined outfit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outfit {
    pub outfit_id: u32,
    pub look: String,
    pub background: u8,
}

/// A shaman object catalog entry.
///
/// The id is composite; see [`crate::ids::shaman_object_id_parts`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShamanObject {
    pub shaman_object_id: u32,
    pub num_colors: u8,
    pub is_new: bool,
    pub info: u8,
    pub cheese_cost: u32,
    pub fraise_cost: u32,
}

/// An emoji catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emoji {
    pub emoji_id: u32,
    pub cheese_cost: u32,
    pub fraise_cost: u32,
    pub is_new: bool,
}

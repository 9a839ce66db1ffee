//! The `shop-info.json` document model.

use serde::{Deserialize, Serialize};

use shopsnap_protocol::types::{Emoji, Item, Outfit, ShamanObject, SpecialOffer};

use crate::catalog::Catalog;

/// Name of the JSON snapshot file inside the archive.
pub const SHOP_INFO_FILE: &str = "shop-info.json";

/// The JSON snapshot written next to the mirrored assets.
///
/// Field order here is the key order in the file; arrays keep delivery
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopInfo {
    pub base_timestamp: Option<i64>,
    pub special_offers: Vec<SpecialOffer>,
    pub items: Vec<Item>,
    pub outfits: Vec<Outfit>,
    pub shaman_objects: Vec<ShamanObject>,
    pub emojis: Vec<Emoji>,
}

impl ShopInfo {
    /// Assembles the document from finalize-time state.
    pub fn new(base_timestamp: Option<i64>, special_offers: Vec<SpecialOffer>, catalog: &Catalog) -> Self {
        Self {
            base_timestamp,
            special_offers,
            items: catalog.items.clone(),
            outfits: catalog.outfits.clone(),
            shaman_objects: catalog.shaman_objects.clone(),
            emojis: catalog.emojis.clone(),
        }
    }

    /// Serializes with compact separators, no pretty-printing.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_is_compact_and_keyed_per_contract() {
        let info = ShopInfo {
            base_timestamp: Some(1700000000),
            special_offers: vec![],
            items: vec![],
            outfits: vec![],
            shaman_objects: vec![],
            emojis: vec![],
        };
        let json = info.to_json().unwrap();

        assert_eq!(
            json,
            r#"{"base_timestamp":1700000000,"special_offers":[],"items":[],"outfits":[],"shaman_objects":[],"emojis":[]}"#
        );
    }

    #[test]
    fn missing_base_timestamp_serializes_as_null() {
        let info = ShopInfo {
            base_timestamp: None,
            special_offers: vec![],
            items: vec![],
            outfits: vec![],
            shaman_objects: vec![],
            emojis: vec![],
        };
        let json = info.to_json().unwrap();
        assert!(json.starts_with(r#"{"base_timestamp":null,"#));
    }

    #[test]
    fn roundtrips() {
        let info = ShopInfo {
            base_timestamp: Some(5),
            special_offers: vec![SpecialOffer {
                is_sale: true,
                is_regular_item: true,
                item_id: 7,
                ends_timestamp: 10,
                discount_percentage: 20,
            }],
            items: vec![],
            outfits: vec![],
            shaman_objects: vec![],
            emojis: vec![],
        };
        let parsed: ShopInfo = serde_json::from_str(&info.to_json().unwrap()).unwrap();
        assert_eq!(parsed, info);
    }
}

//! The validated catalog delivered by the bulk shop event.

use tracing::debug;

use shopsnap_protocol::messages::ShopContents;
use shopsnap_protocol::types::{Emoji, Item, Outfit, ShamanObject};

/// Errors validating the bulk catalog event.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The delivering session owns catalog entries. The collector must be
    /// an anonymous account with an empty inventory, otherwise the
    /// snapshot would describe that account rather than the shop.
    #[error("session owns {count} {kind}; the collector account must own nothing")]
    OwnedEntries { kind: &'static str, count: usize },
}

/// The full shop description, recorded verbatim in delivery order.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub items: Vec<Item>,
    pub outfits: Vec<Outfit>,
    pub shaman_objects: Vec<ShamanObject>,
    pub emojis: Vec<Emoji>,
}

impl Catalog {
    /// Validates the owned-set invariants and records the lists.
    pub fn from_contents(contents: ShopContents) -> Result<Self, CatalogError> {
        owned_empty("items", contents.owned_item_ids.len())?;
        owned_empty("outfits", contents.owned_outfit_codes.len())?;
        owned_empty("shaman objects", contents.owned_shaman_object_ids.len())?;
        owned_empty("emojis", contents.owned_emoji_ids.len())?;

        debug!(
            items = contents.items.len(),
            outfits = contents.outfits.len(),
            shaman_objects = contents.shaman_objects.len(),
            emojis = contents.emojis.len(),
            "catalog received"
        );

        Ok(Self {
            items: contents.items,
            outfits: contents.outfits,
            shaman_objects: contents.shaman_objects,
            emojis: contents.emojis,
        })
    }
}

fn owned_empty(kind: &'static str, count: usize) -> Result<(), CatalogError> {
    if count != 0 {
        return Err(CatalogError::OwnedEntries { kind, count });
    }
    Ok(())
}

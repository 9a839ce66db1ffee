//! The mutable set of currently-active special offers.

use std::collections::BTreeMap;

use tracing::trace;

use shopsnap_protocol::messages::SpecialOfferEvent;
use shopsnap_protocol::types::SpecialOffer;

/// Which id namespace an offer targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OfferKind {
    Item,
    ShamanObject,
}

/// Ledger key: the two item namespaces share numeric ids, so the kind is
/// part of the key. (The game client itself merges the namespaces into one
/// map by negating shaman object ids; a composite key is the same
/// invariant without the sign convention.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OfferKey {
    pub kind: OfferKind,
    pub id: u32,
}

impl OfferKey {
    /// Derives the key for an offer.
    pub fn for_offer(offer: &SpecialOffer) -> Self {
        Self {
            kind: if offer.is_regular_item {
                OfferKind::Item
            } else {
                OfferKind::ShamanObject
            },
            id: offer.item_id,
        }
    }
}

/// The set of currently-active special offers.
///
/// Events must be applied in arrival order; snapshot order is stable
/// within one process run.
#[derive(Debug, Default)]
pub struct OfferLedger {
    offers: BTreeMap<OfferKey, SpecialOffer>,
}

impl OfferLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one enable/disable event.
    ///
    /// Disabling a key that is not present is a no-op; the server sends
    /// redundant disable events.
    pub fn apply(&mut self, event: &SpecialOfferEvent) {
        let key = OfferKey::for_offer(&event.offer);
        if event.enable {
            trace!(?key, "offer enabled");
            self.offers.insert(key, event.offer.clone());
        } else if self.offers.remove(&key).is_none() {
            trace!(?key, "disable for absent offer, ignoring");
        }
    }

    /// Returns the active offers for serialization.
    pub fn snapshot(&self) -> Vec<SpecialOffer> {
        self.offers.values().cloned().collect()
    }

    pub fn contains(&self, key: &OfferKey) -> bool {
        self.offers.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.offers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }
}

//! Request and event payloads, plus the discriminated unions the session
//! layer dispatches on.

use serde::{Deserialize, Serialize};

use crate::constants::MessageType;
use crate::envelope::Message;
use crate::types::{Emoji, Item, Outfit, ShamanObject, SpecialOffer};

// ---------------------------------------------------------------------------
// Request payloads
// ---------------------------------------------------------------------------

/// Authenticates the collector account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password_hash: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub start_room: String,
}

// ---------------------------------------------------------------------------
// Event payloads
// ---------------------------------------------------------------------------

/// Sent by the server once authentication completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginSuccess {
    pub player_id: u32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub community: String,
}

/// Carries the timestamp the shop's relative clocks are anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopBaseTimestamp {
    pub timestamp: i64,
}

/// Toggles one special offer on or off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialOfferEvent {
    pub enable: bool,
    #[serde(flatten)]
    pub offer: SpecialOffer,
}

/// Lists the language codes the service can localize to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableLanguages {
    pub languages: Vec<String>,
}

/// The bulk catalog event.
///
/// The four `owned_*` sets describe the logged-in account, not the shop;
/// the collector requires all of them to be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopContents {
    #[serde(default)]
    pub owned_item_ids: Vec<u32>,
    #[serde(default)]
    pub owned_outfit_codes: Vec<String>,
    #[serde(default)]
    pub owned_shaman_object_ids: Vec<u32>,
    #[serde(default)]
    pub owned_emoji_ids: Vec<u32>,
    pub items: Vec<Item>,
    pub outfits: Vec<Outfit>,
    pub shaman_objects: Vec<ShamanObject>,
    pub emojis: Vec<Emoji>,
}

// ---------------------------------------------------------------------------
// Discriminated unions
// ---------------------------------------------------------------------------

/// An inbound event the collector consumes.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    LoginSuccess(LoginSuccess),
    BaseTimestamp(i64),
    SpecialOffer(SpecialOfferEvent),
    AvailableLanguages(Vec<String>),
    ShopLoaded(ShopContents),
}

impl SessionEvent {
    /// Decodes an envelope into an event.
    ///
    /// Returns `Ok(None)` for message kinds this collector does not
    /// consume; those are dropped by the caller.
    pub fn from_message(msg: &Message) -> Result<Option<Self>, serde_json::Error> {
        let event = match msg.msg_type {
            MessageType::LoginSuccess => {
                SessionEvent::LoginSuccess(required_payload(msg)?)
            }
            MessageType::ShopBaseTimestamp => {
                let payload: ShopBaseTimestamp = required_payload(msg)?;
                SessionEvent::BaseTimestamp(payload.timestamp)
            }
            MessageType::ShopSpecialOffer => {
                SessionEvent::SpecialOffer(required_payload(msg)?)
            }
            MessageType::AvailableLanguages => {
                let payload: AvailableLanguages = required_payload(msg)?;
                SessionEvent::AvailableLanguages(payload.languages)
            }
            MessageType::ShopLoaded => SessionEvent::ShopLoaded(required_payload(msg)?),
            _ => return Ok(None),
        };
        Ok(Some(event))
    }
}

fn required_payload<T: for<'de> Deserialize<'de>>(msg: &Message) -> Result<T, serde_json::Error> {
    use serde::de::Error;

    msg.parse_payload()?
        .ok_or_else(|| serde_json::Error::custom("missing payload"))
}

/// An outbound request the collector issues.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Login(LoginRequest),
    AvailableLanguages,
    LoadShop,
}

impl Request {
    /// Encodes this request as an envelope with the given correlation id.
    pub fn into_message(self, id: impl Into<String>) -> Result<Message, serde_json::Error> {
        match self {
            Request::Login(login) => Message::new(id, MessageType::Login, Some(&login)),
            Request::AvailableLanguages => {
                Message::new::<()>(id, MessageType::RequestAvailableLanguages, None)
            }
            Request::LoadShop => Message::new::<()>(id, MessageType::LoadShop, None),
        }
    }
}

use serde::{Deserialize, Serialize};

/// Maximum message size in bytes (8 MB).
///
/// The bulk catalog event carries every shop entry in one frame, so the
/// limit is well above anything the server sends for smaller events.
pub const WS_MAX_MESSAGE_SIZE: usize = 8 * 1024 * 1024;

/// Wire message type identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageType {
    // Requests from collector to server
    #[serde(rename = "login")]
    Login,
    #[serde(rename = "request_available_languages")]
    RequestAvailableLanguages,
    #[serde(rename = "load_shop")]
    LoadShop,

    // Events from server to collector
    #[serde(rename = "login_success")]
    LoginSuccess,
    #[serde(rename = "shop_base_timestamp")]
    ShopBaseTimestamp,
    #[serde(rename = "shop_special_offer")]
    ShopSpecialOffer,
    #[serde(rename = "available_languages")]
    AvailableLanguages,
    #[serde(rename = "shop_loaded")]
    ShopLoaded,

    /// Any message kind this collector does not consume.
    #[serde(other)]
    Unknown,
}

use serde::{Deserialize, Serialize};

use crate::constants::MessageType;

/// Envelope for all session traffic.
///
/// The `payload` field uses `serde_json::value::RawValue` to defer
/// deserialization until the message type has been inspected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    #[serde(rename = "type")]
    pub msg_type: MessageType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Box<serde_json::value::RawValue>>,
}

impl Message {
    /// Creates a new message with the given type and payload.
    pub fn new<T: Serialize>(
        id: impl Into<String>,
        msg_type: MessageType,
        payload: Option<&T>,
    ) -> Result<Self, serde_json::Error> {
        let raw = match payload {
            Some(p) => {
                let json = serde_json::to_string(p)?;
                Some(serde_json::value::RawValue::from_string(json)?)
            }
            None => None,
        };
        Ok(Self {
            id: id.into(),
            msg_type,
            payload: raw,
        })
    }

    /// Deserializes the payload into the given type.
    pub fn parse_payload<T: for<'de> Deserialize<'de>>(
        &self,
    ) -> Result<Option<T>, serde_json::Error> {
        match &self.payload {
            Some(raw) => Ok(Some(serde_json::from_str(raw.get())?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::ShopBaseTimestamp;

    #[test]
    fn message_new_with_payload() {
        let payload = ShopBaseTimestamp { timestamp: 1700000000 };
        let msg = Message::new("msg-1", MessageType::ShopBaseTimestamp, Some(&payload)).unwrap();
        assert_eq!(msg.id, "msg-1");
        assert_eq!(msg.msg_type, MessageType::ShopBaseTimestamp);
        assert!(msg.payload.is_some());
    }

    #[test]
    fn message_new_without_payload() {
        let msg = Message::new::<()>("msg-2", MessageType::LoadShop, None).unwrap();
        assert!(msg.payload.is_none());
    }

    #[test]
    fn message_parse_payload() {
        let payload = ShopBaseTimestamp { timestamp: 42 };
        let msg = Message::new("m1", MessageType::ShopBaseTimestamp, Some(&payload)).unwrap();
        let parsed: Option<ShopBaseTimestamp> = msg.parse_payload().unwrap();
        assert_eq!(parsed.unwrap().timestamp, 42);
    }

    #[test]
    fn message_json_roundtrip() {
        let msg = Message::new::<()>("r1", MessageType::RequestAvailableLanguages, None).unwrap();
        let json = serde_json::to_string(&msg).unwrap();
        let parsed: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, "r1");
        assert_eq!(parsed.msg_type, MessageType::RequestAvailableLanguages);
        assert!(parsed.payload.is_none());
    }

    #[test]
    fn message_omits_null_payload() {
        let msg = Message::new::<()>("m1", MessageType::LoadShop, None).unwrap();
        let json = serde_json::to_string(&msg).unwrap();
        assert!(!json.contains("payload"));
    }
}

//! JSON frame types for the browser-facing channel.
//!
//! Every frame is a JSON object with an `"event"` field naming the event and a
//! `"data"` field carrying its payload:
//!
//! ```json
//! {"event":"key","data":"left"}
//! {"event":"status","data":200}
//! ```
//!
//! Serde's adjacently tagged representation (`tag = "event", content = "data"`)
//! produces this shape directly.
//!
//! The `key` payload is kept as a raw, optional string.  Deciding whether the
//! name is acceptable is the relay session's job, not the decoder's, so a
//! frame such as `{"event":"key","data":"escape"}` decodes successfully and is
//! dropped one layer up.

use serde::{Deserialize, Serialize};

/// Status code sent once to every client immediately after it connects.
pub const STATUS_CONNECTED: u16 = 200;

/// Events a browser can send to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "lowercase")]
pub enum ClientEvent {
    /// The user tapped a button.  `None` when the page sent `null`.
    Key(Option<String>),
}

impl ClientEvent {
    /// Returns the raw key name carried by a `key` event, if any.
    pub fn key_name(&self) -> Option<&str> {
        match self {
            ClientEvent::Key(name) => name.as_deref(),
        }
    }
}

/// Events the host sends to a browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "lowercase")]
pub enum ServerEvent {
    /// Connection status signal.
    Status(u16),
}

impl ServerEvent {
    /// The status signal emitted when a session enters the connected state.
    pub fn connected() -> Self {
        ServerEvent::Status(STATUS_CONNECTED)
    }
}

/// Decodes one text frame received from a browser.
///
/// # Errors
///
/// Returns the underlying [`serde_json::Error`] if the frame is not valid JSON
/// or does not describe a known event with a string-or-null payload.
pub fn decode_client_event(text: &str) -> Result<ClientEvent, serde_json::Error> {
    serde_json::from_str(text)
}

/// Encodes one event for sending to a browser as a text frame.
///
/// # Errors
///
/// Returns the underlying [`serde_json::Error`] if serialization fails.
pub fn encode_server_event(event: &ServerEvent) -> Result<String, serde_json::Error> {
    serde_json::to_string(event)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_event_decodes_name() {
        // Arrange
        let json = r#"{"event":"key","data":"left"}"#;

        // Act
        let event = decode_client_event(json).unwrap();

        // Assert
        assert_eq!(event, ClientEvent::Key(Some("left".to_string())));
        assert_eq!(event.key_name(), Some("left"));
    }

    #[test]
    fn test_key_event_with_null_data_has_no_name() {
        let event = decode_client_event(r#"{"event":"key","data":null}"#).unwrap();
        assert_eq!(event.key_name(), None);
    }

    #[test]
    fn test_key_event_outside_allowed_set_still_decodes() {
        // Admission control happens in the relay session, not the decoder.
        let event = decode_client_event(r#"{"event":"key","data":"escape"}"#).unwrap();
        assert_eq!(event.key_name(), Some("escape"));
    }

    #[test]
    fn test_key_event_with_empty_string_decodes_to_empty_name() {
        let event = decode_client_event(r#"{"event":"key","data":""}"#).unwrap();
        assert_eq!(event.key_name(), Some(""));
    }

    #[test]
    fn test_numeric_key_payload_is_rejected() {
        assert!(decode_client_event(r#"{"event":"key","data":37}"#).is_err());
    }

    #[test]
    fn test_unknown_event_is_rejected() {
        assert!(decode_client_event(r#"{"event":"mouse","data":"left"}"#).is_err());
    }

    #[test]
    fn test_non_json_frame_is_rejected() {
        assert!(decode_client_event("left").is_err());
    }

    #[test]
    fn test_status_event_encodes_with_event_and_data_fields() {
        // Arrange
        let event = ServerEvent::connected();

        // Act
        let json = encode_server_event(&event).unwrap();

        // Assert
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["event"], "status");
        assert_eq!(value["data"], 200);
    }

    #[test]
    fn test_connected_status_is_200() {
        assert_eq!(ServerEvent::connected(), ServerEvent::Status(200));
    }
}

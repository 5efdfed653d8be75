//! Real-time channel protocol between the control page and the host.
//!
//! The channel carries exactly two events:
//!
//! | Event    | Direction        | Payload                         |
//! |----------|------------------|---------------------------------|
//! | `key`    | browser → host   | key name string, e.g. `"left"`  |
//! | `status` | host → browser   | numeric code, `200` on connect  |
//!
//! Delivery is fire-and-forget.  There are no acknowledgments, sequence
//! numbers or request ids; the host never answers a `key` event.

pub mod messages;

pub use messages::{decode_client_event, encode_server_event, ClientEvent, ServerEvent};

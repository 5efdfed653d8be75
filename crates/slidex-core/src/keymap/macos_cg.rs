//! Allowed key to macOS CGKeyCode translation table.
//!
//! CGKeyCode values are defined in Carbon Events.h (HIToolbox framework).
//! `osascript` passes them to System Events via `key code <n>`.

use crate::keys::AllowedKey;

/// Translates an [`AllowedKey`] to a macOS `CGKeyCode` value.
pub fn cgkeycode(key: AllowedKey) -> u16 {
    match key {
        AllowedKey::Space => 0x31, // kVK_Space
        AllowedKey::Left => 0x7B,  // kVK_LeftArrow
        AllowedKey::Right => 0x7C, // kVK_RightArrow
        AllowedKey::Down => 0x7D,  // kVK_DownArrow
        AllowedKey::Up => 0x7E,    // kVK_UpArrow
    }
}

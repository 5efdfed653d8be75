//! Key name translation tables for the host key-simulation utilities.
//!
//! Each platform's utility names keys differently.  The tables are total over
//! [`AllowedKey`]: every allowed key has a mapping on every platform, so the
//! lookups return plain values rather than `Option`.

pub mod linux_x11;
pub mod macos_cg;
pub mod windows_sendkeys;

use crate::keys::AllowedKey;

/// Unified key mapper providing all translation directions.
pub struct KeyMapper;

impl KeyMapper {
    /// Translates an [`AllowedKey`] to the X11 keysym name `xdotool key` expects.
    pub fn to_x11_keysym_name(key: AllowedKey) -> &'static str {
        linux_x11::keysym_name(key)
    }

    /// Translates an [`AllowedKey`] to a macOS `CGKeyCode` value.
    pub fn to_macos_cgkeycode(key: AllowedKey) -> u16 {
        macos_cg::cgkeycode(key)
    }

    /// Translates an [`AllowedKey`] to a Windows Script Host `SendKeys` code.
    pub fn to_windows_sendkeys(key: AllowedKey) -> &'static str {
        windows_sendkeys::sendkeys_code(key)
    }
}

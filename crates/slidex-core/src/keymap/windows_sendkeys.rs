//! Allowed key to Windows `SendKeys` code table.
//!
//! Codes follow the `WScript.Shell.SendKeys` syntax: named keys go in braces,
//! printable characters are sent as themselves.

use crate::keys::AllowedKey;

/// Translates an [`AllowedKey`] to its `SendKeys` code.
pub fn sendkeys_code(key: AllowedKey) -> &'static str {
    match key {
        AllowedKey::Left => "{LEFT}",
        AllowedKey::Right => "{RIGHT}",
        AllowedKey::Up => "{UP}",
        AllowedKey::Down => "{DOWN}",
        AllowedKey::Space => " ",
    }
}

//! Allowed key to X11 keysym name table for Linux hosts.
//!
//! `xdotool key <name>` resolves the name through `XStringToKeysym`, so the
//! strings here are the keysym names from X11/keysymdef.h with the `XK_`
//! prefix removed.  Names are case-sensitive: `Left` is the arrow key, while
//! `left` is not a keysym at all.

use crate::keys::AllowedKey;

/// Translates an [`AllowedKey`] to its X11 keysym name.
pub fn keysym_name(key: AllowedKey) -> &'static str {
    match key {
        AllowedKey::Left => "Left",   // XK_Left  0xFF51
        AllowedKey::Up => "Up",       // XK_Up    0xFF52
        AllowedKey::Right => "Right", // XK_Right 0xFF53
        AllowedKey::Down => "Down",   // XK_Down  0xFF54
        AllowedKey::Space => "space", // XK_space 0x0020
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_use_capitalised_keysym_names() {
        assert_eq!(keysym_name(AllowedKey::Left), "Left");
        assert_eq!(keysym_name(AllowedKey::Up), "Up");
        assert_eq!(keysym_name(AllowedKey::Right), "Right");
        assert_eq!(keysym_name(AllowedKey::Down), "Down");
    }

    #[test]
    fn test_space_uses_lowercase_keysym_name() {
        assert_eq!(keysym_name(AllowedKey::Space), "space");
    }
}

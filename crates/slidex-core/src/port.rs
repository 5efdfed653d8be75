//! Listening port validation.
//!
//! The startup prompt accepts a port typed by the user.  Validation is a pure
//! function with one diagnostic per failure mode; the prompt prints the
//! diagnostic and asks again.
//!
//! Ports below 1024 are refused because binding them needs root on Unix.

use thiserror::Error;

/// Port used when the user just presses Enter at the prompt.
pub const DEFAULT_PORT: u16 = 8080;

/// Lowest port accepted (first unprivileged port).
pub const MIN_PORT: u16 = 1024;

/// Highest port accepted.
pub const MAX_PORT: u16 = 65535;

/// Why a typed port was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PortError {
    /// The input contained something other than ASCII digits (or was empty).
    #[error("Port number should be only numbers")]
    NotNumeric,
    /// The input was numeric but outside `MIN_PORT..=MAX_PORT`.
    #[error("Port Number should be within (1024 - 65535) Due to root privilege requirement")]
    OutOfRange,
}

/// Validates a port typed by the user.
///
/// The input must consist only of ASCII digits and name a port in
/// `1024..=65535`.  No trimming is done here; the caller decides how to treat
/// surrounding whitespace and empty input.
///
/// # Errors
///
/// - [`PortError::NotNumeric`] for empty input or any non-digit character
///   (including signs, spaces and decimal points).
/// - [`PortError::OutOfRange`] for digit strings outside the accepted range,
///   including values too large for any integer type.
pub fn validate_port(input: &str) -> Result<u16, PortError> {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PortError::NotNumeric);
    }

    // Digits only, so a parse failure can only be overflow.
    let value: u32 = input.parse().map_err(|_| PortError::OutOfRange)?;
    match u16::try_from(value) {
        Ok(port) if port >= MIN_PORT => Ok(port),
        _ => Err(PortError::OutOfRange),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

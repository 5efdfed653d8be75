//! Terminal QR code for the LAN URL.
//!
//! Rendered with Unicode half blocks (two modules per character cell) and
//! inverted colours, so the code reads correctly on the usual light-on-dark
//! terminal and phone cameras can scan it straight off the screen.

use qrcode::render::unicode;
use qrcode::types::QrError;
use qrcode::QrCode;

/// Renders `text` as a QR code made of Unicode block characters.
///
/// # Errors
///
/// Returns [`QrError`] if `text` does not fit in a QR code.
pub fn render_qr(text: &str) -> Result<String, QrError> {
    let code = QrCode::new(text.as_bytes())?;
    Ok(code
        .render::<unicode::Dense1x2>()
        .dark_color(unicode::Dense1x2::Light)
        .light_color(unicode::Dense1x2::Dark)
        .quiet_zone(true)
        .build())
}

use std::io::Cursor;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use image::{ImageFormat, Luma};
use qrcode::QrCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QrImageError {
    #[error("QR code generation error: {0}")]
    Encode(String),
    #[error("QR image rendering error: {0}")]
    Render(#[from] image::ImageError),
}

/// Encode `payload` as a QR code and return it as a PNG data URL.
pub fn render_data_url(payload: &str) -> Result<String, QrImageError> {
    let qr_code =
        QrCode::new(payload.as_bytes()).map_err(|e| QrImageError::Encode(e.to_string()))?;

    let image = qr_code
        .render::<Luma<u8>>()
        .min_dimensions(200, 200)
        .quiet_zone(true)
        .build();

    let mut png = Vec::new();
    image.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

    Ok(format!("data:image/png;base64,{}", STANDARD.encode(png)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;

    #[test]
    fn renders_png_data_url() {
        let data_url = render_data_url("https://example.com/r/abc").unwrap();

        let encoded = data_url
            .strip_prefix("data:image/png;base64,")
            .expect("png data url prefix");
        let png = STANDARD.decode(encoded).unwrap();
        // PNG signature
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn oversized_payload_fails_to_encode() {
        let payload = "x".repeat(8000);

        assert!(matches!(
            render_data_url(&payload),
            Err(QrImageError::Encode(_))
        ));
    }
}

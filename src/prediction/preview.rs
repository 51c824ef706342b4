// SPDX-License-Identifier: MPL-2.0
//! Self-contained preview of the selected image.

use base64::Engine as _;
use image_rs::ImageReader;
use std::io::Cursor;

/// Renderable preview that does not depend on the original file handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    data_uri: String,
    dimensions: Option<(u32, u32)>,
}

impl Preview {
    /// `data:<media type>;base64,<payload>` form of the image.
    #[must_use]
    pub fn data_uri(&self) -> &str {
        &self.data_uri
    }

    /// Image bytes carried by the data URI, for widgets that need raw bytes.
    #[must_use]
    pub fn payload(&self) -> Option<Vec<u8>> {
        let (_, encoded) = self.data_uri.split_once(";base64,")?;
        base64::engine::general_purpose::STANDARD.decode(encoded).ok()
    }

    /// Pixel size, when the header could be decoded.
    #[must_use]
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.dimensions
    }
}

/// Builds the preview for a selected payload.
///
/// Undecodable bytes still produce a data URI; only the dimensions are lost.
#[must_use]
pub fn render(bytes: &[u8], media_type: &str) -> Preview {
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    let data_uri = format!("data:{media_type};base64,{encoded}");

    let dimensions = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .ok()
        .and_then(|reader| reader.into_dimensions().ok());

    Preview {
        data_uri,
        dimensions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image_rs::DynamicImage::new_luma8(width, height);
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image_rs::ImageFormat::Png)
            .expect("failed to encode png");
        out.into_inner()
    }

    #[test]
    fn data_uri_carries_media_type_and_payload() {
        let preview = render(b"abc", "image/png");
        assert_eq!(preview.data_uri(), "data:image/png;base64,YWJj");
    }

    #[test]
    fn payload_recovers_original_bytes() {
        let bytes = png_bytes(4, 4);
        let preview = render(&bytes, "image/png");
        assert_eq!(preview.payload(), Some(bytes));
    }

    #[test]
    fn decodable_image_reports_dimensions() {
        let preview = render(&png_bytes(28, 14), "image/png");
        assert_eq!(preview.dimensions(), Some((28, 14)));
        assert!(preview.data_uri().starts_with("data:image/png;base64,"));
    }

    #[test]
    fn garbage_bytes_still_yield_preview() {
        let preview = render(&[0, 1, 2, 3], "image/png");
        assert!(!preview.data_uri().is_empty());
        assert_eq!(preview.dimensions(), None);
    }
}

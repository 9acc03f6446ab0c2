//! Checks on uploaded project images before they leave for the image host.

use image::ImageFormat;

use crate::error::CoreError;

/// Default upload cap (5 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// An accepted image format, detected from the file's leading bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SniffedImage {
    pub mime: &'static str,
    pub extension: &'static str,
}

/// Identify the image format from its magic bytes.
///
/// Only PNG, JPEG, WebP and GIF are accepted. The declared content type of
/// the upload is not trusted.
pub fn sniff_image(bytes: &[u8]) -> Result<SniffedImage, CoreError> {
    if bytes.is_empty() {
        return Err(CoreError::Validation("Uploaded file is empty".into()));
    }

    let format = image::guess_format(bytes).map_err(|_| {
        CoreError::Validation("Uploaded file is not a recognized image".into())
    })?;

    let sniffed = match format {
        ImageFormat::Png => SniffedImage { mime: "image/png", extension: "png" },
        ImageFormat::Jpeg => SniffedImage { mime: "image/jpeg", extension: "jpg" },
        ImageFormat::WebP => SniffedImage { mime: "image/webp", extension: "webp" },
        ImageFormat::Gif => SniffedImage { mime: "image/gif", extension: "gif" },
        other => {
            return Err(CoreError::Validation(format!(
                "Unsupported image format {other:?}. Use PNG, JPEG, WebP or GIF"
            )))
        }
    };

    Ok(sniffed)
}

/// Reject uploads larger than `max_bytes`.
pub fn check_upload_size(len: usize, max_bytes: usize) -> Result<(), CoreError> {
    if len > max_bytes {
        return Err(CoreError::Validation(format!(
            "File exceeds the {max_bytes} byte upload limit"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    const PNG_HEADER: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";
    const JPEG_HEADER: &[u8] = b"\xFF\xD8\xFF\xE0\0\x10JFIF\0";
    const GIF_HEADER: &[u8] = b"GIF89a\x01\0\x01\0";
    const WEBP_HEADER: &[u8] = b"RIFF\x24\0\0\0WEBPVP8 ";

    #[test]
    fn accepted_formats_detected() {
        assert_eq!(sniff_image(PNG_HEADER).unwrap().mime, "image/png");
        assert_eq!(sniff_image(JPEG_HEADER).unwrap().extension, "jpg");
        assert_eq!(sniff_image(GIF_HEADER).unwrap().mime, "image/gif");
        assert_eq!(sniff_image(WEBP_HEADER).unwrap().mime, "image/webp");
    }

    #[test]
    fn text_is_rejected() {
        assert_matches!(
            sniff_image(b"<html>not an image</html>"),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn empty_file_is_rejected() {
        assert_matches!(sniff_image(&[]), Err(CoreError::Validation(m)) if m.contains("empty"));
    }

    #[test]
    fn size_limit_is_inclusive() {
        assert!(check_upload_size(10, 10).is_ok());
        assert_matches!(check_upload_size(11, 10), Err(CoreError::Validation(_)));
    }
}

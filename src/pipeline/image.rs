//! Upload checks for the image handed to the transcription model.

use std::path::Path;

use crate::errors::InkcheckError;
use crate::llm::ImageInput;

/// Inline image payloads above this size are refused by the model API.
pub const MAX_IMAGE_BYTES: usize = 20 * 1024 * 1024;

const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF];
const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Detect the MIME type from the leading bytes. Only JPEG and PNG are accepted.
pub fn sniff_mime_type(bytes: &[u8]) -> Option<&'static str> {
    if bytes.starts_with(JPEG_MAGIC) {
        Some("image/jpeg")
    } else if bytes.starts_with(PNG_MAGIC) {
        Some("image/png")
    } else {
        None
    }
}

/// Accepted upload extensions.
pub fn has_image_extension(path: &Path) -> bool {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    matches!(ext.as_str(), "jpg" | "jpeg" | "png")
}

/// Validate raw upload bytes and wrap them for the provider.
/// `name` is only used in error messages.
pub fn load_image(bytes: Vec<u8>, name: &str) -> Result<ImageInput, InkcheckError> {
    if bytes.is_empty() {
        return Err(InkcheckError::InvalidImage(format!("{} is empty", name)));
    }
    if bytes.len() > MAX_IMAGE_BYTES {
        return Err(InkcheckError::InvalidImage(format!(
            "{} is {} bytes, limit is {}",
            name,
            bytes.len(),
            MAX_IMAGE_BYTES
        )));
    }

    let mime_type = sniff_mime_type(&bytes).ok_or_else(|| {
        InkcheckError::InvalidImage(format!(
            "Unable to identify {}. Upload a valid JPG, JPEG, or PNG file",
            name
        ))
    })?;

    Ok(ImageInput { mime_type, data: bytes })
}

/// Read an image from disk, rejecting unsupported extensions before reading.
pub async fn read_image(path: &Path) -> Result<ImageInput, InkcheckError> {
    if !has_image_extension(path) {
        return Err(InkcheckError::InvalidImage(format!(
            "{} must be a .jpg, .jpeg, or .png file",
            path.display()
        )));
    }
    let bytes = tokio::fs::read(path).await?;
    load_image(bytes, &path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn tiny_png() -> Vec<u8> {
        let mut bytes = PNG_MAGIC.to_vec();
        bytes.extend_from_slice(b"\0\0\0\rIHDR");
        bytes
    }

    #[test]
    fn test_sniff_known_types() {
        assert_eq!(sniff_mime_type(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00]), Some("image/jpeg"));
        assert_eq!(sniff_mime_type(&tiny_png()), Some("image/png"));
        assert_eq!(sniff_mime_type(b"GIF89a"), None);
        assert_eq!(sniff_mime_type(&[]), None);
    }

    #[test]
    fn test_extensions() {
        assert!(has_image_extension(&PathBuf::from("notes.JPG")));
        assert!(has_image_extension(&PathBuf::from("page.png")));
        assert!(!has_image_extension(&PathBuf::from("scan.gif")));
        assert!(!has_image_extension(&PathBuf::from("noext")));
    }

    #[test]
    fn test_load_rejects_unknown_bytes() {
        let err = load_image(b"plain text".to_vec(), "upload").unwrap_err();
        assert!(matches!(err, InkcheckError::InvalidImage(_)));
        assert!(err.to_string().contains("JPG, JPEG, or PNG"));
    }

    #[test]
    fn test_load_rejects_empty() {
        assert!(matches!(load_image(Vec::new(), "upload"), Err(InkcheckError::InvalidImage(_))));
    }

    #[test]
    fn test_load_accepts_png() {
        let image = load_image(tiny_png(), "upload").unwrap();
        assert_eq!(image.mime_type, "image/png");
    }

    #[tokio::test]
    async fn test_read_rejects_extension_before_io() {
        let err = read_image(&PathBuf::from("/no/such/file.bmp")).await.unwrap_err();
        assert!(matches!(err, InkcheckError::InvalidImage(_)));
    }
}

//! Image selection: the one file a session submits.

use std::path::Path;

use log::debug;

use crate::error::{ClientError, ClientResult};

pub const ALLOWED_MIME_TYPES: &[&str] = &["image/jpeg", "image/png", "image/gif"];
pub const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    name: String,
    mime_type: String,
    bytes: Vec<u8>,
}

impl ImageFile {
    /// Builds an image from in-memory bytes, applying the same constraints as a file on disk.
    pub fn from_bytes(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> ClientResult<Self> {
        let name = name.into();
        let mime_type = mime_type.into();

        if !ALLOWED_MIME_TYPES.contains(&mime_type.as_str()) {
            return Err(ClientError::UnsupportedMediaType(mime_type));
        }
        if bytes.len() as u64 > MAX_FILE_SIZE {
            return Err(ClientError::FileTooLarge(bytes.len() as u64));
        }

        Ok(Self {
            name,
            mime_type,
            bytes,
        })
    }

    pub async fn from_path(path: impl AsRef<Path>) -> ClientResult<Self> {
        let path = path.as_ref();
        let mime_type = mime_guess::from_path(path)
            .first_raw()
            .map(|m| m.to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());

        if !ALLOWED_MIME_TYPES.contains(&mime_type.as_str()) {
            return Err(ClientError::UnsupportedMediaType(mime_type));
        }

        let size = tokio::fs::metadata(path).await?.len();
        if size > MAX_FILE_SIZE {
            return Err(ClientError::FileTooLarge(size));
        }

        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());

        debug!("Selected {} ({}, {} bytes)", name, mime_type, bytes.len());
        Self::from_bytes(name, mime_type, bytes)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_rejects_non_image_mime() {
        let result = ImageFile::from_bytes("notes.txt", "text/plain", b"hello".to_vec());
        assert!(matches!(result, Err(ClientError::UnsupportedMediaType(m)) if m == "text/plain"));

        let webp = ImageFile::from_bytes("photo.webp", "image/webp", vec![0; 4]);
        assert!(matches!(webp, Err(ClientError::UnsupportedMediaType(_))));
    }

    #[test]
    fn test_rejects_oversized_image() {
        let bytes = vec![0u8; MAX_FILE_SIZE as usize + 1];
        let result = ImageFile::from_bytes("big.png", "image/png", bytes);
        assert!(matches!(result, Err(ClientError::FileTooLarge(_))));

        let exact = vec![0u8; MAX_FILE_SIZE as usize];
        assert!(ImageFile::from_bytes("edge.png", "image/png", exact).is_ok());
    }

    #[tokio::test]
    async fn test_from_path_detects_mime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cat.jpg");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(&[0xFF, 0xD8, 0xFF, 0xE0]).unwrap();

        let image = ImageFile::from_path(&path).await.unwrap();
        assert_eq!(image.name(), "cat.jpg");
        assert_eq!(image.mime_type(), "image/jpeg");
        assert_eq!(image.bytes(), &[0xFF, 0xD8, 0xFF, 0xE0]);
    }

    #[tokio::test]
    async fn test_from_path_rejects_other_extensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.pdf");
        std::fs::write(&path, b"%PDF").unwrap();

        let result = ImageFile::from_path(&path).await;
        assert!(matches!(result, Err(ClientError::UnsupportedMediaType(m)) if m == "application/pdf"));
    }

    #[tokio::test]
    async fn test_from_path_missing_file() {
        let result = ImageFile::from_path("/nonexistent/dir/cat.png").await;
        assert!(matches!(result, Err(ClientError::Io(_))));
    }
}

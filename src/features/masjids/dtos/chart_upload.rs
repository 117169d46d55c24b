//! Checks applied to a timing chart upload before anything is stored.

use utoipa::ToSchema;

use crate::core::error::Result;
use crate::shared::constants::{
    ALLOWED_CHART_EXTENSIONS, ALLOWED_CHART_MIME_TYPES, MAX_CHART_FILE_SIZE,
};
use crate::shared::validation::{check, is_alphanumeric};

pub const MSG_INVALID_MASJID_ID: &str = "Invalid Masjid ID";
pub const MSG_INVALID_FILE_TYPE: &str = "Invalid file type";
pub const MSG_FILE_TOO_LARGE: &str = "File size exceeds the limit";

/// Multipart form for a timing chart upload, for Swagger UI only.
/// The handler reads the `Multipart` stream directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadTimingChartDto {
    /// png, jpeg or jpg image, at most 2 MiB
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file: String,
}

/// The `file` part of a timing chart upload
#[derive(Debug, Clone)]
pub struct ChartFile {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl ChartFile {
    /// Lowercased text after the last `.`; a name without a dot is all extension
    pub fn extension(&self) -> String {
        self.file_name
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase()
    }

    /// Accept the file or say why not. Type is checked before size.
    pub fn check(&self) -> Result<()> {
        let extension_ok = ALLOWED_CHART_EXTENSIONS.contains(&self.extension().as_str());
        let mime_ok = ALLOWED_CHART_MIME_TYPES.contains(&self.content_type.as_str());
        check(extension_ok && mime_ok, MSG_INVALID_FILE_TYPE)?;
        check(self.data.len() <= MAX_CHART_FILE_SIZE, MSG_FILE_TOO_LARGE)
    }
}

pub fn check_masjid_id(id: &str) -> Result<()> {
    check(is_alphanumeric(id), MSG_INVALID_MASJID_ID)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, content_type: &str, size: usize) -> ChartFile {
        ChartFile {
            file_name: name.to_string(),
            content_type: content_type.to_string(),
            data: vec![0; size],
        }
    }

    #[test]
    fn test_accepts_images() {
        assert!(file("chart.png", "image/png", 1024).check().is_ok());
        assert!(file("chart.JPG", "image/jpeg", 1024).check().is_ok());
        assert!(file("my.chart.jpeg", "image/jpg", 1024).check().is_ok());
    }

    #[test]
    fn test_rejects_other_types() {
        let err = file("chart.gif", "image/gif", 10).check().unwrap_err();
        assert_eq!(err.message(), MSG_INVALID_FILE_TYPE);
        assert_eq!(err.status_code().as_u16(), 400);

        // extension and MIME must both match
        assert!(file("chart.png", "application/pdf", 10).check().is_err());
        assert!(file("chart.pdf", "image/png", 10).check().is_err());
        assert!(file("chart", "image/png", 10).check().is_err());
    }

    #[test]
    fn test_dotless_name_is_its_own_extension() {
        assert_eq!(file("PNG", "image/png", 10).extension(), "png");
        assert!(file("png", "image/png", 10).check().is_ok());
        assert!(file("jpeg", "image/jpeg", 10).check().is_ok());
    }

    #[test]
    fn test_size_limit() {
        assert!(file("chart.png", "image/png", MAX_CHART_FILE_SIZE)
            .check()
            .is_ok());

        let err = file("chart.png", "image/png", 3 * 1024 * 1024)
            .check()
            .unwrap_err();
        assert_eq!(err.message(), MSG_FILE_TOO_LARGE);
    }

    #[test]
    fn test_type_checked_before_size() {
        let err = file("chart.gif", "image/gif", 3 * 1024 * 1024)
            .check()
            .unwrap_err();
        assert_eq!(err.message(), MSG_INVALID_FILE_TYPE);
    }

    #[test]
    fn test_masjid_id() {
        assert!(check_masjid_id("abc123").is_ok());
        assert_eq!(
            check_masjid_id("abc-123").unwrap_err().message(),
            MSG_INVALID_MASJID_ID
        );
    }
}

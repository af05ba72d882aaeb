// Advisory client-side validation. The server remains authoritative; these
// checks exist to reject obviously bad input before a request goes out.

use infer::Infer;

/// Maximum accepted upload size for story and profile images.
pub const MAX_IMAGE_SIZE: usize = 5 * 1024 * 1024;

#[derive(Debug)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Accumulates per-field validation failures.
#[derive(Debug, Default)]
pub struct ValidationResult {
    errors: Vec<FieldError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, field: &str, message: &str) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.message.clone()).collect()
    }

    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
    }

    /// Converts into a `Result`, surfacing the first failure's message.
    pub fn into_result(self) -> Result<(), super::error::ApiError> {
        match self.errors.first() {
            None => Ok(()),
            Some(first) => Err(super::error::ApiError::Validation(first.message.clone())),
        }
    }
}

pub trait Validator<T: ?Sized> {
    fn validate(&self, data: &T) -> ValidationResult;
}

/// Content-sniffs an image upload and enforces the fixed type set and size
/// limit. Used by both the profile-picture and story-image paths, always
/// before any network call.
pub fn validate_image_upload(data: &[u8]) -> ValidationResult {
    let mut result = ValidationResult::new();

    let infer = Infer::new();
    let is_allowed = infer.get(data).is_some_and(|info| {
        matches!(
            info.mime_type(),
            "image/jpeg" | "image/jpg" | "image/png" | "image/gif"
        )
    });
    if !is_allowed {
        result.add_error("image", "Invalid image type. Allowed types: JPG, PNG, GIF");
    }

    if data.len() > MAX_IMAGE_SIZE {
        result.add_error("image", "Image size must be less than 5MB");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimal valid PNG signature plus IHDR header bytes.
    fn png_bytes(len: usize) -> Vec<u8> {
        let mut data = vec![
            0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48,
            0x44, 0x52,
        ];
        data.resize(len.max(data.len()), 0);
        data
    }

    #[test]
    fn accepts_small_png() {
        let result = validate_image_upload(&png_bytes(1024));
        assert!(result.is_valid());
    }

    #[test]
    fn rejects_unknown_content() {
        let result = validate_image_upload(b"definitely not an image");
        assert!(!result.is_valid());
        assert!(result.messages()[0].contains("Invalid image type"));
    }

    #[test]
    fn rejects_oversized_image() {
        let result = validate_image_upload(&png_bytes(6 * 1024 * 1024));
        assert!(!result.is_valid());
        assert!(result
            .messages()
            .iter()
            .any(|m| m == "Image size must be less than 5MB"));
    }

    #[test]
    fn merge_accumulates_errors() {
        let mut a = ValidationResult::new();
        a.add_error("title", "Title is required");
        let mut b = ValidationResult::new();
        b.add_error("content", "Content is required");
        a.merge(b);
        assert_eq!(a.errors().len(), 2);
        assert!(!a.is_valid());
    }
}

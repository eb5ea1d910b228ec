//! Attachment checks for the registration form.

use thiserror::Error;

pub const MAX_PHOTO_BYTES: u64 = 5 * 1024 * 1024;
pub const MAX_FLYER_BYTES: u64 = 10 * 1024 * 1024;

const IMAGE_TYPES: [&str; 4] = ["image/jpeg", "image/jpg", "image/png", "image/webp"];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum UploadError {
    #[error("파일 크기는 {}MB 이하여야 합니다.", .max_bytes / (1024 * 1024))]
    TooLarge { max_bytes: u64 },

    #[error("{allowed} 형식만 업로드 가능합니다.")]
    UnsupportedType { allowed: &'static str },
}

/// Candidate photo: JPG, PNG or WebP up to 5 MB.
pub fn validate_image(mime_type: &str, size: u64) -> Result<(), UploadError> {
    if size > MAX_PHOTO_BYTES {
        return Err(UploadError::TooLarge {
            max_bytes: MAX_PHOTO_BYTES,
        });
    }
    if !IMAGE_TYPES.contains(&mime_type) {
        return Err(UploadError::UnsupportedType {
            allowed: "JPG, PNG, WebP",
        });
    }
    Ok(())
}

/// Election flyer: an image or a PDF up to 10 MB.
pub fn validate_flyer(mime_type: &str, size: u64) -> Result<(), UploadError> {
    if size > MAX_FLYER_BYTES {
        return Err(UploadError::TooLarge {
            max_bytes: MAX_FLYER_BYTES,
        });
    }
    if !IMAGE_TYPES.contains(&mime_type) && mime_type != "application/pdf" {
        return Err(UploadError::UnsupportedType {
            allowed: "JPG, PNG, WebP, PDF",
        });
    }
    Ok(())
}

/// Lower-cased text after the last dot, or empty.
pub fn extension_of(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((_, ext)) => ext.to_lowercase(),
        None => String::new(),
    }
}

//! Validation rules for prompt image attachments.
//!
//! An attachment batch is validated as a whole before any file is written:
//! either every file in the batch is acceptable or the batch is rejected and
//! nothing touches disk or the database.

/// Maximum number of images a single prompt may carry.
pub const MAX_IMAGES_PER_PROMPT: usize = 8;

/// File extensions accepted for upload (compared case-insensitively).
pub const ALLOWED_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

/// An uploaded file as received from a multipart request, prior to storage.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    /// Client-supplied filename; only its extension is trusted.
    pub filename: String,
    /// Declared mimetype from the multipart part, if any.
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("A prompt may have at most {MAX_IMAGES_PER_PROMPT} images ({current} existing, {adding} uploaded).")]
    LimitExceeded { current: usize, adding: usize },

    #[error("File '{filename}' is not an allowed image type.")]
    InvalidType { filename: String },
}

/// Extract the lowercased extension of a client filename, if it has one.
pub fn sanitized_extension(filename: &str) -> Option<String> {
    let (stem, ext) = filename.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Check a single file against the extension allow-list and declared mimetype.
fn is_acceptable(file: &UploadedImage) -> bool {
    let ext_ok = sanitized_extension(&file.filename)
        .is_some_and(|ext| ALLOWED_IMAGE_EXTENSIONS.contains(&ext.as_str()));
    let mime_ok = file
        .content_type
        .as_deref()
        .is_some_and(|ct| ct.starts_with("image/"));
    ext_ok && mime_ok
}

/// Validate an entire upload batch against a prompt's current image count.
///
/// Rejects the whole batch if it would push the prompt past
/// [`MAX_IMAGES_PER_PROMPT`] or if any file has a disallowed extension or a
/// non-`image/` mimetype. A valid batch returns `Ok(())`; callers may then
/// write files and insert rows.
pub fn validate_batch(current_count: usize, files: &[UploadedImage]) -> Result<(), ImageError> {
    if current_count + files.len() > MAX_IMAGES_PER_PROMPT {
        return Err(ImageError::LimitExceeded {
            current: current_count,
            adding: files.len(),
        });
    }
    for file in files {
        if !is_acceptable(file) {
            return Err(ImageError::InvalidType {
                filename: file.filename.clone(),
            });
        }
    }
    Ok(())
}

/// Generate a collision-resistant storage filename for an upload.
///
/// The client filename contributes only its extension; the rest is an opaque
/// random token, so stored names never collide and never leak user input.
pub fn storage_filename(original: &str) -> String {
    let token = uuid::Uuid::new_v4().simple();
    match sanitized_extension(original) {
        Some(ext) => format!("{token}.{ext}"),
        None => token.to_string(),
    }
}

// SPDX-License-Identifier: MPL-2.0
//! File acquisition and validation.
//!
//! Drops and picker results arrive as paths. They are read into
//! [`CandidateFile`]s off the update loop, then validated into a
//! [`SelectedFile`] by the workflow. Only `image/*` media types are accepted.

use super::preview::Preview;
use crate::error::{PredictionError, Result};
use image_rs::ImageFormat;
use std::path::Path;
use std::sync::Arc;

/// Media type declared for files whose extension is not a known image format.
pub const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// Extensions offered by the file picker's image filter.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "tif", "tiff", "webp", "ico",
];

/// A file offered by a drop or picker event, not yet validated.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateFile {
    pub name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl CandidateFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }
}

/// The user's validated image selection.
///
/// The payload is shared immutably with the preview task and copied into each
/// outbound request, so the selection stays usable for a resubmission.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    name: String,
    media_type: String,
    bytes: Arc<[u8]>,
    preview: Option<Preview>,
}

impl SelectedFile {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    #[must_use]
    pub fn bytes(&self) -> &Arc<[u8]> {
        &self.bytes
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    #[must_use]
    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    /// Stores the rendered preview. Returns `false` if one was already set.
    pub(crate) fn set_preview(&mut self, preview: Preview) -> bool {
        if self.preview.is_some() {
            return false;
        }
        self.preview = Some(preview);
        true
    }
}

/// Returns whether a declared media type is accepted for upload.
#[must_use]
pub fn is_image_media_type(media_type: &str) -> bool {
    media_type.starts_with("image/")
}

/// Validates a candidate and turns it into a selection.
///
/// # Errors
///
/// Returns [`PredictionError::InvalidFileType`] when the declared media type
/// does not start with `image/`.
pub fn validate(candidate: CandidateFile) -> std::result::Result<SelectedFile, PredictionError> {
    if !is_image_media_type(&candidate.media_type) {
        return Err(PredictionError::InvalidFileType {
            media_type: candidate.media_type,
        });
    }

    Ok(SelectedFile {
        name: candidate.name,
        media_type: candidate.media_type,
        bytes: Arc::from(candidate.bytes),
        preview: None,
    })
}

/// Derives the declared media type of a path from its extension.
#[must_use]
pub fn media_type_for_path(path: &Path) -> &'static str {
    ImageFormat::from_path(path).map_or(FALLBACK_MEDIA_TYPE, |format| format.to_mime_type())
}

/// Reads a dropped or picked file into a candidate.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub async fn load_candidate(path: &Path) -> Result<CandidateFile> {
    let bytes = tokio::fs::read(path).await?;
    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());

    Ok(CandidateFile {
        name,
        media_type: media_type_for_path(path).to_string(),
        bytes,
    })
}

use serde::{Deserialize, Serialize};

/// Media types a supporting document may have.
pub const ALLOWED_MEDIA_TYPES: [&str; 3] = ["application/pdf", "image/jpeg", "image/png"];

/// Extensions offered by the file picker. Mirrors `ALLOWED_MEDIA_TYPES`.
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["pdf", "jpg", "jpeg", "png"];

/// A file offered by the user through the picker or a drop, before acceptance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateFile {
    pub name: String,
    pub size_bytes: u64,
    pub media_type: String,
}

impl CandidateFile {
    pub fn new(name: impl Into<String>, size_bytes: u64, media_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            media_type: media_type.into(),
        }
    }

    /// Media type without parameters, lowercased.
    pub fn essence(&self) -> String {
        self.media_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase()
    }

    pub fn is_allowed(&self) -> bool {
        let essence = self.essence();
        ALLOWED_MEDIA_TYPES.contains(&essence.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("Only PDF, JPG, and PNG files are allowed.")]
    UnsupportedFileType { name: String, media_type: String },

    #[error("Please select files to upload.")]
    EmptySelectionOnUpload,

    #[error("The upload could not be started: {message}")]
    SchedulerUnavailable { message: String },
}

impl IntakeError {
    /// Short machine-readable reason.
    pub fn reason(&self) -> &'static str {
        match self {
            IntakeError::UnsupportedFileType { .. } => "unsupported type",
            IntakeError::EmptySelectionOnUpload => "no files selected",
            IntakeError::SchedulerUnavailable { .. } => "scheduler unavailable",
        }
    }
}

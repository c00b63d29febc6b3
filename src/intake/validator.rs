use crate::intake::types::{CandidateFile, IntakeError};

/// Accepts the whole batch or none of it.
///
/// Candidates are checked in order and the first disallowed media type fails
/// the batch. An empty batch is accepted as an empty list.
pub fn validate(candidates: Vec<CandidateFile>) -> Result<Vec<CandidateFile>, IntakeError> {
    if let Some(rejected) = candidates.iter().find(|file| !file.is_allowed()) {
        tracing::warn!(
            file = %rejected.name,
            media_type = %rejected.media_type,
            batch_size = candidates.len(),
            "Rejecting batch with unsupported file type"
        );
        return Err(IntakeError::UnsupportedFileType {
            name: rejected.name.clone(),
            media_type: rejected.media_type.clone(),
        });
    }

    Ok(candidates)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub accepted_files: Vec<CandidateFile>,
    pub error_message: Option<String>,
}

impl SelectionState {
    /// Runs a new selection or drop through the validator.
    ///
    /// The previous error is always dropped first. On rejection the previously
    /// accepted files are kept as they were.
    pub fn apply(self, candidates: Vec<CandidateFile>) -> Self {
        let previous = self.accepted_files;
        match validate(candidates) {
            Ok(accepted_files) => Self {
                accepted_files,
                error_message: None,
            },
            Err(e) => Self {
                accepted_files: previous,
                error_message: Some(e.to_string()),
            },
        }
    }

    pub fn with_error(self, error: &IntakeError) -> Self {
        Self {
            error_message: Some(error.to_string()),
            ..self
        }
    }

    pub fn clear() -> Self {
        Self::default()
    }

    pub fn total_bytes(&self) -> u64 {
        self.accepted_files.iter().map(|f| f.size_bytes).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn pdf(name: &str) -> CandidateFile {
        CandidateFile::new(name, 2048, "application/pdf")
    }

    fn exe(name: &str) -> CandidateFile {
        CandidateFile::new(name, 4096, "application/x-msdownload")
    }

    #[test]
    fn accepts_allowed_batch_in_order() {
        let batch = vec![
            pdf("a.pdf"),
            CandidateFile::new("b.jpg", 10, "image/jpeg"),
            CandidateFile::new("c.png", 20, "image/png"),
        ];
        assert_eq!(validate(batch.clone()), Ok(batch));
    }

    #[test]
    fn empty_batch_is_accepted() {
        assert_eq!(validate(Vec::new()), Ok(Vec::new()));
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(2)]
    fn one_bad_file_rejects_batch_at_any_position(#[case] position: usize) {
        let mut batch = vec![pdf("a.pdf"), pdf("b.pdf")];
        batch.insert(position, exe("bad.exe"));

        let err = validate(batch).unwrap_err();
        assert_eq!(err.reason(), "unsupported type");
        assert_eq!(
            err,
            IntakeError::UnsupportedFileType {
                name: "bad.exe".into(),
                media_type: "application/x-msdownload".into(),
            }
        );
    }

    #[test]
    fn rejection_keeps_previous_selection() {
        let state = SelectionState::default().apply(vec![pdf("first.pdf")]);
        let state = state.apply(vec![pdf("a.pdf"), exe("b.exe")]);

        assert_eq!(state.accepted_files, vec![pdf("first.pdf")]);
        assert_eq!(
            state.error_message.as_deref(),
            Some("Only PDF, JPG, and PNG files are allowed.")
        );
    }

    #[test]
    fn new_selection_replaces_and_clears_error() {
        let state = SelectionState::default()
            .apply(vec![exe("b.exe")])
            .apply(vec![pdf("a.pdf")])
            .apply(vec![pdf("c.pdf"), pdf("d.pdf")]);

        assert_eq!(state.accepted_files, vec![pdf("c.pdf"), pdf("d.pdf")]);
        assert_eq!(state.error_message, None);
        assert_eq!(state.total_bytes(), 4096);
    }

    #[test]
    fn rejected_mixed_batch_leaves_empty_selection_empty() {
        let state = SelectionState::default().apply(vec![pdf("a.pdf"), exe("b.exe")]);
        assert!(state.accepted_files.is_empty());
        assert!(state.error_message.is_some());
    }
}

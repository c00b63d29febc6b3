use crate::intake::types::{CandidateFile, IntakeError};
use std::time::Duration;

pub const PROGRESS_STEP: u8 = 10;
pub const PROGRESS_COMPLETE: u8 = 100;
pub const TICK_PERIOD: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UploadProgress {
    #[default]
    Idle,
    InProgress {
        percent: u8,
    },
    Completed,
}

impl UploadProgress {
    /// Idle (or Completed) into InProgress at 0%.
    ///
    /// Fails without changing anything when nothing has been accepted.
    pub fn start(accepted: &[CandidateFile]) -> Result<Self, IntakeError> {
        if accepted.is_empty() {
            return Err(IntakeError::EmptySelectionOnUpload);
        }
        Ok(Self::InProgress { percent: 0 })
    }

    /// One scheduled increment. Only InProgress moves; reaching 100 completes.
    pub fn tick(self) -> Self {
        match self {
            Self::InProgress { percent } => {
                let next = percent.saturating_add(PROGRESS_STEP).min(PROGRESS_COMPLETE);
                if next >= PROGRESS_COMPLETE {
                    Self::Completed
                } else {
                    Self::InProgress { percent: next }
                }
            }
            other => other,
        }
    }

    pub fn percent(&self) -> u8 {
        match self {
            Self::Idle => 0,
            Self::InProgress { percent } => *percent,
            Self::Completed => PROGRESS_COMPLETE,
        }
    }

    pub fn succeeded(&self) -> bool {
        matches!(self, Self::Completed)
    }

    pub fn is_in_progress(&self) -> bool {
        matches!(self, Self::InProgress { .. })
    }

    pub fn get_progress_fraction(&self) -> f32 {
        f32::from(self.percent()) / f32::from(PROGRESS_COMPLETE)
    }

    /// Whether the bar is shown: strictly between 0 and 100.
    pub fn shows_bar(&self) -> bool {
        matches!(self, Self::InProgress { percent } if *percent > 0)
    }

    pub fn get_status_text(&self) -> String {
        match self {
            Self::Idle => String::new(),
            Self::InProgress { percent } => format!("{}% complete", percent),
            Self::Completed => "Upload Successful".to_string(),
        }
    }
}

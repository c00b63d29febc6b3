use crate::utils::color::{self, palette};
use eframe::egui::Color32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    InitialReview,
    EvidenceGathering,
    PreparingDecision,
    Complete,
    Neutral,
}

impl StatusTone {
    /// First matching phrase wins, in the order listed.
    pub fn from_status(status: &str) -> Self {
        if status.contains("Initial review") {
            Self::InitialReview
        } else if status.contains("Evidence gathering") {
            Self::EvidenceGathering
        } else if status.contains("Preparation for decision") {
            Self::PreparingDecision
        } else if status.contains("Complete") {
            Self::Complete
        } else {
            Self::Neutral
        }
    }

    pub fn fill(&self) -> Color32 {
        match self {
            Self::InitialReview => palette(color::GOLD_LIGHTER),
            Self::EvidenceGathering => palette(color::PRIMARY_ALT_LIGHTEST),
            Self::PreparingDecision => palette(color::GREEN_LIGHTEST),
            Self::Complete => palette(color::GREEN_LIGHTER),
            Self::Neutral => Color32::TRANSPARENT,
        }
    }
}

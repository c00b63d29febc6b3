use anyhow::Context;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const SAMPLE_CLAIMS: &str = include_str!("../../assets/claims.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub id: String,
    #[serde(rename = "type")]
    pub claim_type: String,
    pub date_filed: NaiveDate,
    pub status: String,
    pub estimated_completion: NaiveDate,
    #[serde(default)]
    pub required_actions: Vec<String>,
}

impl Claim {
    pub fn needs_action(&self) -> bool {
        !self.required_actions.is_empty()
    }
}

pub fn load_claims(json: &str) -> anyhow::Result<Vec<Claim>> {
    serde_json::from_str(json).context("Failed to parse claims data")
}

/// The mock claims bundled with the binary.
pub fn sample_claims() -> anyhow::Result<Vec<Claim>> {
    load_claims(SAMPLE_CLAIMS)
}

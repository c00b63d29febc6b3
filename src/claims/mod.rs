mod status;
mod types;

pub use status::StatusTone;
pub use types::{load_claims, sample_claims, Claim};

mod progress;
mod session;
pub mod source;
mod ticker;
mod types;
mod validator;

pub use progress::{UploadProgress, PROGRESS_COMPLETE, PROGRESS_STEP, TICK_PERIOD};
pub use session::{CandidateSource, IntakeSession};
pub use ticker::{
    ManualScheduler, ManualTask, ScheduledTask, Scheduler, Tick, TickerHandle, TokioScheduler,
};
pub use types::{CandidateFile, IntakeError, ALLOWED_EXTENSIONS, ALLOWED_MEDIA_TYPES};
pub use validator::{validate, SelectionState};

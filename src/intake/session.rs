use crate::intake::progress::{UploadProgress, TICK_PERIOD};
use crate::intake::ticker::{ScheduledTask, Scheduler, Tick, TokioScheduler};
use crate::intake::types::{CandidateFile, IntakeError};
use crate::intake::validator::SelectionState;
use derivative::Derivative;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateSource {
    Picker,
    Drop,
}

/// Single owner of the document intake state and its upload timer.
///
/// Every intent is applied through the pure transitions on `SelectionState`
/// and `UploadProgress`. At most one ticker is alive at a time, and it is
/// released on completion, on `clear`, and when the session is dropped.
#[derive(Derivative)]
#[derivative(Debug(bound = ""))]
pub struct IntakeSession<S: Scheduler = TokioScheduler> {
    selection: SelectionState,
    progress: UploadProgress,
    period: Duration,
    #[derivative(Debug = "ignore")]
    scheduler: S,
    #[derivative(Debug = "ignore")]
    ticker: Option<S::Task>,
    #[derivative(Debug = "ignore")]
    tick_receiver: Option<Receiver<Tick>>,
}

impl Default for IntakeSession<TokioScheduler> {
    fn default() -> Self {
        Self::new(TokioScheduler::new(), TICK_PERIOD)
    }
}

impl<S: Scheduler> IntakeSession<S> {
    pub fn new(scheduler: S, period: Duration) -> Self {
        Self {
            selection: SelectionState::default(),
            progress: UploadProgress::default(),
            period,
            scheduler,
            ticker: None,
            tick_receiver: None,
        }
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn accepted_files(&self) -> &[CandidateFile] {
        &self.selection.accepted_files
    }

    pub fn error_message(&self) -> Option<&str> {
        self.selection.error_message.as_deref()
    }

    pub fn progress(&self) -> UploadProgress {
        self.progress
    }

    pub fn is_uploading(&self) -> bool {
        self.progress.is_in_progress()
    }

    pub fn ticker_active(&self) -> bool {
        self.ticker.as_ref().is_some_and(|t| t.is_active())
    }

    pub fn select(&mut self, candidates: Vec<CandidateFile>) {
        self.apply_candidates(CandidateSource::Picker, candidates);
    }

    pub fn drop_files(&mut self, candidates: Vec<CandidateFile>) {
        self.apply_candidates(CandidateSource::Drop, candidates);
    }

    fn apply_candidates(&mut self, source: CandidateSource, candidates: Vec<CandidateFile>) {
        tracing::info!(?source, count = candidates.len(), "Validating candidate files");

        self.reset_display();

        let selection = std::mem::take(&mut self.selection);
        self.selection = selection.apply(candidates);

        match &self.selection.error_message {
            Some(error) => tracing::info!(%error, "Selection rejected"),
            None => tracing::info!(
                accepted = self.selection.accepted_files.len(),
                "Selection accepted"
            ),
        }
    }

    /// Drops the previous attempt's outcome: the error message and, once an
    /// upload has finished, its success. A running upload is left alone.
    pub fn reset_display(&mut self) {
        self.selection.error_message = None;
        if self.progress.succeeded() {
            self.progress = UploadProgress::Idle;
        }
    }

    /// A pick or drop whose files could not be read from disk.
    ///
    /// Counts as a new attempt: the previous outcome is reset and `message`
    /// becomes the only error shown. Accepted files are kept.
    pub fn report_unreadable(&mut self, source: CandidateSource, message: String) {
        tracing::warn!(?source, error = %message, "Candidate files could not be read");
        self.reset_display();
        self.selection.error_message = Some(message);
    }

    /// Starts the simulated upload of the accepted files.
    ///
    /// Ignored while an upload is already running.
    pub fn initiate_upload(&mut self) -> Result<(), IntakeError> {
        if self.progress.is_in_progress() {
            tracing::warn!(
                percent = self.progress.percent(),
                "Upload already in progress, ignoring request"
            );
            return Ok(());
        }

        let progress = match UploadProgress::start(&self.selection.accepted_files) {
            Ok(progress) => progress,
            Err(e) => {
                tracing::info!(reason = e.reason(), "Upload not started");
                let selection = std::mem::take(&mut self.selection);
                self.selection = selection.with_error(&e);
                return Err(e);
            }
        };

        let (sender, receiver) = mpsc::channel();
        let ticker = match self.scheduler.schedule_every(self.period, sender) {
            Ok(ticker) => ticker,
            Err(e) => {
                tracing::error!(error = %e, "Could not start upload ticker");
                let e = IntakeError::SchedulerUnavailable {
                    message: e.to_string(),
                };
                let selection = std::mem::take(&mut self.selection);
                self.selection = selection.with_error(&e);
                return Err(e);
            }
        };

        tracing::info!(
            files = self.selection.accepted_files.len(),
            bytes = self.selection.total_bytes(),
            period_ms = self.period.as_millis() as u64,
            "Starting upload"
        );

        self.selection.error_message = None;
        self.progress = progress;
        self.ticker = Some(ticker);
        self.tick_receiver = Some(receiver);
        Ok(())
    }

    /// Applies one tick. Ticks outside an upload are ignored.
    pub fn on_tick(&mut self) {
        if !self.progress.is_in_progress() {
            return;
        }

        self.progress = self.progress.tick();
        tracing::debug!(percent = self.progress.percent(), "Upload progress");

        if self.progress.succeeded() {
            tracing::info!("Upload complete");
            self.release_ticker();
        }
    }

    /// Drains ticks delivered by the scheduler. Returns how many were applied.
    pub fn poll(&mut self) -> usize {
        let pending = match &self.tick_receiver {
            Some(receiver) => receiver.try_iter().count(),
            None => return 0,
        };

        let mut applied = 0;
        for _ in 0..pending {
            if !self.progress.is_in_progress() {
                break;
            }
            self.on_tick();
            applied += 1;
        }
        applied
    }

    /// Back to an empty selection with no error and no upload running.
    pub fn clear(&mut self) {
        tracing::info!("Clearing selection");
        self.release_ticker();
        self.selection = SelectionState::clear();
        self.progress = UploadProgress::Idle;
    }

    fn release_ticker(&mut self) {
        if let Some(mut ticker) = self.ticker.take() {
            ticker.cancel();
            tracing::debug!("Upload ticker released");
        }
        self.tick_receiver = None;
    }
}

impl<S: Scheduler> Drop for IntakeSession<S> {
    fn drop(&mut self) {
        if self.progress.is_in_progress() {
            tracing::debug!(
                percent = self.progress.percent(),
                "Session dropped during upload"
            );
        }
        self.release_ticker();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::ticker::ManualScheduler;

    fn session() -> (IntakeSession<ManualScheduler>, ManualScheduler) {
        let scheduler = ManualScheduler::new();
        (
            IntakeSession::new(scheduler.clone(), TICK_PERIOD),
            scheduler,
        )
    }

    fn pdf(name: &str) -> CandidateFile {
        CandidateFile::new(name, 1_572_864, "application/pdf")
    }

    #[test]
    fn upload_without_selection_reports_error() {
        let (mut session, scheduler) = session();

        assert_eq!(
            session.initiate_upload(),
            Err(IntakeError::EmptySelectionOnUpload)
        );
        assert_eq!(
            session.error_message(),
            Some("Please select files to upload.")
        );
        assert_eq!(session.progress().percent(), 0);
        assert_eq!(scheduler.started(), 0);
    }

    #[test]
    fn reentrant_upload_starts_one_ticker() {
        let (mut session, scheduler) = session();
        session.select(vec![pdf("a.pdf")]);

        session.initiate_upload().unwrap();
        session.on_tick();
        session.initiate_upload().unwrap();

        assert_eq!(scheduler.started(), 1);
        assert_eq!(session.progress(), UploadProgress::InProgress { percent: 10 });
    }

    #[test]
    fn completion_cancels_ticker_exactly_once() {
        let (mut session, scheduler) = session();
        session.select(vec![pdf("a.pdf")]);
        session.initiate_upload().unwrap();

        for _ in 0..10 {
            session.on_tick();
        }
        session.on_tick();

        assert!(session.progress().succeeded());
        assert_eq!(session.progress().percent(), 100);
        assert_eq!(scheduler.cancelled(), 1);
        assert!(!session.ticker_active());
    }

    #[test]
    fn poll_applies_fired_ticks() {
        let (mut session, scheduler) = session();
        session.select(vec![pdf("a.pdf")]);
        session.initiate_upload().unwrap();

        assert!(scheduler.fire());
        assert!(scheduler.fire());
        assert!(scheduler.fire());
        assert_eq!(session.poll(), 3);
        assert_eq!(session.progress().percent(), 30);
    }

    #[test]
    fn clear_during_upload_releases_ticker() {
        let (mut session, scheduler) = session();
        session.select(vec![pdf("a.pdf")]);
        session.initiate_upload().unwrap();
        session.on_tick();

        session.clear();
        session.clear();

        assert_eq!(scheduler.cancelled(), 1);
        assert_eq!(session.selection(), &SelectionState::default());
        assert_eq!(session.progress(), UploadProgress::Idle);
        assert!(!scheduler.fire());
    }

    #[test]
    fn drop_during_upload_releases_ticker() {
        let (mut session, scheduler) = session();
        session.select(vec![pdf("a.pdf")]);
        session.initiate_upload().unwrap();

        drop(session);
        assert_eq!(scheduler.cancelled(), 1);
    }

    #[test]
    fn new_selection_hides_previous_success() {
        let (mut session, _scheduler) = session();
        session.select(vec![pdf("a.pdf")]);
        session.initiate_upload().unwrap();
        for _ in 0..10 {
            session.on_tick();
        }
        assert!(session.progress().succeeded());

        session.drop_files(vec![pdf("b.pdf")]);
        assert_eq!(session.progress(), UploadProgress::Idle);
        assert_eq!(session.accepted_files(), &[pdf("b.pdf")]);
    }

    #[test]
    fn selection_during_upload_keeps_progress() {
        let (mut session, scheduler) = session();
        session.select(vec![pdf("a.pdf")]);
        session.initiate_upload().unwrap();
        session.on_tick();

        session.select(vec![pdf("b.pdf")]);
        assert_eq!(session.progress(), UploadProgress::InProgress { percent: 10 });
        assert!(scheduler.fire());
        assert_eq!(session.poll(), 1);
        assert_eq!(session.progress().percent(), 20);
    }

    #[test]
    fn unreadable_pick_replaces_earlier_error() {
        let (mut session, _scheduler) = session();
        session.select(vec![pdf("a.pdf")]);
        session.drop_files(vec![CandidateFile::new("b.exe", 10, "application/x-msdownload")]);

        session.report_unreadable(
            CandidateSource::Picker,
            "Failed to read metadata for gone.pdf".to_string(),
        );

        assert_eq!(
            session.error_message(),
            Some("Failed to read metadata for gone.pdf")
        );
        assert_eq!(session.accepted_files(), &[pdf("a.pdf")]);
    }

    #[test]
    fn unreadable_pick_error_is_gone_once_upload_starts() {
        let (mut session, _scheduler) = session();
        session.select(vec![pdf("a.pdf")]);
        session.report_unreadable(CandidateSource::Picker, "Failed to read metadata".to_string());

        session.initiate_upload().unwrap();
        assert_eq!(session.error_message(), None);

        for _ in 0..10 {
            session.on_tick();
        }
        assert!(session.progress().succeeded());
        assert_eq!(session.error_message(), None);
    }

    #[test]
    fn unreadable_drop_hides_previous_success() {
        let (mut session, _scheduler) = session();
        session.select(vec![pdf("a.pdf")]);
        session.initiate_upload().unwrap();
        for _ in 0..10 {
            session.on_tick();
        }

        session.report_unreadable(CandidateSource::Drop, "Failed to read metadata".to_string());
        assert_eq!(session.progress(), UploadProgress::Idle);
        assert!(session.error_message().is_some());
    }

    #[test]
    fn unavailable_scheduler_refuses_upload() {
        let (mut session, scheduler) = session();
        session.select(vec![pdf("a.pdf")]);
        scheduler.set_unavailable(true);

        let err = session.initiate_upload().unwrap_err();
        assert_eq!(err.reason(), "scheduler unavailable");
        assert_eq!(session.progress(), UploadProgress::Idle);
        assert!(!session.is_uploading());
        assert!(!session.ticker_active());
        assert!(session.error_message().is_some());

        scheduler.set_unavailable(false);
        session.initiate_upload().unwrap();
        assert!(session.is_uploading());
        assert_eq!(scheduler.started(), 1);
    }

    #[test]
    fn upload_after_clear_is_rejected() {
        let (mut session, scheduler) = session();
        session.select(vec![pdf("a.pdf")]);
        session.clear();

        assert!(session.initiate_upload().is_err());
        assert_eq!(scheduler.started(), 0);
        assert!(!session.is_uploading());
    }
}

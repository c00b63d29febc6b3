mod state;
mod ui;

use crate::claims::Claim;
use crate::config::TrackerConfig;
use crate::intake::{source, CandidateSource, IntakeSession, TokioScheduler, ALLOWED_EXTENSIONS};
use eframe::{egui, App};
use rfd::FileDialog;
pub use state::{DropZone, ViewState};

pub struct ClaimsTracker {
    claims: Vec<Claim>,
    intake: IntakeSession,
    view: ViewState,
}

impl ClaimsTracker {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &TrackerConfig, claims: Vec<Claim>) -> Self {
        tracing::info!(claims = claims.len(), "Initializing Claims Tracker");
        let ctx = cc.egui_ctx.clone();
        let scheduler = TokioScheduler::with_waker(move || ctx.request_repaint());
        Self {
            claims,
            intake: IntakeSession::new(scheduler, config.tick_period),
            view: ViewState::default(),
        }
    }

    pub fn pick_files(&mut self) {
        let Some(paths) = FileDialog::new()
            .add_filter("Documents", &ALLOWED_EXTENSIONS)
            .pick_files()
        else {
            return;
        };

        match source::candidates_from_paths(&paths) {
            Ok(candidates) => self.intake.select(candidates),
            Err(e) => self
                .intake
                .report_unreadable(CandidateSource::Picker, format!("{:#}", e)),
        }
    }

    pub fn start_upload(&mut self) {
        match self.intake.initiate_upload() {
            Ok(()) => tracing::debug!("Upload requested"),
            Err(e) => tracing::debug!(reason = e.reason(), "Upload request refused"),
        }
    }

    pub fn clear_selection(&mut self) {
        self.intake.clear();
        self.view.clear();
    }

    pub fn update_state(&mut self, ctx: &egui::Context) {
        self.intake.poll();

        let (hovering, dropped) = ctx.input(|i| {
            (
                !i.raw.hovered_files.is_empty(),
                i.raw.dropped_files.clone(),
            )
        });
        self.view.drop_zone = self.view.drop_zone.track_hover(hovering);

        if dropped.is_empty() {
            return;
        }
        self.view.drop_zone = self.view.drop_zone.dropped();

        match source::candidates_from_dropped(&dropped) {
            Ok(candidates) => self.intake.drop_files(candidates),
            Err(e) => self
                .intake
                .report_unreadable(CandidateSource::Drop, format!("{:#}", e)),
        }
        ctx.request_repaint();
    }
}

impl App for ClaimsTracker {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_state(ctx);
        self.render(ctx);
    }
}

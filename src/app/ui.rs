use super::ClaimsTracker;
use crate::claims::{Claim, StatusTone};
use crate::utils::color::{self, palette};
use crate::utils::date::format_long_date;
use crate::utils::file_size::FileSizeUtils;
use eframe::egui::{self, Align, Color32, RichText, Stroke};

const HOTLINE: &str = "800-827-1000";
const TTY: &str = "711";
const VSO_URL: &str = "https://www.va.gov/vso/";

impl ClaimsTracker {
    pub fn render(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let total_height = ui.available_height();
            let footer_height = 40.0;
            let footer_margin = 15.0;
            let content_height = total_height - footer_height - footer_margin;

            egui::ScrollArea::vertical()
                .max_height(content_height)
                .show(ui, |ui| {
                    ui.add_space(20.0);
                    ui.vertical_centered(|ui| {
                        ui.heading("VA Claims Status Tracker");
                        ui.add_space(5.0);
                        ui.label(
                            RichText::new(format!(
                                "View the status of your VA claims and upload supporting documents. \
                                 For the most up-to-date information, you can also call the VA at {}.",
                                HOTLINE
                            ))
                            .color(ui.visuals().text_color().gamma_multiply(0.7)),
                        );
                    });

                    ui.add_space(20.0);
                    self.render_claims(ui);

                    ui.add_space(20.0);
                    self.render_uploader(ui);

                    ui.add_space(20.0);
                    self.render_help(ui);

                    ui.add_space(20.0);
                });

            ui.with_layout(egui::Layout::bottom_up(Align::Center), |ui| {
                ui.add_space(footer_margin);
                self.render_footer(ui);
            });
        });
    }

    fn render_claims(&self, ui: &mut egui::Ui) {
        ui.heading("Your Claims");
        ui.add_space(8.0);

        if self.claims.is_empty() {
            ui.label("You don't have any active claims at this time.");
            return;
        }

        for claim in &self.claims {
            ui.group(|ui| {
                ui.set_width(ui.available_width());
                Self::render_claim(ui, claim);
            });
            ui.add_space(10.0);
        }
    }

    fn render_claim(ui: &mut egui::Ui, claim: &Claim) {
        ui.horizontal(|ui| {
            ui.label(RichText::new(&claim.claim_type).strong().size(18.0));
            ui.label(format!("({})", claim.id));
        });
        ui.label(format!("Date Filed: {}", format_long_date(&claim.date_filed)));

        egui::Frame::none()
            .fill(StatusTone::from_status(&claim.status).fill())
            .inner_margin(6.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.colored_label(Color32::BLACK, format!("Status: {}", claim.status));
            });

        ui.label(format!(
            "Estimated Completion: {}",
            format_long_date(&claim.estimated_completion)
        ));

        let (fill, title) = if claim.needs_action() {
            (palette(color::GOLD_LIGHTEST), "Required Actions")
        } else {
            (palette(color::GREEN_LIGHTEST), "No Actions Required")
        };

        ui.add_space(4.0);
        egui::Frame::none()
            .fill(fill)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.colored_label(Color32::BLACK, RichText::new(title).strong());
                if claim.needs_action() {
                    for action in &claim.required_actions {
                        ui.colored_label(Color32::BLACK, format!("• {}", action));
                    }
                } else {
                    ui.colored_label(
                        Color32::BLACK,
                        "Your claim is being processed. No action is needed from you at this time.",
                    );
                }
            });
    }

    fn render_uploader(&mut self, ui: &mut egui::Ui) {
        ui.heading("Upload Supporting Documents");
        ui.add_space(5.0);
        ui.label("Upload supporting documents for your claims. Accepted file types: PDF, JPG, PNG.");
        ui.add_space(10.0);

        let border = if self.view.drop_zone.is_dragging() {
            palette(color::PRIMARY)
        } else {
            palette(color::GRAY_MEDIUM)
        };

        egui::Frame::none()
            .stroke(Stroke::new(2.0, border))
            .inner_margin(24.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("📄").size(28.0));
                    ui.add_space(6.0);
                    ui.label("Drag and drop files here, or");
                    ui.add_space(6.0);
                    if ui.button("📁 Select Files").clicked() {
                        self.pick_files();
                    }
                });
            });

        ui.add_space(10.0);

        let accepted = self.intake.accepted_files();
        if !accepted.is_empty() {
            ui.label(RichText::new(format!("Selected Files ({})", accepted.len())).strong());
            for file in accepted {
                ui.label(format!(
                    "• {} ({})",
                    file.name,
                    FileSizeUtils::format_megabytes(file.size_bytes)
                ));
            }
            ui.label(
                RichText::new(format!(
                    "Total: {}",
                    FileSizeUtils::format_size(self.intake.selection().total_bytes())
                ))
                .color(ui.visuals().text_color().gamma_multiply(0.7)),
            );

            ui.add_space(8.0);
            let can_upload = !self.intake.is_uploading();
            ui.horizontal(|ui| {
                ui.add_enabled_ui(can_upload, |ui| {
                    let button =
                        egui::Button::new("📤 Upload Files").min_size(egui::vec2(160.0, 32.0));
                    if ui.add(button).clicked() {
                        self.start_upload();
                    }
                });
                if ui.button("🗑 Clear").clicked() {
                    self.clear_selection();
                }
            });
        }

        let progress = self.intake.progress();
        if progress.shows_bar() {
            ui.add_space(10.0);
            ui.label(RichText::new("Uploading...").strong());
            let bar = egui::ProgressBar::new(progress.get_progress_fraction())
                .animate(false)
                .fill(palette(color::PRIMARY));
            ui.add(bar);
            ui.label(progress.get_status_text());
        }

        if let Some(error) = self.intake.error_message() {
            ui.add_space(10.0);
            ui.colored_label(palette(color::ERROR), RichText::new("Upload Error").strong());
            ui.colored_label(palette(color::ERROR), error);
        }

        if progress.succeeded() {
            ui.add_space(10.0);
            ui.colored_label(
                palette(color::SUCCESS),
                RichText::new(progress.get_status_text()).strong(),
            );
            ui.label(
                "Your documents have been successfully uploaded. \
                 They will be reviewed and associated with your claim.",
            );
        }
    }

    fn render_help(&mut self, ui: &mut egui::Ui) {
        ui.heading("Need Help?");
        if ui
            .small_button(if self.view.show_help { "Hide" } else { "Show" })
            .clicked()
        {
            self.view.show_help = !self.view.show_help;
        }

        if !self.view.show_help {
            return;
        }

        egui::Frame::none()
            .fill(palette(color::GRAY_LIGHTEST))
            .stroke(Stroke::new(1.0, palette(color::GRAY_LIGHT)))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.colored_label(Color32::BLACK, RichText::new("VA Benefits Hotline").strong());
                ui.colored_label(Color32::BLACK, HOTLINE);
                ui.colored_label(Color32::BLACK, "Monday through Friday, 8:00 a.m. to 9:00 p.m. ET");
                ui.add_space(8.0);

                ui.colored_label(Color32::BLACK, RichText::new("TTY Service").strong());
                ui.colored_label(Color32::BLACK, TTY);
                ui.colored_label(Color32::BLACK, "For hearing impaired Veterans");
                ui.add_space(8.0);

                ui.colored_label(
                    Color32::BLACK,
                    RichText::new("Veterans Service Organizations").strong(),
                );
                if ui
                    .add(
                        egui::Label::new(
                            RichText::new("Find a VSO representative")
                                .color(palette(color::PRIMARY))
                                .underline(),
                        )
                        .sense(egui::Sense::click()),
                    )
                    .clicked()
                {
                    if let Err(e) = open::that(VSO_URL) {
                        tracing::warn!(error = %e, url = VSO_URL, "Failed to open link");
                    }
                }
                ui.colored_label(Color32::BLACK, "Get free help with your VA claims");
            });
    }

    fn render_footer(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("Uploads in this tracker are simulated. No files leave your computer.")
                    .small()
                    .color(ui.visuals().text_color().gamma_multiply(0.6)),
            );
        });
    }
}

use egui::{Color32, Frame, Margin, RichText, Stroke, Ui};

/// Dismissible fetch-error banner shown above the tables. Returns whether
/// the operator clicked Dismiss; the caller clears the error status while
/// keeping the stale rows visible underneath.
pub fn error_banner(ui: &mut Ui, message: &str) -> bool {
    let mut dismissed = false;

    Frame::NONE
        .stroke(Stroke::new(1.0, Color32::RED))
        .inner_margin(Margin::symmetric(8, 6))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(Color32::RED, format!("Error: {message}"));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(RichText::new("Dismiss").small()).clicked() {
                        dismissed = true;
                    }
                });
            });
        });

    dismissed
}

use eframe::egui;

use crate::ui::state::AppState;

pub fn render(ui: &mut egui::Ui, state: &AppState) {
    ui.heading("Recent Events");
    ui.separator();

    if state.events.is_empty() {
        ui.label("Nothing sent yet");
        return;
    }

    egui::ScrollArea::vertical()
        .max_height(400.0)
        .show(ui, |ui| {
            for event in state.events.iter().rev().take(20) {
                let time_str = event.timestamp.format("%H:%M:%S");
                let color = if event.accepted {
                    egui::Color32::GREEN
                } else {
                    egui::Color32::RED
                };

                ui.horizontal(|ui| {
                    ui.colored_label(color, format!("[{}]", time_str));
                    ui.label(event.message.as_str());
                });
            }
        });
}

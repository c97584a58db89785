use eframe::egui;

use crate::presentation::{BubblePalette, BubbleStyle, Rgb};
use crate::transcript::TranscriptSource;

pub fn render(
    ui: &mut egui::Ui,
    source: &dyn TranscriptSource,
    palette: &BubblePalette,
    max_height: f32,
) {
    egui::ScrollArea::vertical()
        .max_height(max_height)
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            if source.count() == 0 {
                ui.label(egui::RichText::new("No messages yet").weak());
                return;
            }

            for index in 0..source.count() {
                let message = source.message_at(index);
                let row = source.row_at(index);
                let align = if row.variant.is_outgoing() {
                    egui::Align::Max
                } else {
                    egui::Align::Min
                };

                ui.with_layout(egui::Layout::top_down(align), |ui| {
                    if let Some(header) = row.header {
                        let size = egui::vec2(ui.available_width(), row.header_height);
                        ui.allocate_ui(size, |ui| {
                            ui.label(egui::RichText::new(header).small().weak());
                        });
                    }
                    bubble(ui, message.body(), palette.style_for(row.variant));
                });
                ui.add_space(4.0);
            }
        });
}

fn bubble(ui: &mut egui::Ui, body: &str, style: BubbleStyle) {
    egui::Frame::new()
        .fill(color(style.fill))
        .corner_radius(egui::CornerRadius::same(12))
        .inner_margin(egui::Margin::symmetric(10, 6))
        .show(ui, |ui| {
            ui.set_max_width(ui.available_width() * 0.7);
            ui.label(egui::RichText::new(body).color(color(style.text)));
        });
}

fn color(rgb: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

use eframe::egui;

use crate::transcript::InputMode;

/// Ô nhập + nút Send. Trả về nội dung cần gửi khi người dùng bấm Send hoặc Enter.
pub fn render(
    ui: &mut egui::Ui,
    input_text: &mut String,
    mode: InputMode,
    last_error: Option<&str>,
) -> Option<String> {
    let hint = match mode {
        InputMode::Session => "Type a message",
        InputMode::SenderPrefixed => "<sender id>, <message>",
    };

    let mut send = false;
    ui.horizontal(|ui| {
        let width = (ui.available_width() - 70.0).max(80.0);
        let response = ui.add(
            egui::TextEdit::singleline(input_text)
                .hint_text(hint)
                .desired_width(width),
        );
        send |= ui.button("Send").clicked();
        send |= response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
    });

    if let Some(error) = last_error {
        ui.colored_label(egui::Color32::RED, error);
    }

    if !send || input_text.is_empty() {
        return None;
    }

    // Ô nhập luôn được xoá sau khi bấm Send, kể cả khi bị từ chối
    Some(std::mem::take(input_text))
}

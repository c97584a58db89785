use eframe::egui;

use crate::common::SessionIdentity;
use crate::config::AppConfig;
use crate::transcript::InputMode;
use crate::ui::state::AppState;

#[derive(Default)]
pub struct SidebarActions {
    /// (sender id, display name)
    pub new_contact: Option<(String, String)>,
}

pub fn render(
    ui: &mut egui::Ui,
    identity: &SessionIdentity,
    config: &AppConfig,
    message_count: usize,
    state: &mut AppState,
) -> SidebarActions {
    let mut actions = SidebarActions::default();

    ui.heading("Session");
    ui.separator();

    ui.horizontal(|ui| {
        ui.label("User ID:");
        ui.label(identity.user_id.as_str());
    });
    ui.horizontal(|ui| {
        ui.label("Name:");
        ui.label(identity.display_name.as_str());
    });
    ui.horizontal(|ui| {
        ui.label("Messages:");
        ui.label(format!("{message_count}"));
    });

    ui.separator();
    match config.input_mode {
        InputMode::Session => {
            ui.label("Sending as yourself");
        }
        InputMode::SenderPrefixed => {
            ui.label("Sender-prefixed input");
            ui.label(egui::RichText::new("Type `<sender id>, <message>`").weak());
        }
    }

    ui.separator();
    ui.label("Add Contact:");
    ui.horizontal(|ui| {
        ui.label("ID");
        ui.text_edit_singleline(&mut state.contact_id_input);
    });
    ui.horizontal(|ui| {
        ui.label("Name");
        ui.text_edit_singleline(&mut state.contact_name_input);
    });
    if ui.button("Save").clicked() {
        let sender_id = state.contact_id_input.trim().to_string();
        let name = state.contact_name_input.trim().to_string();
        if !sender_id.is_empty() && !name.is_empty() {
            state.contact_id_input.clear();
            state.contact_name_input.clear();
            actions.new_contact = Some((sender_id, name));
        }
    }

    ui.separator();
    ui.label("Contacts:");
    if config.contacts.is_empty() {
        ui.label("No contacts yet");
        return actions;
    }

    for (sender_id, name) in &config.contacts {
        ui.horizontal(|ui| {
            ui.label(name.as_str());
            ui.label(egui::RichText::new(format!("({sender_id})")).weak());
        });
    }

    actions
}

use std::path::PathBuf;

use eframe::egui;

use crate::config::{self, AppConfig};
use crate::presentation::BubblePalette;
use crate::transcript::Transcript;

use super::components::{
    chat_area, debug_panel, input_bar,
    sidebar::{self, SidebarActions},
};
use super::state::AppState;

/// Chỗ dành cho thanh nhập bên dưới khung chat.
const INPUT_AREA_HEIGHT: f32 = 64.0;

pub struct ChatApp {
    state: AppState,
    transcript: Transcript,
    palette: BubblePalette,
    config: AppConfig,
    config_path: PathBuf,
}

impl ChatApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: AppConfig,
        config_path: PathBuf,
    ) -> Self {
        Self {
            state: AppState::new(),
            transcript: Transcript::new(config.session.clone()),
            palette: BubblePalette::default(),
            config,
            config_path,
        }
    }

    fn add_contact(&mut self, sender_id: String, display_name: String) {
        match config::persist_contact(&self.config_path, &sender_id, &display_name) {
            Ok(_) => {
                self.config.add_contact(&sender_id, &display_name);
                self.state.record_contact_saved(&sender_id, &display_name);
            }
            Err(err) => {
                log::error!("Failed to save contact {sender_id}: {err}");
                self.state.record_contact_failed(&sender_id, &err.to_string());
            }
        }
    }

    fn submit(&mut self, text: String) {
        let config = &self.config;
        match self
            .transcript
            .submit(&text, config.input_mode, |id| config.display_name_for(id))
        {
            Ok(message) => self.state.record_sent(message),
            Err(err) => self.state.record_rejected(&text, err),
        }
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("session_sidebar")
            .resizable(true)
            .default_width(200.0)
            .show(ctx, |ui| {
                let actions: SidebarActions = sidebar::render(
                    ui,
                    self.transcript.identity(),
                    &self.config,
                    self.transcript.count(),
                    &mut self.state,
                );
                if let Some((sender_id, display_name)) = actions.new_contact {
                    self.add_contact(sender_id, display_name);
                }
            });

        egui::SidePanel::right("debug_panel")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| {
                debug_panel::render(ui, &self.state);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Chat");
            ui.separator();
            let max_height = (ui.available_height() - INPUT_AREA_HEIGHT).max(0.0);
            chat_area::render(ui, &self.transcript, &self.palette, max_height);

            ui.separator();
            let submitted = input_bar::render(
                ui,
                &mut self.state.input_text,
                self.config.input_mode,
                self.state.last_error.as_deref(),
            );
            if let Some(content) = submitted {
                self.submit(content);
            }
        });
    }
}

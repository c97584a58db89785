use chrono::{DateTime, Utc};

use crate::common::Message;
use crate::transcript::ComposeError;

const MAX_EVENTS: usize = 100;

/// Một lần bấm Send, thành công hay bị từ chối.
#[derive(Debug, Clone)]
pub struct ComposeEvent {
    pub timestamp: DateTime<Utc>,
    pub accepted: bool,
    pub message: String,
}

/// Trạng thái cục bộ của UI.
pub struct AppState {
    pub input_text: String,
    pub last_error: Option<String>,
    pub contact_id_input: String,
    pub contact_name_input: String,
    pub events: Vec<ComposeEvent>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            input_text: String::new(),
            last_error: None,
            contact_id_input: String::new(),
            contact_name_input: String::new(),
            events: Vec::new(),
        }
    }

    pub fn record_sent(&mut self, message: &Message) {
        self.last_error = None;
        self.add_event(true, format!("{}: {}", message.sender_id(), message.body()));
    }

    pub fn record_rejected(&mut self, input: &str, err: ComposeError) {
        self.last_error = Some(err.to_string());
        self.add_event(false, format!("Rejected `{input}`: {err}"));
    }

    pub fn record_contact_saved(&mut self, sender_id: &str, display_name: &str) {
        self.add_event(true, format!("Saved contact {display_name} ({sender_id})"));
    }

    pub fn record_contact_failed(&mut self, sender_id: &str, reason: &str) {
        self.add_event(false, format!("Could not save contact {sender_id}: {reason}"));
    }

    fn add_event(&mut self, accepted: bool, message: String) {
        self.events.push(ComposeEvent {
            timestamp: Utc::now(),
            accepted,
            message,
        });

        // Giữ tối đa 100 events để không chiếm quá nhiều bộ nhớ
        if self.events.len() > MAX_EVENTS {
            self.events.remove(0);
        }
    }
}

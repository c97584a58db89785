pub mod input;

pub use input::{ComposeError, ParsedInput, parse_sender_prefixed};

use serde::{Deserialize, Serialize};

use crate::common::{Message, SessionIdentity};
use crate::presentation::{self, RowPresentation};

/// Cách chuỗi trong ô nhập được biến thành tin nhắn khi bấm Send.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    /// Sender id and display name come from the session identity.
    #[default]
    Session,
    /// Legacy `"<sender id>, <body>"` encoding.
    SenderPrefixed,
}

/// Read-only view a rendering layer draws from.
pub trait TranscriptSource {
    fn count(&self) -> usize;

    /// Panics when `index >= self.count()`.
    fn message_at(&self, index: usize) -> &Message;

    fn local_user_id(&self) -> &str;

    fn is_own_message(&self, index: usize, current_user_id: &str) -> bool {
        self.message_at(index).sender_id() == current_user_id
    }

    fn row_at(&self, index: usize) -> RowPresentation<'_> {
        presentation::present(self.message_at(index), self.local_user_id())
    }
}

/// Danh sách tin nhắn của một phiên chat, chỉ thêm vào cuối.
#[derive(Debug, Clone)]
pub struct Transcript {
    identity: SessionIdentity,
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new(identity: SessionIdentity) -> Self {
        Self {
            identity,
            messages: Vec::new(),
        }
    }

    pub fn identity(&self) -> &SessionIdentity {
        &self.identity
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn count(&self) -> usize {
        self.messages.len()
    }

    pub fn message_at(&self, index: usize) -> &Message {
        &self.messages[index]
    }

    pub fn is_own_message(&self, index: usize, current_user_id: &str) -> bool {
        self.message_at(index).sender_id() == current_user_id
    }

    /// Appends `"<sender id>, <body>"` input. Returns `false` and leaves the
    /// transcript untouched when the input is malformed.
    pub fn append(&mut self, raw_input: &str, display_name_if_known: &str) -> bool {
        self.try_append(raw_input, display_name_if_known).is_ok()
    }

    pub fn try_append(
        &mut self,
        raw_input: &str,
        display_name_if_known: &str,
    ) -> Result<&Message, ComposeError> {
        let parsed = match parse_sender_prefixed(raw_input) {
            Ok(parsed) => parsed,
            Err(err) => {
                log::warn!("Rejected input `{raw_input}`: {err}");
                return Err(err);
            }
        };

        let message = Message::new(parsed.sender_id, display_name_if_known, parsed.body);
        Ok(self.push(message))
    }

    /// Sends `body` as the local user.
    pub fn send(&mut self, body: &str) -> Result<&Message, ComposeError> {
        if body.trim().is_empty() {
            log::warn!("Rejected empty message from {}", self.identity.user_id);
            return Err(ComposeError::EmptyBody);
        }

        let message = Message::new(
            self.identity.user_id.clone(),
            self.identity.display_name.clone(),
            body,
        );
        Ok(self.push(message))
    }

    /// Handles a Send press. `display_name_for` resolves the display name of
    /// a parsed sender id in [`InputMode::SenderPrefixed`].
    pub fn submit<F>(
        &mut self,
        text: &str,
        mode: InputMode,
        display_name_for: F,
    ) -> Result<&Message, ComposeError>
    where
        F: FnOnce(&str) -> String,
    {
        match mode {
            InputMode::Session => self.send(text),
            InputMode::SenderPrefixed => {
                let display_name = match parse_sender_prefixed(text) {
                    Ok(parsed) => display_name_for(parsed.sender_id),
                    Err(_) => String::new(),
                };
                self.try_append(text, &display_name)
            }
        }
    }

    fn push(&mut self, message: Message) -> &Message {
        log::debug!(
            "Appended message #{} from {} ({} chars)",
            self.messages.len(),
            message.sender_id(),
            message.body().chars().count()
        );
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }
}

impl TranscriptSource for Transcript {
    fn count(&self) -> usize {
        Transcript::count(self)
    }

    fn message_at(&self, index: usize) -> &Message {
        Transcript::message_at(self, index)
    }

    fn local_user_id(&self) -> &str {
        &self.identity.user_id
    }
}

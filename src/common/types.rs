use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_USER_ID: &str = "1234";
pub const DEFAULT_DISPLAY_NAME: &str = "Cindy";

/// Domain model đại diện một tin nhắn chat.
///
/// Không có setter: một khi đã vào transcript thì tin nhắn không đổi.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    id: String,
    sender_id: String,
    sender_display_name: String,
    body: String,
    sent_at: DateTime<Utc>,
}

impl Message {
    pub fn new(
        sender_id: impl Into<String>,
        sender_display_name: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            sender_id: sender_id.into(),
            sender_display_name: sender_display_name.into(),
            body: body.into(),
            sent_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn sender_id(&self) -> &str {
        &self.sender_id
    }

    pub fn sender_display_name(&self) -> &str {
        &self.sender_display_name
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn sent_at(&self) -> DateTime<Utc> {
        self.sent_at
    }
}

/// Danh tính của người dùng cục bộ trong phiên chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    pub user_id: String,
    pub display_name: String,
}

impl SessionIdentity {
    pub fn new(user_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: display_name.into(),
        }
    }
}

impl Default for SessionIdentity {
    fn default() -> Self {
        Self::new(DEFAULT_USER_ID, DEFAULT_DISPLAY_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_get_distinct_ids() {
        let first = Message::new("bob", "Bob", "hey");
        let second = Message::new("bob", "Bob", "hey");

        assert_ne!(first.id(), second.id());
        assert_eq!(first.sender_id(), "bob");
        assert_eq!(first.sender_display_name(), "Bob");
        assert_eq!(first.body(), "hey");
    }

    #[test]
    fn default_identity_is_the_demo_user() {
        let identity = SessionIdentity::default();
        assert_eq!(identity.user_id, "1234");
        assert_eq!(identity.display_name, "Cindy");
    }
}

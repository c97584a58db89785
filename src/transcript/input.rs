use thiserror::Error;

/// Dấu phân tách giữa sender id và nội dung trong chế độ nhập cũ.
pub const SENDER_SEPARATOR: &str = ", ";

/// Lý do một lần bấm Send không tạo ra tin nhắn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ComposeError {
    #[error("expected `<sender id>, <message>` but no \", \" separator was found")]
    MissingSeparator,
    #[error("sender id before \", \" is empty")]
    EmptySenderId,
    #[error("message is empty")]
    EmptyBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput<'a> {
    pub sender_id: &'a str,
    pub body: &'a str,
}

/// Parses `"<sender id>, <body>"`.
///
/// Only the first separator splits; anything after it belongs to the body.
/// The body may be empty.
pub fn parse_sender_prefixed(raw: &str) -> Result<ParsedInput<'_>, ComposeError> {
    let (sender_id, body) = raw
        .split_once(SENDER_SEPARATOR)
        .ok_or(ComposeError::MissingSeparator)?;

    if sender_id.is_empty() {
        return Err(ComposeError::EmptySenderId);
    }

    Ok(ParsedInput { sender_id, body })
}

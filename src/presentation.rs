//! Quy tắc hiển thị cho từng dòng trong transcript.
//!
//! Mọi hàm ở đây là hàm thuần: chỉ phụ thuộc vào tin nhắn và user id hiện tại.

use serde::Serialize;

use crate::common::Message;

/// Chiều cao nhãn tên người gửi phía trên bong bóng tin nhắn đến.
pub const HEADER_LABEL_HEIGHT: f32 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BubbleVariant {
    /// Written by the local user.
    Outgoing,
    Incoming,
}

impl BubbleVariant {
    pub fn is_outgoing(self) -> bool {
        self == BubbleVariant::Outgoing
    }
}

pub fn bubble_variant(message: &Message, current_user_id: &str) -> BubbleVariant {
    if message.sender_id() == current_user_id {
        BubbleVariant::Outgoing
    } else {
        BubbleVariant::Incoming
    }
}

pub fn header_label_text<'a>(message: &'a Message, current_user_id: &str) -> Option<&'a str> {
    match bubble_variant(message, current_user_id) {
        BubbleVariant::Outgoing => None,
        BubbleVariant::Incoming => Some(message.sender_display_name()),
    }
}

pub fn header_label_height(message: &Message, current_user_id: &str) -> f32 {
    match bubble_variant(message, current_user_id) {
        BubbleVariant::Outgoing => 0.0,
        BubbleVariant::Incoming => HEADER_LABEL_HEIGHT,
    }
}

/// Everything a renderer needs to lay out one row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowPresentation<'a> {
    pub variant: BubbleVariant,
    pub header: Option<&'a str>,
    pub header_height: f32,
}

pub fn present<'a>(message: &'a Message, current_user_id: &str) -> RowPresentation<'a> {
    RowPresentation {
        variant: bubble_variant(message, current_user_id),
        header: header_label_text(message, current_user_id),
        header_height: header_label_height(message, current_user_id),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const BUBBLE_BLUE: Rgb = Rgb(15, 135, 255);
    pub const BUBBLE_LIGHT_GRAY: Rgb = Rgb(230, 230, 235);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BubbleStyle {
    pub fill: Rgb,
    pub text: Rgb,
}

/// Bảng màu bong bóng, dựng một lần khi khởi động rồi chỉ đọc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BubblePalette {
    outgoing: BubbleStyle,
    incoming: BubbleStyle,
}

impl BubblePalette {
    pub fn style_for(&self, variant: BubbleVariant) -> BubbleStyle {
        match variant {
            BubbleVariant::Outgoing => self.outgoing,
            BubbleVariant::Incoming => self.incoming,
        }
    }
}

impl Default for BubblePalette {
    fn default() -> Self {
        Self {
            outgoing: BubbleStyle {
                fill: Rgb::BUBBLE_BLUE,
                text: Rgb::WHITE,
            },
            incoming: BubbleStyle {
                fill: Rgb::BUBBLE_LIGHT_GRAY,
                text: Rgb::BLACK,
            },
        }
    }
}

//! Single-user chat transcript: an append-only message store, the rules that
//! map each message to a bubble, and two renderers (egui and plain text).

pub mod common;
pub mod config;
pub mod presentation;
pub mod replay;
pub mod transcript;
pub mod ui;

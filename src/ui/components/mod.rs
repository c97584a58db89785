pub mod chat_area;
pub mod debug_panel;
pub mod input_bar;
pub mod sidebar;

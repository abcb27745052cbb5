pub mod admin_actions;
pub mod navigation;

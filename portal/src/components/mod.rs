//! Reusable UI components shared by pages.

pub mod header;
pub mod login_modal;
pub mod menu_overlay;
pub mod user_menu;

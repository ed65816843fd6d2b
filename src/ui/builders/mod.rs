//! UI builder modules
//!
//! Contains modular builders for constructing the main application UI:
//! - Menu bar model creation
//! - Layout construction

pub mod layout;
pub mod menu_bar;

pub use layout::build_main_layout;
pub use menu_bar::build_menu_bar;

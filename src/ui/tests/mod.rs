//! UI module tests
//!
//! Only covers the `gio::Menu` model, which needs no display server.

#[cfg(test)]
mod menu_bar_tests;

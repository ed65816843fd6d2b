//! UI Components
//!
//! Reusable GTK4 widgets for the browser shell.
//!
//! # Components
//!
//! - `database_row.rs` - "Database" label, bound entry and browse button

mod database_row;

pub use database_row::DatabaseRow;

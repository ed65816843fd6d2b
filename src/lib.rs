// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! SQLite Browser
//!
//! A GTK4 desktop shell intended to browse SQLite database files.
//!
//! # Features
//!
//! - **Menu Bar:** File (Open, Save, Exit) and Edit (Cut, Copy, Paste)
//! - **Database Field:** Entry two-way bound to an observable value
//! - **Command Registry:** One replaceable command per menu entry
//!
//! Open, Save and the edit commands are placeholders that only log a
//! fixed message; the browse button has no effect. No database file
//! is read or written.
//!
//! # Architecture
//!
//! - **`core`:** Toolkit-free logic (actions, commands, menu layout, state)
//! - **`config`:** Window and application defaults
//! - **`ui`:** GTK4 application, menu model and widgets
//!
//! # Examples
//!
//! ## Dispatching a command
//!
//! ```
//! use sqlite_browser::core::{CommandRegistry, DatabaseField, ShellAction};
//!
//! let registry = CommandRegistry::with_defaults();
//! let field = DatabaseField::default();
//!
//! let outcome = registry.dispatch(ShellAction::Open, &field)?;
//! assert_eq!(outcome.message, Some("open_file"));
//! # Ok::<(), sqlite_browser::core::ShellError>(())
//! ```
//!
//! ## Using the GUI
//!
//! ```no_run
//! use sqlite_browser::{config::ShellConfig, ui::App};
//!
//! let app = App::new(ShellConfig::default());
//! app.run(); // Blocks until window closes
//! ```

pub mod config;
pub mod core;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::ShellConfig;
pub use core::{CommandRegistry, DatabaseField, ShellAction};

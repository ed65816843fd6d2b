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

//! Shell configuration
//!
//! Compile-time defaults for the application window. The only runtime
//! override is the initial database text passed on the command line;
//! nothing is read from or written to disk.
//!
//! # Example
//!
//! ```
//! use sqlite_browser::config::ShellConfig;
//!
//! let config = ShellConfig::default().with_database("chinook.db");
//! assert_eq!(config.title, "SQLite Browser");
//! assert_eq!(config.initial_database, "chinook.db");
//! ```

use crate::core::DEFAULT_DATABASE_TEXT;

/// GTK application id
pub const APPLICATION_ID: &str = "io.github.tidynest.SqliteBrowser";

/// Main window title
pub const WINDOW_TITLE: &str = "SQLite Browser";

/// Settings used to build the main window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// GTK application id (reverse DNS)
    pub application_id: String,
    /// Main window title
    pub title: String,
    pub default_width: i32,
    pub default_height: i32,
    /// Text the database entry starts with
    pub initial_database: String,
}

impl ShellConfig {
    /// Overrides the initial database entry text
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.initial_database = database.into();
        self
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            application_id: APPLICATION_ID.to_string(),
            title: WINDOW_TITLE.to_string(),
            default_width: 600,
            default_height: 400,
            initial_database: DEFAULT_DATABASE_TEXT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests;

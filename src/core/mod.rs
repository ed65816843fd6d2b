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

//! src/core/mod.rs
//!
//! Core shell logic module
//!
//! This module contains the toolkit-independent pieces of the shell:
//! - Shell action identifiers and their labels/accelerators
//! - Command pattern registry mapping actions to behaviour
//! - Declarative menu bar layout
//! - Observable database field state
//!
//! Nothing here depends on GTK, so it can be unit tested
//! without a display server.

pub mod actions;
pub mod commands;
pub mod error;
pub mod menu;
pub mod state;

pub use actions::ShellAction;
pub use commands::{Command, CommandOutcome, CommandRegistry};
pub use error::ShellError;
pub use menu::{menu_bar, MenuEntry, MenuSpec};
pub use state::{BoundString, DatabaseField, ListenerId, DEFAULT_DATABASE_TEXT};

#[cfg(test)]
mod tests;

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

//! Shell action identifiers
//!
//! Every user-triggerable entry point (menu items and the browse button)
//! is a `ShellAction`. The GTK layer registers one `gio::SimpleAction`
//! per variant under the `app.` namespace.

use std::fmt;
use std::str::FromStr;

use crate::core::error::ShellError;

/// User-triggerable shell actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShellAction {
    Open,
    Save,
    Exit,
    Cut,
    Copy,
    Paste,
    Browse,
}

impl ShellAction {
    /// All actions, in registration order
    pub const ALL: [ShellAction; 7] = [
        ShellAction::Open,
        ShellAction::Save,
        ShellAction::Exit,
        ShellAction::Cut,
        ShellAction::Copy,
        ShellAction::Paste,
        ShellAction::Browse,
    ];

    /// Action name as registered on the application
    pub fn name(self) -> &'static str {
        match self {
            ShellAction::Open => "open",
            ShellAction::Save => "save",
            ShellAction::Exit => "quit",
            ShellAction::Cut => "cut",
            ShellAction::Copy => "copy",
            ShellAction::Paste => "paste",
            ShellAction::Browse => "browse",
        }
    }

    /// Fully qualified name used by menu items and buttons (`app.open`)
    pub fn detailed_name(self) -> String {
        format!("app.{}", self.name())
    }

    /// Text shown to the user
    pub fn label(self) -> &'static str {
        match self {
            ShellAction::Open => "Open",
            ShellAction::Save => "Save",
            ShellAction::Exit => "Exit",
            ShellAction::Cut => "Cut",
            ShellAction::Copy => "Copy",
            ShellAction::Paste => "Paste",
            ShellAction::Browse => "browse",
        }
    }

    /// Keyboard shortcut in GTK accelerator syntax
    ///
    /// Cut/Copy/Paste have none so Ctrl+X/C/V reach the focused entry.
    pub fn accelerator(self) -> Option<&'static str> {
        match self {
            ShellAction::Open => Some("<Control>o"),
            ShellAction::Save => Some("<Control>s"),
            ShellAction::Exit => Some("<Control>q"),
            ShellAction::Cut | ShellAction::Copy | ShellAction::Paste => None,
            ShellAction::Browse => None,
        }
    }

    /// Looks up an action by its registered name
    pub fn from_name(name: &str) -> Result<Self, ShellError> {
        Self::ALL
            .into_iter()
            .find(|action| action.name() == name)
            .ok_or_else(|| ShellError::UnknownAction(name.to_string()))
    }
}

impl fmt::Display for ShellAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ShellAction {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

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

//! Declarative menu bar layout
//!
//! Describes the menus without any GTK types so the layout can be
//! tested headless and printed by the CLI. `ui::builders::menu_bar`
//! turns it into a `gio::Menu`.

use crate::core::actions::ShellAction;

/// One row in a menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Item(ShellAction),
    Separator,
}

/// A top-level menu and its entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSpec {
    pub label: &'static str,
    pub entries: Vec<MenuEntry>,
}

impl MenuSpec {
    pub fn new(label: &'static str, entries: Vec<MenuEntry>) -> Self {
        Self { label, entries }
    }

    /// Actions in display order, separators skipped
    pub fn actions(&self) -> impl Iterator<Item = ShellAction> + '_ {
        self.entries.iter().filter_map(|entry| match entry {
            MenuEntry::Item(action) => Some(*action),
            MenuEntry::Separator => None,
        })
    }

    /// Groups items between separators
    ///
    /// Empty groups (leading, trailing or doubled separators) are dropped.
    pub fn sections(&self) -> Vec<Vec<ShellAction>> {
        let mut sections = Vec::new();
        let mut current = Vec::new();

        for entry in &self.entries {
            match entry {
                MenuEntry::Item(action) => current.push(*action),
                MenuEntry::Separator => {
                    if !current.is_empty() {
                        sections.push(std::mem::take(&mut current));
                    }
                }
            }
        }

        if !current.is_empty() {
            sections.push(current);
        }

        sections
    }
}

/// File → Open, Save, separator, Exit
pub fn file_menu() -> MenuSpec {
    MenuSpec::new(
        "File",
        vec![
            MenuEntry::Item(ShellAction::Open),
            MenuEntry::Item(ShellAction::Save),
            MenuEntry::Separator,
            MenuEntry::Item(ShellAction::Exit),
        ],
    )
}

/// Edit → Cut, Copy, Paste
pub fn edit_menu() -> MenuSpec {
    MenuSpec::new(
        "Edit",
        vec![
            MenuEntry::Item(ShellAction::Cut),
            MenuEntry::Item(ShellAction::Copy),
            MenuEntry::Item(ShellAction::Paste),
        ],
    )
}

/// The complete menu bar, left to right
pub fn menu_bar() -> Vec<MenuSpec> {
    vec![file_menu(), edit_menu()]
}

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

//! Menu bar builder
//!
//! Translates the declarative [`MenuSpec`] layout into a `gio::Menu`
//! suitable for `Application::set_menubar`.

use gtk4::gio::Menu;

use crate::core::MenuSpec;

/// Builds the application menu bar model
///
/// Each [`MenuSpec`] becomes a submenu. Groups between separators
/// become menu sections, which GTK draws with a separator line
/// between them.
///
/// # Returns
///
/// The top-level menu model (one submenu per spec)
pub fn build_menu_bar(specs: &[MenuSpec]) -> Menu {
    let menubar = Menu::new();

    for spec in specs {
        let submenu = Menu::new();

        for section_actions in spec.sections() {
            let section = Menu::new();
            for action in section_actions {
                section.append(Some(action.label()), Some(action.detailed_name().as_str()));
            }
            submenu.append_section(None, &section);
        }

        menubar.append_submenu(Some(spec.label), &submenu);
    }

    menubar
}

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

//! Menu bar model tests
//!
//! Walks the generated `gio::MenuModel` the way GTK would.

use gtk4::gio::{self, prelude::*};

use crate::core::menu_bar;
use crate::ui::builders::build_menu_bar;

/// Helper: Reads a string attribute from a menu item
fn string_attribute(model: &gio::MenuModel, index: i32, attribute: &str) -> Option<String> {
    model
        .item_attribute_value(index, attribute, Some(glib::VariantTy::STRING))
        .and_then(|value| value.get::<String>())
}

/// Helper: Follows a link (submenu/section) from a menu item
fn link(model: &gio::MenuModel, index: i32, name: &str) -> gio::MenuModel {
    model
        .item_link(index, name)
        .unwrap_or_else(|| panic!("item {index} has no '{name}' link"))
}

/// Helper: Collects (label, action) pairs for every item in a section
fn section_items(section: &gio::MenuModel) -> Vec<(String, String)> {
    (0..section.n_items())
        .map(|i| {
            (
                string_attribute(section, i, "label").unwrap(),
                string_attribute(section, i, "action").unwrap(),
            )
        })
        .collect()
}

#[test]
fn test_top_level_submenus() {
    let menubar: gio::MenuModel = build_menu_bar(&menu_bar()).upcast();

    assert_eq!(menubar.n_items(), 2);
    assert_eq!(string_attribute(&menubar, 0, "label").as_deref(), Some("File"));
    assert_eq!(string_attribute(&menubar, 1, "label").as_deref(), Some("Edit"));
}

#[test]
fn test_file_menu_has_separator_before_exit() {
    let menubar: gio::MenuModel = build_menu_bar(&menu_bar()).upcast();
    let file = link(&menubar, 0, "submenu");

    // Two sections: [Open, Save] and [Exit]
    assert_eq!(file.n_items(), 2);

    let first = section_items(&link(&file, 0, "section"));
    let second = section_items(&link(&file, 1, "section"));

    assert_eq!(
        first,
        vec![
            ("Open".to_string(), "app.open".to_string()),
            ("Save".to_string(), "app.save".to_string()),
        ]
    );
    assert_eq!(second, vec![("Exit".to_string(), "app.quit".to_string())]);
}

#[test]
fn test_edit_menu_items() {
    let menubar: gio::MenuModel = build_menu_bar(&menu_bar()).upcast();
    let edit = link(&menubar, 1, "submenu");

    assert_eq!(edit.n_items(), 1);

    let labels: Vec<String> = section_items(&link(&edit, 0, "section"))
        .into_iter()
        .map(|(label, _)| label)
        .collect();

    assert_eq!(labels, vec!["Cut", "Copy", "Paste"]);
}

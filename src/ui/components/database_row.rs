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

//! Database form row
//!
//! Label, entry and browse button laid out on one grid row. The entry
//! is two-way bound to the shared [`DatabaseField`].

use gtk4::{prelude::*, Button, Entry, Grid, Label};
use std::rc::Rc;

use crate::core::{DatabaseField, ListenerId, ShellAction};

/// "Database: [ entry ] [browse]" row
pub struct DatabaseRow {
    /// Root widget (grid)
    widget: Grid,
    entry: Entry,
    field: Rc<DatabaseField>,
    /// Field → entry hook, removed on drop
    listener: ListenerId,
}

impl DatabaseRow {
    /// Creates the row and binds the entry to `field`
    ///
    /// The browse button activates `app.browse`, which must be
    /// registered on the application for the button to be sensitive.
    pub fn new(field: Rc<DatabaseField>) -> Self {
        let widget = Grid::builder()
            .column_spacing(6)
            .row_spacing(6)
            .build();
        widget.add_css_class("database-row");

        let label = Label::new(Some("Database"));
        let entry = Entry::builder()
            .text(field.get())
            .hexpand(true)
            .build();
        let browse_button = Button::builder()
            .label(ShellAction::Browse.label())
            .action_name(ShellAction::Browse.detailed_name())
            .build();

        widget.attach(&label, 0, 0, 1, 1);
        widget.attach(&entry, 1, 0, 1, 1);
        widget.attach(&browse_button, 2, 0, 1, 1);

        // Entry → field
        let field_for_entry = field.clone();
        entry.connect_changed(move |entry| {
            field_for_entry.set(entry.text().as_str());
        });

        // Field → entry
        let entry_for_read = entry.downgrade();
        let entry_for_write = entry.downgrade();
        let listener = field.bound().bind_view(
            move || entry_for_read.upgrade().map(|entry| entry.text().to_string()),
            move |value| {
                if let Some(entry) = entry_for_write.upgrade() {
                    entry.set_text(value);
                }
            },
        );

        Self {
            widget,
            entry,
            field,
            listener,
        }
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &Grid {
        &self.widget
    }

    pub fn entry(&self) -> &Entry {
        &self.entry
    }
}

impl Drop for DatabaseRow {
    fn drop(&mut self) {
        self.field.bound().disconnect(self.listener);
    }
}

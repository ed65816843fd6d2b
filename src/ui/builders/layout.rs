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

//! Layout builder
//!
//! Creates the main application layout structure.

use crate::core::DatabaseField;
use crate::ui::components::DatabaseRow;
use gtk4::{prelude::*, Box as GtkBox, Orientation};
use std::rc::Rc;

/// Builds the main application layout
///
/// Creates a vertical box padded by 10px containing the
/// database form row.
///
/// # Returns
///
/// Tuple of (root_frame, database_row)
pub fn build_main_layout(field: Rc<DatabaseField>) -> (GtkBox, Rc<DatabaseRow>) {
    let root_frame = GtkBox::new(Orientation::Vertical, 0);
    root_frame.set_margin_top(10);
    root_frame.set_margin_bottom(10);
    root_frame.set_margin_start(10);
    root_frame.set_margin_end(10);

    let database_row = Rc::new(DatabaseRow::new(field));
    root_frame.append(database_row.widget());

    (root_frame, database_row)
}

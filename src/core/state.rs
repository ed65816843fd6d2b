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

//! Shell state
//!
//! Observable string container backing the "Database" entry.
//!
//! # Binding model
//!
//! ```text
//! Entry (view) ──changed──▶ BoundString::set
//!       ▲                          │
//!       └──── listener ◀───────────┘ (only on effective change)
//! ```
//!
//! Everything here lives on the GTK main thread, so interior
//! mutability is `RefCell`, not a lock.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Text shown in the database entry before anything is chosen
pub const DEFAULT_DATABASE_TEXT: &str = "Some database file";

/// Handle returned by [`BoundString::connect_changed`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Rc<dyn Fn(&str)>;

/// A string value with change notification
pub struct BoundString {
    value: RefCell<String>,
    listeners: RefCell<Vec<(ListenerId, Listener)>>,
    next_id: Cell<u64>,
}

impl BoundString {
    /// Creates a bound string holding `initial`
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            value: RefCell::new(initial.into()),
            listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    /// Returns a copy of the current value
    pub fn get(&self) -> String {
        self.value.borrow().clone()
    }

    /// Replaces the value and notifies listeners
    ///
    /// # Returns
    ///
    /// `true` if the value changed. Setting the current value again
    /// is a no-op and does not notify.
    pub fn set(&self, value: &str) -> bool {
        {
            let mut current = self.value.borrow_mut();
            if current.as_str() == value {
                return false;
            }
            current.clear();
            current.push_str(value);
        }

        // Snapshot so listeners may call set/connect_changed themselves
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        for listener in listeners {
            listener(value);
        }

        true
    }

    /// Registers a hook called with the new value after every change
    pub fn connect_changed<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&str) + 'static,
    {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Removes a previously registered hook
    ///
    /// Returns `false` if the id was unknown (already disconnected).
    pub fn disconnect(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        listeners.len() != before
    }

    /// Mirrors the value into a view
    ///
    /// `read` returns the text the view currently shows, or `None` once
    /// the view is gone. `write` is only called when that text differs
    /// from the new value, so a view whose own change signal feeds back
    /// into [`BoundString::set`] settles after one round trip.
    pub fn bind_view<R, W>(&self, read: R, write: W) -> ListenerId
    where
        R: Fn() -> Option<String> + 'static,
        W: Fn(&str) + 'static,
    {
        self.connect_changed(move |value| {
            if let Some(shown) = read() {
                if shown != value {
                    write(value);
                }
            }
        })
    }

    /// Number of registered hooks
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl Default for BoundString {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl std::fmt::Debug for BoundString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundString")
            .field("value", &*self.value.borrow())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// The database path field shown in the main form
///
/// Only user edits write to it today; a future "open file" handler
/// is expected to call [`DatabaseField::set`] as well.
#[derive(Debug)]
pub struct DatabaseField {
    value: BoundString,
}

impl DatabaseField {
    /// Creates a field holding `text`
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            value: BoundString::new(text),
        }
    }

    pub fn get(&self) -> String {
        self.value.get()
    }

    pub fn set(&self, text: &str) -> bool {
        let changed = self.value.set(text);
        if changed {
            log::debug!("Database field changed: '{}'", text);
        }
        changed
    }

    /// The underlying observable value
    pub fn bound(&self) -> &BoundString {
        &self.value
    }
}

impl Default for DatabaseField {
    fn default() -> Self {
        Self::new(DEFAULT_DATABASE_TEXT)
    }
}

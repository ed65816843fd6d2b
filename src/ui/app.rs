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

//! GTK4 Application wrapper
//!
//! This module sets up the GTK4 application lifecycle and creates
//! the main window.
//!
//! # Architecture
//!
//! ```text
//! App (GTK4 Application)
//!   ├─ startup:  registers actions + accelerators, installs menu bar
//!   └─ activate: applies theme, builds window and form row
//! ```

use gtk4::prelude::*;
use gtk4::{gdk, Application, ApplicationWindow, CssProvider};
use std::rc::Rc;

use crate::config::ShellConfig;
use crate::core::{menu_bar, CommandRegistry, DatabaseField, ShellError};
use crate::ui::actions::setup_shell_actions;
use crate::ui::builders::{build_main_layout, build_menu_bar};

/// GTK4 Application for the browser shell
pub struct App {
    /// GTK4 Application instance
    app: Application,
    config: ShellConfig,
    /// State behind the "Database" entry
    field: Rc<DatabaseField>,
    registry: Rc<CommandRegistry>,
}

impl App {
    /// Creates a new App with the stock placeholder commands
    ///
    /// # Example
    ///
    /// ```no_run
    /// use sqlite_browser::{config::ShellConfig, ui::App};
    ///
    /// let app = App::new(ShellConfig::default());
    /// # drop(app);
    /// ```
    pub fn new(config: ShellConfig) -> Self {
        Self::with_registry(config, CommandRegistry::with_defaults())
    }

    /// Creates a new App dispatching actions through `registry`
    pub fn with_registry(config: ShellConfig, registry: CommandRegistry) -> Self {
        let app = Application::builder()
            .application_id(config.application_id.as_str())
            .build();

        let field = Rc::new(DatabaseField::new(config.initial_database.clone()));

        Self {
            app,
            config,
            field,
            registry: Rc::new(registry),
        }
    }

    /// Runs the GTK4 application
    ///
    /// This starts the GTK4 main loop. The function blocks until the
    /// user picks File → Exit or closes the window.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use sqlite_browser::{config::ShellConfig, ui::App};
    /// let app = App::new(ShellConfig::default());
    /// let exit_code = app.run();  // Blocks until window closes
    /// # drop(exit_code);
    /// ```
    pub fn run(self) -> glib::ExitCode {
        let registry = self.registry.clone();
        let field_for_startup = self.field.clone();

        // Actions and menu model belong to the application, not the window
        self.app.connect_startup(move |app| {
            setup_shell_actions(app, registry.clone(), field_for_startup.clone());
            let menubar = build_menu_bar(&menu_bar());
            app.set_menubar(Some(&menubar));
        });

        let config = self.config.clone();
        let field_for_activate = self.field.clone();

        self.app.connect_activate(move |app| {
            Self::build_ui(app, &config, field_for_activate.clone());
        });

        // GTK never sees our CLI arguments
        self.app.run_with_args::<&str>(&[])
    }

    /// Loads the stylesheet from `style.css` onto the default display
    fn apply_theme() -> Result<(), ShellError> {
        let display = gdk::Display::default().ok_or(ShellError::DisplayUnavailable)?;

        let provider = CssProvider::new();
        provider.load_from_string(include_str!("style.css"));

        gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );

        Ok(())
    }

    /// Builds the main window UI
    ///
    /// Called when the application activates. A second activation
    /// presents the existing window instead of opening another one.
    fn build_ui(app: &Application, config: &ShellConfig, field: Rc<DatabaseField>) {
        if let Some(window) = app.active_window() {
            window.present();
            return;
        }

        if let Err(e) = Self::apply_theme() {
            log::warn!("Theme not applied: {}", e);
        }

        let window = ApplicationWindow::builder()
            .application(app)
            .title(config.title.as_str())
            .default_width(config.default_width)
            .default_height(config.default_height)
            .show_menubar(true)
            .build();

        let (root_frame, database_row) = build_main_layout(field);
        window.set_child(Some(&root_frame));

        // Holds the row (and its field binding) for the window's lifetime
        window.connect_close_request(move |_| {
            log::debug!(
                "Window closing with database '{}'",
                database_row.entry().text()
            );
            glib::Propagation::Proceed
        });

        log::debug!("Main window built: {}", config.title);
        window.present();
    }
}

//! GTK Action setup for the application
//!
//! Registers one `gio::SimpleAction` per [`ShellAction`] and routes
//! activations through the [`CommandRegistry`].

use gtk4::{gio, prelude::*, Application};
use std::rc::Rc;

use crate::core::{CommandRegistry, DatabaseField, ShellAction};

/// Sets up every shell action and its keyboard accelerator
///
/// Menu items and the browse button refer to these by their detailed
/// name (`app.open`, `app.quit`, `app.browse`, ...).
pub fn setup_shell_actions(
    app: &Application,
    registry: Rc<CommandRegistry>,
    field: Rc<DatabaseField>,
) {
    for action in ShellAction::ALL {
        let simple_action = gio::SimpleAction::new(action.name(), None);
        let app_for_action = app.clone();
        let registry_for_action = registry.clone();
        let field_for_action = field.clone();

        simple_action.connect_activate(move |_, _| {
            run_action(&app_for_action, &registry_for_action, &field_for_action, action);
        });

        app.add_action(&simple_action);

        if let Some(accel) = action.accelerator() {
            app.set_accels_for_action(&action.detailed_name(), &[accel]);
        }
    }
}

/// Executes the command for `action` and applies its outcome
fn run_action(
    app: &Application,
    registry: &CommandRegistry,
    field: &DatabaseField,
    action: ShellAction,
) {
    log::debug!("Action activated: {}", action.detailed_name());

    match registry.dispatch(action, field) {
        Ok(outcome) => {
            if let Some(message) = outcome.message {
                log::info!("{}", message);
            }
            if outcome.quit {
                log::debug!("Quitting");
                app.quit();
            }
        }
        Err(e) => log::error!("Action {} failed: {}", action, e),
    }
}

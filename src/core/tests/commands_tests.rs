use std::cell::Cell;
use std::rc::Rc;

use crate::core::{
    Command, CommandOutcome, CommandRegistry, DatabaseField, ShellAction, ShellError,
    DEFAULT_DATABASE_TEXT,
};

#[test]
fn test_placeholder_messages() {
    let registry = CommandRegistry::with_defaults();
    let field = DatabaseField::default();

    let expected = [
        (ShellAction::Open, "open_file"),
        (ShellAction::Save, "save_file"),
        (ShellAction::Cut, "cut"),
        (ShellAction::Copy, "copy"),
        (ShellAction::Paste, "paste"),
    ];

    for (action, message) in expected {
        let outcome = registry.dispatch(action, &field).unwrap();
        assert_eq!(outcome, CommandOutcome::message(message), "{action}");
    }
}

#[test]
fn test_placeholders_are_deterministic_and_stateless() {
    let registry = CommandRegistry::with_defaults();
    let field = DatabaseField::default();

    let first = registry.dispatch(ShellAction::Open, &field).unwrap();
    let second = registry.dispatch(ShellAction::Open, &field).unwrap();

    assert_eq!(first, second);
    assert_eq!(field.get(), DEFAULT_DATABASE_TEXT);
}

#[test]
fn test_exit_requests_quit() {
    let registry = CommandRegistry::with_defaults();
    let field = DatabaseField::default();

    let outcome = registry.dispatch(ShellAction::Exit, &field).unwrap();
    assert!(outcome.quit);
    assert_eq!(outcome.message, None);
}

#[test]
fn test_browse_has_no_effect() {
    let registry = CommandRegistry::with_defaults();
    let field = DatabaseField::default();

    let outcome = registry.dispatch(ShellAction::Browse, &field).unwrap();
    assert_eq!(outcome, CommandOutcome::nothing());
    assert_eq!(field.get(), DEFAULT_DATABASE_TEXT);
}

#[test]
fn test_defaults_cover_every_action() {
    let registry = CommandRegistry::default();

    for action in ShellAction::ALL {
        assert!(registry.is_registered(action), "{action} not registered");
    }
}

#[test]
fn test_dispatch_unregistered_action() {
    let registry = CommandRegistry::empty();
    let field = DatabaseField::default();

    let result = registry.dispatch(ShellAction::Save, &field);
    assert_eq!(result, Err(ShellError::UnregisteredAction("save")));
}

struct CountingOpen {
    calls: Rc<Cell<usize>>,
}

impl Command for CountingOpen {
    fn execute(&self, field: &DatabaseField) -> CommandOutcome {
        self.calls.set(self.calls.get() + 1);
        field.set("/tmp/chinook.db");
        CommandOutcome::nothing()
    }
}

#[test]
fn test_register_replaces_command() {
    let mut registry = CommandRegistry::with_defaults();
    let field = DatabaseField::default();
    let calls = Rc::new(Cell::new(0));

    registry.register(
        ShellAction::Open,
        CountingOpen {
            calls: calls.clone(),
        },
    );

    let outcome = registry.dispatch(ShellAction::Open, &field).unwrap();
    assert_eq!(outcome, CommandOutcome::nothing());
    assert_eq!(calls.get(), 1);
    assert_eq!(field.get(), "/tmp/chinook.db");
}

use crate::config::{ShellConfig, APPLICATION_ID, WINDOW_TITLE};

#[test]
fn test_default_title() {
    let config = ShellConfig::default();
    assert_eq!(config.title, "SQLite Browser");
    assert_eq!(WINDOW_TITLE, "SQLite Browser");
}

#[test]
fn test_default_database_text() {
    let config = ShellConfig::default();
    assert_eq!(config.initial_database, "Some database file");
}

#[test]
fn test_with_database_keeps_other_fields() {
    let config = ShellConfig::default().with_database("/srv/data/inventory.sqlite3");

    assert_eq!(config.initial_database, "/srv/data/inventory.sqlite3");
    assert_eq!(config.application_id, APPLICATION_ID);
    assert_eq!(config.default_width, 600);
    assert_eq!(config.default_height, 400);
}

#[test]
fn test_application_id_is_valid() {
    assert!(gtk4::gio::Application::id_is_valid(APPLICATION_ID));
}

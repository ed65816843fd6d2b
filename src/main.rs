//! CLI entry point for sqlite-browser
//!
//! Launches the GUI shell, or prints the menu layout.

use clap::{Parser, Subcommand};
use colored::*;
use sqlite_browser::config::ShellConfig;
use sqlite_browser::core::{menu_bar, MenuEntry};
use sqlite_browser::ui::App;

#[derive(Parser)]
#[command(name = "sqlite-browser")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch GUI window (default)
    Gui {
        /// Initial text for the database field
        #[arg(value_name = "DATABASE")]
        database: Option<String>,
    },

    /// Print the menu layout
    Menus,
}

fn main() -> anyhow::Result<glib::ExitCode> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .try_init()?;

    match cli.command {
        Some(Commands::Menus) => {
            print_menus();
            Ok(glib::ExitCode::SUCCESS)
        }
        Some(Commands::Gui { database }) => Ok(launch_gui(database)),
        None => Ok(launch_gui(None)),
    }
}

/// Opens the main window and blocks until it closes
fn launch_gui(database: Option<String>) -> glib::ExitCode {
    let mut config = ShellConfig::default();
    if let Some(database) = database {
        config = config.with_database(database);
    }

    log::debug!("Launching '{}' ({})", config.title, config.application_id);
    App::new(config).run()
}

/// List all menus and their entries
fn print_menus() {
    for menu in menu_bar() {
        println!("{}", menu.label.bold());

        for entry in &menu.entries {
            match entry {
                MenuEntry::Item(action) => {
                    let accel = action.accelerator().unwrap_or("");
                    println!(
                        "  {} {} {}",
                        format!("{:<8}", action.label()).cyan(),
                        format!("{:<12}", action.detailed_name()).green(),
                        accel.dimmed(),
                    );
                }
                MenuEntry::Separator => println!("  {}", "────────".dimmed()),
            }
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_launches_gui_with_defaults() {
        let cli = Cli::try_parse_from(["sqlite-browser"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_gui_takes_database() {
        let cli = Cli::try_parse_from(["sqlite-browser", "-v", "gui", "a.db"]).unwrap();

        assert!(cli.verbose);
        match cli.command {
            Some(Commands::Gui { database }) => assert_eq!(database.as_deref(), Some("a.db")),
            _ => panic!("expected gui command"),
        }
    }

    #[test]
    fn test_database_file_named_like_a_command() {
        let cli = Cli::try_parse_from(["sqlite-browser", "gui", "menus"]).unwrap();

        match cli.command {
            Some(Commands::Gui { database }) => assert_eq!(database.as_deref(), Some("menus")),
            _ => panic!("expected gui command"),
        }
    }

    #[test]
    fn test_database_before_command_is_rejected() {
        let result = Cli::try_parse_from(["sqlite-browser", "a.db", "menus"]);
        assert!(result.is_err(), "a.db must not be silently dropped");
    }

    #[test]
    fn test_menus_command() {
        let cli = Cli::try_parse_from(["sqlite-browser", "menus"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Menus)));
    }
}

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

//! Command pattern for shell actions
//!
//! Each [`ShellAction`] maps to one [`Command`] in a [`CommandRegistry`].
//! Commands never touch GTK: they return a [`CommandOutcome`] and the
//! view layer decides how to log it or whether to quit.
//!
//! Real Open/Save/Browse logic plugs in through
//! [`CommandRegistry::register`] without touching menu construction.

use std::collections::HashMap;

use crate::core::actions::ShellAction;
use crate::core::error::ShellError;
use crate::core::state::DatabaseField;

/// Result of executing a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommandOutcome {
    /// Fixed message to log, if any
    pub message: Option<&'static str>,
    /// Whether the application should terminate
    pub quit: bool,
}

impl CommandOutcome {
    /// Outcome with no effect at all
    pub fn nothing() -> Self {
        Self::default()
    }

    pub fn message(message: &'static str) -> Self {
        Self {
            message: Some(message),
            quit: false,
        }
    }

    pub fn quit() -> Self {
        Self {
            message: None,
            quit: true,
        }
    }
}

/// A single executable shell command
pub trait Command {
    fn execute(&self, field: &DatabaseField) -> CommandOutcome;
}

/// Command that only reports a fixed message
#[derive(Debug, Clone, Copy)]
pub struct PlaceholderCommand {
    message: &'static str,
}

impl PlaceholderCommand {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

impl Command for PlaceholderCommand {
    fn execute(&self, _field: &DatabaseField) -> CommandOutcome {
        CommandOutcome::message(self.message)
    }
}

/// Requests application shutdown
#[derive(Debug, Clone, Copy, Default)]
pub struct ExitCommand;

impl Command for ExitCommand {
    fn execute(&self, _field: &DatabaseField) -> CommandOutcome {
        CommandOutcome::quit()
    }
}

/// Does nothing; stands in for unbound controls
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCommand;

impl Command for NoopCommand {
    fn execute(&self, _field: &DatabaseField) -> CommandOutcome {
        CommandOutcome::nothing()
    }
}

/// Maps shell actions to their commands
pub struct CommandRegistry {
    commands: HashMap<ShellAction, Box<dyn Command>>,
}

impl CommandRegistry {
    /// Creates a registry with no commands
    pub fn empty() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Creates a registry with the stock placeholder commands
    ///
    /// | Action | Effect                 |
    /// |--------|------------------------|
    /// | Open   | message `open_file`    |
    /// | Save   | message `save_file`    |
    /// | Exit   | quit                   |
    /// | Cut    | message `cut`          |
    /// | Copy   | message `copy`         |
    /// | Paste  | message `paste`        |
    /// | Browse | nothing                |
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register(ShellAction::Open, PlaceholderCommand::new("open_file"));
        registry.register(ShellAction::Save, PlaceholderCommand::new("save_file"));
        registry.register(ShellAction::Exit, ExitCommand);
        registry.register(ShellAction::Cut, PlaceholderCommand::new("cut"));
        registry.register(ShellAction::Copy, PlaceholderCommand::new("copy"));
        registry.register(ShellAction::Paste, PlaceholderCommand::new("paste"));
        registry.register(ShellAction::Browse, NoopCommand);
        registry
    }

    /// Registers (or replaces) the command for an action
    pub fn register<C>(&mut self, action: ShellAction, command: C)
    where
        C: Command + 'static,
    {
        self.commands.insert(action, Box::new(command));
    }

    pub fn is_registered(&self, action: ShellAction) -> bool {
        self.commands.contains_key(&action)
    }

    /// Runs the command bound to `action`
    ///
    /// # Errors
    ///
    /// [`ShellError::UnregisteredAction`] if nothing is bound to it.
    pub fn dispatch(
        &self,
        action: ShellAction,
        field: &DatabaseField,
    ) -> Result<CommandOutcome, ShellError> {
        let command = self
            .commands
            .get(&action)
            .ok_or(ShellError::UnregisteredAction(action.name()))?;

        Ok(command.execute(field))
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

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

//! Shell error type
//!
//! Returned by action lookup, command dispatch and theme setup.

use thiserror::Error;

/// Errors that can occur while wiring or running the shell.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShellError {
    /// Action name does not match any shell action.
    #[error("Unknown action: {0}")]
    UnknownAction(String),
    /// Action exists but no command has been registered for it.
    #[error("No command registered for action: {0}")]
    UnregisteredAction(&'static str),
    /// No default display to attach the stylesheet to.
    #[error("Could not connect to a display")]
    DisplayUnavailable,
}

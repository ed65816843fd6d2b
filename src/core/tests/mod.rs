//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Shell action naming and lookup
//! - Command registry dispatch
//! - Menu layout
//! - Bound string state

#[cfg(test)]
mod commands_tests;

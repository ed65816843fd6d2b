//! Config module tests

#[cfg(test)]
mod shell_config_tests;

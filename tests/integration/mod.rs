//! Integration tests for the configuration build pipeline

mod cli_binary;
mod env_only_mode;
mod test_utils;

//! Integration tests for the spec collector

mod binary_cli;
mod test_utils;

//! Command-line interface: argument parsing, handlers, and output formatting

pub mod commands;
pub mod handlers;
pub mod output;

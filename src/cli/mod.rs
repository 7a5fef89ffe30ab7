//! Command line interface for Quill.

pub mod args;
pub mod commands;
pub mod output;

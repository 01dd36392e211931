//! CLI support for the `quire` binary.

pub mod args;
pub mod commands;
pub mod context;
pub mod logging;
pub mod output;

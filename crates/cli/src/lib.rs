//! `fieldops` admin command.
//!
//! Parses a subcommand, runs the matching read call against the backend and
//! hands back what to print. Argument types live in [`cli`]; dispatch lives
//! in [`commands`].

pub mod cli;
pub mod commands;

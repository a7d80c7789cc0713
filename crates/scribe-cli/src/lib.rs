//! Command implementations for the `scribetool` binary.

pub mod commands;

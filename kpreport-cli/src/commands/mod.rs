//! Command implementations for the CLI.

/// Module containing the implementation of the `report` command.
/// It reads the input list and writes one report line per media file.
pub mod report;

//! CLI library components for nth-of-type.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod report;
pub mod summary;

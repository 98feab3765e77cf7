//! Command implementations for the standings CLI

pub mod categories;
pub mod common;
pub mod import;
pub mod standings;
pub mod teams;

pub use common::CommandContext;

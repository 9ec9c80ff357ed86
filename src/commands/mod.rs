//! Command module - Strategy pattern for CLI commands.
//!
//! Each command is a separate module implementing the `CommandExecutor` trait.
//! This provides clean separation of concerns and makes adding new commands easy.

mod hide;
mod seek;

pub use hide::HideCommand;
pub use seek::SeekCommand;

use anyhow::Result;

/// Trait for command execution - Strategy pattern.
///
/// Each command struct holds its parsed arguments and implements
/// this trait to define its execution logic.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments.
    fn execute(&self) -> Result<()>;
}

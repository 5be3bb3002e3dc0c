//! External process execution and platform detection.

pub mod command;
pub mod mock;
pub mod platform;
pub mod runner;

pub use command::{
    display_command, execute, execute_quiet, CommandOptions, CommandResult,
};
pub use mock::{MockRunner, RecordedCommand};
pub use platform::is_ci;
pub use runner::{CommandRunner, SystemRunner};

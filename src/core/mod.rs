pub mod action;
pub mod command;
pub mod context;
pub mod tab;

pub use action::{Action, NotifyLevel};
pub use command::{command_hint, parse_command, Command};
pub use context::Context;
pub use tab::Tab;

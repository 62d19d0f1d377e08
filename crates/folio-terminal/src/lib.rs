//! Command interpreter and terminal session for FOLIO.
//!
//! The terminal is a registry-based dispatch system. Commands implement
//! the `Command` trait and are registered by name. The session parses
//! submitted lines, resolves the command, applies the result, and
//! schedules staggered output and delayed side-effect actions on a
//! tick-driven pending queue.

mod action_commands;
mod commands;
mod fun_commands;
mod interpreter;
pub mod markup;
mod nav_commands;
pub mod parser;
mod profile;
mod session;
mod terminal_commands;

/// Register link/mail/download/hire commands into a registry.
pub use action_commands::register_action_commands;
/// Register the full built-in catalogue into a registry.
pub use commands::register_builtins;
/// Register decorative commands (matrix, fortune) into a registry.
pub use fun_commands::register_fun_commands;
/// A side-effect operation attached to a command result.
pub use interpreter::{Action, ActionKind};
/// A single executable command trait.
pub use interpreter::Command;
/// Result produced by a command handler.
pub use interpreter::CommandResult;
/// Registry of available commands with dispatch.
pub use interpreter::CommandRegistry;
/// Command grouping used by `help`.
pub use interpreter::Category;
/// Read-only context passed to every command.
pub use interpreter::Environment;
/// Result classification (success / error / info).
pub use interpreter::ResultKind;
/// Parsed command invocation (name, args, flags).
pub use parser::{FlagValue, Invocation};
/// Presented-developer profile data (TOML-loadable).
pub use profile::{Profile, Project, SkillCategory};
/// Register navigation commands (about, skills, projects).
pub use nav_commands::register_nav_commands;
/// Register terminal housekeeping commands (clear, history).
pub use terminal_commands::register_terminal_commands;
/// Terminal session state machine and line types.
pub use session::{
    LineKind, LineMetadata, LineStatus, Services, TerminalLine, TerminalSession,
};

//! Terminal housekeeping commands: clear, history.

use folio_types::error::Result;

use crate::interpreter::{Category, Command, CommandResult, Environment, ResultKind};
use crate::parser::Invocation;

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clear terminal output"
    }
    fn usage(&self) -> &str {
        "clear"
    }
    fn category(&self) -> Category {
        Category::Terminal
    }
    fn execute(&self, _inv: &Invocation, _env: &mut Environment<'_>) -> Result<CommandResult> {
        Ok(CommandResult {
            clear: true,
            ..Default::default()
        })
    }
}

// ---------------------------------------------------------------------------
// history
// ---------------------------------------------------------------------------

struct HistoryCmd;
impl Command for HistoryCmd {
    fn name(&self) -> &str {
        "history"
    }
    fn description(&self) -> &str {
        "View command history"
    }
    fn usage(&self) -> &str {
        "history"
    }
    fn category(&self) -> Category {
        Category::Terminal
    }
    fn execute(&self, _inv: &Invocation, env: &mut Environment<'_>) -> Result<CommandResult> {
        let output = if env.history.is_empty() {
            vec!["No commands in history".to_string()]
        } else {
            let mut lines = vec!["Command History:".to_string(), String::new()];
            lines.extend(
                env.history
                    .iter()
                    .enumerate()
                    .map(|(i, cmd)| format!("  {}  {}", i + 1, cmd)),
            );
            lines
        };
        Ok(CommandResult {
            output,
            kind: ResultKind::Info,
            ..Default::default()
        })
    }
}

/// Register terminal housekeeping commands.
pub fn register_terminal_commands(reg: &mut crate::CommandRegistry) {
    reg.register(Box::new(ClearCmd));
    reg.register(Box::new(HistoryCmd));
}

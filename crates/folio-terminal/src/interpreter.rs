//! Command trait, registry, and dispatch logic.

use std::collections::HashMap;

use folio_platform::RandomSource;
use folio_types::error::{FolioError, Result};

use crate::parser::Invocation;
use crate::profile::Profile;

/// Classification of a command result. Drives line status metadata and
/// coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultKind {
    #[default]
    Success,
    Error,
    Info,
}

/// Side-effect operations a command can request.
///
/// Actions are routed through the platform collaborator traits after the
/// command's output has been scheduled; they never touch session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionKind {
    /// Scroll the page anchor with this id into view.
    ScrollToSection(String),
    /// Trigger the resume-asset download.
    DownloadResume,
    /// Open an external URL.
    OpenUrl(String),
    /// Open the mail client addressed to this address.
    ComposeMail(String),
}

/// An action plus the delay before it fires.
///
/// Fire-and-forget relative to output rendering: a delayed action can
/// outlive the staggered reveal of the lines that announced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub kind: ActionKind,
    pub delay_ms: u64,
}

impl Action {
    /// An action that fires as soon as the result is applied.
    pub fn immediate(kind: ActionKind) -> Self {
        Self { kind, delay_ms: 0 }
    }

    /// An action deferred by `delay_ms` milliseconds.
    pub fn delayed(kind: ActionKind, delay_ms: u64) -> Self {
        Self { kind, delay_ms }
    }
}

/// Result produced by a command handler.
#[derive(Debug, Clone, Default)]
pub struct CommandResult {
    /// Display lines, rendered in order.
    pub output: Vec<String>,
    /// Optional side effect, fired after output is scheduled.
    pub action: Option<Action>,
    /// Result classification.
    pub kind: ResultKind,
    /// Reveal output lines with a per-line stagger delay.
    pub animate: bool,
    /// Simulated handler latency. Non-zero means the dispatcher defers
    /// applying the result (keeping the session processing) until the
    /// delay elapses -- the uniform sync/async handler contract.
    pub delay_ms: u64,
    /// Synchronously empty the line buffer before appending output.
    pub clear: bool,
}

/// Read-only context passed to every command.
///
/// Handlers may read ambient session data but never mutate it; all
/// mutation happens in the session applying the returned result.
pub struct Environment<'a> {
    /// The presented developer's profile data.
    pub profile: &'a Profile,
    /// Snapshot of the command history prior to the current submission.
    pub history: Vec<String>,
    /// Cosmetic randomness source.
    pub random: &'a dyn RandomSource,
}

/// Command grouping used by `help`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Navigation,
    Actions,
    Terminal,
    Fun,
}

impl Category {
    /// Display order in `help`.
    pub const ALL: [Category; 4] = [
        Category::Navigation,
        Category::Actions,
        Category::Terminal,
        Category::Fun,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Navigation => "Navigation",
            Category::Actions => "Actions",
            Category::Terminal => "Terminal",
            Category::Fun => "Fun",
        }
    }
}

/// A single executable command.
pub trait Command {
    /// The command name (what the visitor types).
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Usage string (e.g. "skills").
    fn usage(&self) -> &str;

    /// Grouping in `help` output.
    fn category(&self) -> Category;

    /// Execute the command with the parsed invocation and context.
    fn execute(&self, inv: &Invocation, env: &mut Environment<'_>) -> Result<CommandResult>;
}

/// Interior width of the help header box.
const HELP_BOX_WIDTH: usize = 53;

/// Registry of available commands with dispatch.
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Register a command. Replaces any existing command with the same
    /// name. Names are stored lowercase; lookup is case-insensitive.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_ascii_lowercase(), cmd);
    }

    /// Whether `name` resolves to a command (case-insensitive).
    pub fn contains(&self, name: &str) -> bool {
        let name = name.to_ascii_lowercase();
        name == "help" || self.commands.contains_key(&name)
    }

    /// Dispatch a parsed invocation.
    ///
    /// `help` is synthesized from the registry itself so the listing can
    /// never disagree with the registered set.
    pub fn execute(&self, inv: &Invocation, env: &mut Environment<'_>) -> Result<CommandResult> {
        let name = inv.name.to_ascii_lowercase();
        if name == "help" {
            return self.render_help(inv.args.first().map(String::as_str));
        }
        match self.commands.get(&name) {
            Some(cmd) => {
                log::debug!("dispatching '{name}'");
                cmd.execute(inv, env)
            },
            None => Err(FolioError::Command(format!(
                "unknown command: {}",
                inv.name
            ))),
        }
    }

    /// All command names (including `help`), sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.commands.keys().cloned().collect();
        names.push("help".to_string());
        names.sort();
        names
    }

    /// Command names starting with the trimmed, lowercased input.
    /// Empty input yields no suggestions.
    pub fn completions(&self, input: &str) -> Vec<String> {
        let prefix = input.trim().to_ascii_lowercase();
        if prefix.is_empty() {
            return Vec::new();
        }
        self.names()
            .into_iter()
            .filter(|n| n.starts_with(&prefix))
            .collect()
    }

    fn render_help(&self, topic: Option<&str>) -> Result<CommandResult> {
        if let Some(topic) = topic {
            return self.render_help_topic(topic);
        }

        let mut output = Vec::new();
        output.push(format!("╭{}╮", "─".repeat(HELP_BOX_WIDTH)));
        output.push(format!(
            "│  {:<width$}│",
            "FOLIO Terminal v1.0 - Available Commands",
            width = HELP_BOX_WIDTH - 2
        ));
        output.push(format!("╰{}╯", "─".repeat(HELP_BOX_WIDTH)));
        output.push(String::new());

        for category in Category::ALL {
            let mut entries: Vec<(&str, &str)> = self
                .commands
                .values()
                .filter(|c| c.category() == category)
                .map(|c| (c.name(), c.description()))
                .collect();
            if category == Category::Terminal {
                entries.push(("help", "List available commands"));
            }
            if entries.is_empty() {
                continue;
            }
            entries.sort_by_key(|(name, _)| *name);

            output.push(format!("  {}:", category.label()));
            for (name, desc) in entries {
                output.push(format!("    {name:<15}- {desc}"));
            }
            output.push(String::new());
        }

        output.push("  Use ↑/↓ arrows for command history".to_string());
        output.push("  Tab for auto-completion".to_string());
        output.push("  Ctrl+L to clear screen".to_string());

        Ok(CommandResult {
            output,
            animate: true,
            ..Default::default()
        })
    }

    /// Per-command detail: `help <command>`.
    fn render_help_topic(&self, topic: &str) -> Result<CommandResult> {
        let key = topic.to_ascii_lowercase();
        let (name, description, usage) = if key == "help" {
            ("help", "List available commands", "help [command]")
        } else {
            let cmd = self
                .commands
                .get(&key)
                .ok_or_else(|| FolioError::Command(format!("no help for '{topic}'")))?;
            (cmd.name(), cmd.description(), cmd.usage())
        };
        Ok(CommandResult {
            output: vec![
                format!("{name} - {description}"),
                format!("Usage: {usage}"),
            ],
            kind: ResultKind::Info,
            ..Default::default()
        })
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_platform::SeededRandom;

    struct GreetCmd;
    impl Command for GreetCmd {
        fn name(&self) -> &str {
            "greet"
        }
        fn description(&self) -> &str {
            "Say hello"
        }
        fn usage(&self) -> &str {
            "greet [name]"
        }
        fn category(&self) -> Category {
            Category::Fun
        }
        fn execute(&self, inv: &Invocation, _env: &mut Environment<'_>) -> Result<CommandResult> {
            let who = inv.args.first().map(String::as_str).unwrap_or("world");
            Ok(CommandResult {
                output: vec![format!("hello {who}")],
                ..Default::default()
            })
        }
    }

    fn run(reg: &CommandRegistry, line: &str) -> Result<CommandResult> {
        let profile = Profile::default();
        let random = SeededRandom::new(1);
        let mut env = Environment {
            profile: &profile,
            history: Vec::new(),
            random: &random,
        };
        let inv = crate::parser::parse(line)?;
        reg.execute(&inv, &mut env)
    }

    #[test]
    fn register_and_execute() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(GreetCmd));
        let result = run(&reg, "greet visitor").unwrap();
        assert_eq!(result.output, vec!["hello visitor"]);
    }

    #[test]
    fn dispatch_is_case_insensitive() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(GreetCmd));
        let result = run(&reg, "GREET").unwrap();
        assert_eq!(result.output, vec!["hello world"]);
    }

    #[test]
    fn unknown_command_error_names_the_command() {
        let reg = CommandRegistry::new();
        let err = run(&reg, "frobnicate").unwrap_err();
        assert!(format!("{err}").contains("frobnicate"));
    }

    #[test]
    fn contains_is_case_insensitive_and_knows_help() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(GreetCmd));
        assert!(reg.contains("greet"));
        assert!(reg.contains("Greet"));
        assert!(reg.contains("help"));
        assert!(reg.contains("HELP"));
        assert!(!reg.contains("frobnicate"));
    }

    #[test]
    fn help_is_synthesized_and_animated() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(GreetCmd));
        let result = run(&reg, "help").unwrap();
        assert!(result.animate);
        assert!(!result.output.is_empty());
        let text = result.output.join("\n");
        assert!(text.contains("Fun:"));
        assert!(text.contains("greet"));
        assert!(text.contains("help"));
        assert!(text.contains("Tab for auto-completion"));
    }

    #[test]
    fn help_topic_shows_description_and_usage() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(GreetCmd));
        let result = run(&reg, "help greet").unwrap();
        assert_eq!(result.kind, ResultKind::Info);
        assert_eq!(result.output[0], "greet - Say hello");
        assert_eq!(result.output[1], "Usage: greet [name]");
    }

    #[test]
    fn help_topic_for_help_itself() {
        let reg = CommandRegistry::new();
        let result = run(&reg, "help help").unwrap();
        assert!(result.output[1].contains("help [command]"));
    }

    #[test]
    fn help_topic_unknown_is_an_error() {
        let reg = CommandRegistry::new();
        let err = run(&reg, "help frobnicate").unwrap_err();
        assert!(format!("{err}").contains("frobnicate"));
    }

    #[test]
    fn names_are_sorted_and_include_help() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(GreetCmd));
        assert_eq!(reg.names(), vec!["greet".to_string(), "help".to_string()]);
    }

    #[test]
    fn completions_prefix_match() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(GreetCmd));
        assert_eq!(reg.completions("g"), vec!["greet".to_string()]);
        assert_eq!(reg.completions("  GR "), vec!["greet".to_string()]);
        assert!(reg.completions("z").is_empty());
    }

    #[test]
    fn completions_empty_input_yields_none() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(GreetCmd));
        assert!(reg.completions("").is_empty());
        assert!(reg.completions("   ").is_empty());
    }

    #[test]
    fn register_replaces_existing() {
        struct GreetV2;
        impl Command for GreetV2 {
            fn name(&self) -> &str {
                "greet"
            }
            fn description(&self) -> &str {
                "Say hello twice"
            }
            fn usage(&self) -> &str {
                "greet"
            }
            fn category(&self) -> Category {
                Category::Fun
            }
            fn execute(
                &self,
                _inv: &Invocation,
                _env: &mut Environment<'_>,
            ) -> Result<CommandResult> {
                Ok(CommandResult {
                    output: vec!["hello hello".into()],
                    ..Default::default()
                })
            }
        }

        let mut reg = CommandRegistry::new();
        reg.register(Box::new(GreetCmd));
        reg.register(Box::new(GreetV2));
        let result = run(&reg, "greet").unwrap();
        assert_eq!(result.output, vec!["hello hello"]);
        assert_eq!(reg.names().len(), 2);
    }

    #[test]
    fn action_constructors() {
        let a = Action::immediate(ActionKind::DownloadResume);
        assert_eq!(a.delay_ms, 0);
        let b = Action::delayed(ActionKind::ScrollToSection("contact".into()), 3000);
        assert_eq!(b.delay_ms, 3000);
        assert_eq!(b.kind, ActionKind::ScrollToSection("contact".into()));
    }

    #[test]
    fn result_default_is_quiet_success() {
        let r = CommandResult::default();
        assert!(r.output.is_empty());
        assert!(r.action.is_none());
        assert_eq!(r.kind, ResultKind::Success);
        assert!(!r.animate);
        assert_eq!(r.delay_ms, 0);
        assert!(!r.clear);
    }
}

//! Terminal session state machine.
//!
//! Owns the scrollback, history, input draft, and the pending-work
//! queue. All mutation flows through `handle_event` / `submit` / `tick`;
//! command handlers never touch the session directly. Scheduling is
//! tick-driven: staggered output, deferred handler settlement, and
//! delayed actions carry due times on a relative millisecond clock that
//! the host advances once per frame.

use std::collections::BTreeMap;
use std::time::Instant;

use folio_platform::{
    DownloadService, LinkOpener, MailClient, PageNavigator, RandomSource, TimeService,
};
use folio_types::InputEvent;

use crate::interpreter::{ActionKind, CommandRegistry, CommandResult, Environment, ResultKind};
use crate::parser;
use crate::profile::Profile;

/// Per-line reveal delay for animated output.
const STAGGER_MS: u64 = 50;

/// Kind of a scrollback line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Command,
    Output,
    Error,
    System,
}

/// Outcome status attached to a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStatus {
    Success,
    Error,
    Pending,
}

/// Optional metadata on a line.
#[derive(Debug, Clone, Default)]
pub struct LineMetadata {
    /// Execution time of the producing command, on the first output line
    /// of a result only.
    pub duration_ms: Option<f64>,
    /// User the line was submitted as (command echo lines).
    pub user: Option<String>,
    pub status: Option<LineStatus>,
}

/// One immutable line of terminal scrollback.
#[derive(Debug, Clone)]
pub struct TerminalLine {
    /// Unique within the session, assigned in append order.
    pub id: u64,
    pub kind: LineKind,
    pub text: String,
    /// Wall-clock epoch milliseconds at append time.
    pub timestamp_ms: u64,
    pub metadata: LineMetadata,
}

/// Collaborators the session runs against.
///
/// Side-effect collaborators are optional so tests (and headless use)
/// can run with nothing wired; a fired action with no collaborator is
/// dropped with a debug log.
pub struct Services<'a> {
    pub profile: &'a Profile,
    pub navigator: Option<&'a dyn PageNavigator>,
    pub downloads: Option<&'a dyn DownloadService>,
    pub links: Option<&'a dyn LinkOpener>,
    pub mail: Option<&'a dyn MailClient>,
    pub time: &'a dyn TimeService,
    pub random: &'a dyn RandomSource,
}

/// Work scheduled on the session clock.
enum Pending {
    /// Append one output line.
    Reveal {
        due_ms: u64,
        kind: LineKind,
        text: String,
        duration_ms: Option<f64>,
        status: LineStatus,
    },
    /// Apply a deferred handler result and clear the processing flag.
    Settle {
        due_ms: u64,
        queued_ms: u64,
        result: CommandResult,
    },
    /// Fire a side-effect action through the collaborators.
    Fire { due_ms: u64, action: ActionKind },
}

impl Pending {
    fn due_ms(&self) -> u64 {
        match self {
            Pending::Reveal { due_ms, .. }
            | Pending::Settle { due_ms, .. }
            | Pending::Fire { due_ms, .. } => *due_ms,
        }
    }
}

/// State of one mounted terminal widget.
pub struct TerminalSession {
    lines: Vec<TerminalLine>,
    history: Vec<String>,
    /// Recall position; `history.len()` is the empty-draft position.
    history_index: usize,
    is_processing: bool,
    current_directory: String,
    /// Read-only after construction.
    environment: BTreeMap<String, String>,
    input: String,
    show_suggestions: bool,
    next_line_id: u64,
    clock_ms: u64,
    pending: Vec<Pending>,
}

impl TerminalSession {
    pub fn new() -> Self {
        let mut environment = BTreeMap::new();
        environment.insert("USER".to_string(), "portfolio-visitor".to_string());
        environment.insert("SHELL".to_string(), "/bin/zsh".to_string());
        environment.insert("TERM".to_string(), "xterm-256color".to_string());
        Self {
            lines: Vec::new(),
            history: Vec::new(),
            history_index: 0,
            is_processing: false,
            current_directory: "~".to_string(),
            environment,
            input: String::new(),
            show_suggestions: false,
            next_line_id: 0,
            clock_ms: 0,
            pending: Vec::new(),
        }
    }

    // -- Read access --

    pub fn lines(&self) -> &[TerminalLine] {
        &self.lines
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn history_index(&self) -> usize {
        self.history_index
    }

    pub fn is_processing(&self) -> bool {
        self.is_processing
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn show_suggestions(&self) -> bool {
        self.show_suggestions
    }

    pub fn current_directory(&self) -> &str {
        &self.current_directory
    }

    pub fn environment(&self) -> &BTreeMap<String, String> {
        &self.environment
    }

    /// Suggestion list for the current input (empty when hidden).
    pub fn suggestions(&self, registry: &CommandRegistry) -> Vec<String> {
        if self.show_suggestions {
            registry.completions(&self.input)
        } else {
            Vec::new()
        }
    }

    /// Whether scheduled work is still waiting on the clock.
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    // -- Event handling --

    /// Feed one input event. Events are ignored while a command is
    /// processing (the input is disabled, not queued).
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        registry: &CommandRegistry,
        services: &Services<'_>,
    ) {
        if self.is_processing {
            return;
        }
        match event {
            InputEvent::TextInput(c) => {
                self.input.push(c);
                self.refresh_suggestions(registry);
            },
            InputEvent::Backspace => {
                self.input.pop();
                self.refresh_suggestions(registry);
            },
            InputEvent::Submit => self.submit(registry, services),
            InputEvent::HistoryPrev => {
                if self.history_index > 0 {
                    self.history_index -= 1;
                    self.input = self.history[self.history_index].clone();
                    self.refresh_suggestions(registry);
                }
            },
            InputEvent::HistoryNext => {
                if self.history_index + 1 < self.history.len() {
                    self.history_index += 1;
                    self.input = self.history[self.history_index].clone();
                } else {
                    self.history_index = self.history.len();
                    self.input.clear();
                }
                self.refresh_suggestions(registry);
            },
            InputEvent::Complete => self.complete(registry),
            InputEvent::DismissSuggestions => self.show_suggestions = false,
            InputEvent::ClearScreen => self.lines.clear(),
            InputEvent::Quit => {},
        }
    }

    /// Replace the input buffer with a chosen suggestion.
    pub fn select_suggestion(&mut self, name: &str) {
        self.input = name.to_string();
        self.show_suggestions = false;
    }

    /// Append a system line (welcome banner, host notices).
    pub fn push_system(&mut self, text: &str, services: &Services<'_>) {
        let now = services.time.epoch_millis();
        self.append_line(LineKind::System, text.to_string(), LineMetadata::default(), now);
    }

    // -- Submission --

    /// Submit the current input buffer as a command line.
    pub fn submit(&mut self, registry: &CommandRegistry, services: &Services<'_>) {
        if self.is_processing {
            return;
        }
        let raw = self.input.trim().to_string();
        if raw.is_empty() {
            // Whitespace-only submission: no echo, no history entry.
            return;
        }

        // History snapshot taken before the push, so `history` lists
        // prior commands only.
        let prior_history = self.history.clone();

        let user = self.environment.get("USER").cloned();
        let now = services.time.epoch_millis();
        self.append_line(
            LineKind::Command,
            raw.clone(),
            LineMetadata {
                user,
                ..Default::default()
            },
            now,
        );

        self.history.push(raw.clone());
        self.history_index = self.history.len();
        self.input.clear();
        self.show_suggestions = false;
        self.is_processing = true;

        let inv = match parser::parse(&raw) {
            Ok(inv) => inv,
            Err(e) => {
                self.fail(format!("Error: {e}"), services);
                return;
            },
        };

        if !registry.contains(&inv.name) {
            self.fail(
                format!(
                    "Command not found: {}. Type 'help' for available commands.",
                    inv.name
                ),
                services,
            );
            return;
        }

        let mut env = Environment {
            profile: services.profile,
            history: prior_history,
            random: services.random,
        };
        let started = Instant::now();
        match registry.execute(&inv, &mut env) {
            Ok(result) if result.delay_ms > 0 => {
                // Deferred handler: the result applies (and the
                // processing flag clears) once the latency elapses.
                self.pending.push(Pending::Settle {
                    due_ms: self.clock_ms + result.delay_ms,
                    queued_ms: self.clock_ms,
                    result,
                });
            },
            Ok(result) => {
                let duration_ms = started.elapsed().as_secs_f64() * 1000.0;
                self.apply_result(result, duration_ms);
                self.is_processing = false;
            },
            Err(e) => self.fail(format!("Error: {e}"), services),
        }
    }

    /// Surface a contained failure as a single error line.
    fn fail(&mut self, text: String, services: &Services<'_>) {
        let now = services.time.epoch_millis();
        self.append_line(
            LineKind::Error,
            text,
            LineMetadata {
                status: Some(LineStatus::Error),
                ..Default::default()
            },
            now,
        );
        self.is_processing = false;
    }

    /// Schedule a command result's output and action.
    fn apply_result(&mut self, result: CommandResult, duration_ms: f64) {
        if result.clear {
            self.lines.clear();
        }
        let (kind, status) = match result.kind {
            ResultKind::Error => (LineKind::Error, LineStatus::Error),
            _ => (LineKind::Output, LineStatus::Success),
        };
        for (i, text) in result.output.into_iter().enumerate() {
            let delay = if result.animate {
                i as u64 * STAGGER_MS
            } else {
                0
            };
            self.pending.push(Pending::Reveal {
                due_ms: self.clock_ms + delay,
                kind,
                text,
                duration_ms: (i == 0).then_some(duration_ms),
                status,
            });
        }
        // Scheduled after the output, independent of reveal completion.
        if let Some(action) = result.action {
            self.pending.push(Pending::Fire {
                due_ms: self.clock_ms + action.delay_ms,
                action: action.kind,
            });
        }
    }

    // -- Clock --

    /// Advance the session clock and drain due pending work in order.
    pub fn tick(&mut self, dt_ms: u64, services: &Services<'_>) {
        self.clock_ms = self.clock_ms.saturating_add(dt_ms);
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].due_ms() > self.clock_ms {
                i += 1;
                continue;
            }
            match self.pending.remove(i) {
                Pending::Reveal {
                    kind,
                    text,
                    duration_ms,
                    status,
                    ..
                } => {
                    let now = services.time.epoch_millis();
                    self.append_line(
                        kind,
                        text,
                        LineMetadata {
                            duration_ms,
                            user: None,
                            status: Some(status),
                        },
                        now,
                    );
                },
                Pending::Settle {
                    queued_ms, result, ..
                } => {
                    let duration_ms = (self.clock_ms - queued_ms) as f64;
                    self.apply_result(result, duration_ms);
                    self.is_processing = false;
                },
                Pending::Fire { action, .. } => self.fire(action, services),
            }
        }
    }

    /// Route a due action to its collaborator. Failures are contained
    /// here; an action can never take the session down.
    fn fire(&self, action: ActionKind, services: &Services<'_>) {
        let outcome = match &action {
            ActionKind::ScrollToSection(id) => {
                services.navigator.map(|n| n.scroll_to_section(id))
            },
            ActionKind::DownloadResume => services.downloads.map(|d| {
                d.download(
                    &services.profile.resume.asset,
                    &services.profile.resume.save_as,
                )
            }),
            ActionKind::OpenUrl(url) => services.links.map(|l| l.open_url(url)),
            ActionKind::ComposeMail(addr) => services.mail.map(|m| m.compose(addr)),
        };
        match outcome {
            Some(Err(e)) => log::warn!("action failed: {e}"),
            None => log::debug!("action dropped: no collaborator wired"),
            Some(Ok(())) => {},
        }
    }

    // -- Internals --

    fn refresh_suggestions(&mut self, registry: &CommandRegistry) {
        self.show_suggestions = !registry.completions(&self.input).is_empty();
    }

    fn complete(&mut self, registry: &CommandRegistry) {
        let matches = registry.completions(&self.input);
        match matches.len() {
            0 => {},
            1 => {
                self.input = matches[0].clone();
                self.show_suggestions = false;
            },
            _ => self.show_suggestions = true,
        }
    }

    fn append_line(
        &mut self,
        kind: LineKind,
        text: String,
        metadata: LineMetadata,
        timestamp_ms: u64,
    ) {
        let id = self.next_line_id;
        self.next_line_id += 1;
        self.lines.push(TerminalLine {
            id,
            kind,
            text,
            timestamp_ms,
            metadata,
        });
    }
}

impl Default for TerminalSession {
    fn default() -> Self {
        Self::new()
    }
}

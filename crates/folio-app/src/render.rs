//! ANSI rendering: scrollback lines, prompt, and the welcome banner.

use std::io::{self, Write};

use folio_platform::TimeService;
use folio_terminal::markup::{self, Span};
use folio_terminal::{CommandRegistry, LineKind, Profile, TerminalLine, TerminalSession};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Incremental scrollback writer.
///
/// Appends lines added since the last sync; when the session's line
/// buffer shrinks (clear), wipes the screen and starts over.
pub struct Renderer {
    printed: usize,
}

impl Renderer {
    pub fn new() -> Self {
        Self { printed: 0 }
    }

    pub fn sync(&mut self, out: &mut impl Write, session: &TerminalSession) -> io::Result<()> {
        let lines = session.lines();
        if lines.len() < self.printed {
            write!(out, "\x1b[2J\x1b[H")?;
            self.printed = 0;
        }
        for line in &lines[self.printed..] {
            write!(out, "\r\x1b[K{}\r\n", format_line(line))?;
        }
        self.printed = lines.len();
        Ok(())
    }

    /// Redraw the prompt line in place.
    pub fn draw_prompt(
        &self,
        out: &mut impl Write,
        session: &TerminalSession,
        registry: &CommandRegistry,
        time: &dyn TimeService,
    ) -> io::Result<()> {
        let stamp = time
            .now()
            .map(|t| format!("{:02}:{:02}:{:02}", t.hour, t.minute, t.second))
            .unwrap_or_default();
        let marker = if session.is_processing() { "⟳" } else { "$" };
        write!(
            out,
            "\r\x1b[K{DIM}[{stamp}] {}{RESET} {CYAN}{marker}{RESET} {}",
            session.current_directory(),
            session.input()
        )?;
        if session.show_suggestions() {
            let list = session.suggestions(registry);
            if !list.is_empty() {
                write!(out, "  {DIM}({}){RESET}", list.join(" "))?;
            }
        }
        out.flush()
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Color a scrollback line by its kind: commands green behind a cyan
/// `$`, errors red, system notes yellow.
fn format_line(line: &TerminalLine) -> String {
    let mut rendered = match line.kind {
        LineKind::Command => format!(
            "{DIM}[{}]{RESET} {CYAN}${RESET} {GREEN}{}{RESET}",
            clock_label(line.timestamp_ms),
            line.text
        ),
        LineKind::Error => format!("{RED}{}{RESET}", render_markup(&line.text)),
        LineKind::System => format!("{YELLOW}{}{RESET}", render_markup(&line.text)),
        LineKind::Output => render_markup(&line.text),
    };
    if let Some(duration) = line.metadata.duration_ms {
        rendered.push_str(&format!(" {DIM}({duration:.2}ms){RESET}"));
    }
    rendered
}

/// Inline markup to ANSI: code spans cyan, bold spans bold.
fn render_markup(text: &str) -> String {
    markup::parse_spans(text)
        .into_iter()
        .map(|span| match span {
            Span::Plain(s) => s,
            Span::Code(s) => format!("{CYAN}{s}{RESET}"),
            Span::Bold(s) => format!("{BOLD}{s}{RESET}"),
        })
        .collect()
}

/// Epoch milliseconds to a `HH:MM:SS` label (UTC).
fn clock_label(epoch_ms: u64) -> String {
    let secs = (epoch_ms / 1000) % 86_400;
    format!(
        "{:02}:{:02}:{:02}",
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}

/// Welcome banner shown as system lines on startup.
pub fn banner(profile: &Profile) -> Vec<String> {
    vec![
        r"  ______ ____  _      _____ ____  ".to_string(),
        r" |  ____/ __ \| |    |_   _/ __ \ ".to_string(),
        r" | |__ | |  | | |      | || |  | |".to_string(),
        r" |  __|| |  | | |      | || |  | |".to_string(),
        r" | |   | |__| | |____ _| || |__| |".to_string(),
        r" |_|    \____/|______|_____\____/ ".to_string(),
        String::new(),
        format!(
            "Welcome to {}'s interactive portfolio terminal! 🚀",
            profile.name
        ),
        "Type `help` to see available commands.".to_string(),
        "Pro tip: Use ↑/↓ arrows for command history and Tab for auto-completion.".to_string(),
    ]
}

//! Navigation commands: about, skills, projects.
//!
//! Each produces descriptive output and scrolls the matching page
//! section into view through the navigation collaborator.

use folio_platform::RandomSource;
use folio_types::error::Result;

use crate::interpreter::{
    Action, ActionKind, Category, Command, CommandResult, Environment,
};
use crate::parser::Invocation;

/// Interior width of framed output boxes.
const BOX_WIDTH: usize = 53;

/// Frame `body` in a titled box.
fn framed(title: &str, body: &[String]) -> Vec<String> {
    let mut lines = Vec::with_capacity(body.len() + 4);
    lines.push(format!(
        "┌─ {title} {}┐",
        "─".repeat(BOX_WIDTH.saturating_sub(title.chars().count() + 3))
    ));
    lines.push(format!("│{}│", " ".repeat(BOX_WIDTH)));
    for line in body {
        lines.push(format!("│  {:<width$}│", line, width = BOX_WIDTH - 2));
    }
    lines.push(format!("│{}│", " ".repeat(BOX_WIDTH)));
    lines.push(format!("└{}┘", "─".repeat(BOX_WIDTH)));
    lines
}

// ---------------------------------------------------------------------------
// about
// ---------------------------------------------------------------------------

struct AboutCmd;
impl Command for AboutCmd {
    fn name(&self) -> &str {
        "about"
    }
    fn description(&self) -> &str {
        "Learn about me"
    }
    fn usage(&self) -> &str {
        "about"
    }
    fn category(&self) -> Category {
        Category::Navigation
    }
    fn execute(&self, _inv: &Invocation, env: &mut Environment<'_>) -> Result<CommandResult> {
        let mut body = vec![env.profile.title.clone()];
        body.extend(env.profile.about.iter().cloned());

        let mut output = vec!["Initializing profile data...".to_string(), String::new()];
        output.extend(framed("About Me", &body));

        Ok(CommandResult {
            output,
            action: Some(Action::immediate(ActionKind::ScrollToSection(
                "about".to_string(),
            ))),
            ..Default::default()
        })
    }
}

// ---------------------------------------------------------------------------
// skills
// ---------------------------------------------------------------------------

struct SkillsCmd;
impl Command for SkillsCmd {
    fn name(&self) -> &str {
        "skills"
    }
    fn description(&self) -> &str {
        "View my technical expertise"
    }
    fn usage(&self) -> &str {
        "skills"
    }
    fn category(&self) -> Category {
        Category::Navigation
    }
    fn execute(&self, _inv: &Invocation, env: &mut Environment<'_>) -> Result<CommandResult> {
        let mut output = vec!["Loading skill matrix...".to_string(), String::new()];

        for group in &env.profile.skills {
            output.push(format!("{}:", group.name));
            for item in &group.items {
                // Cosmetic proficiency in [80, 100).
                let level = env.random.in_range(80, 100);
                let filled = (level / 5) as usize;
                let bar = format!("{}{}", "█".repeat(filled), "░".repeat(20 - filled));
                output.push(format!("  {item:<15} [{bar}] {level}%"));
            }
            output.push(String::new());
        }

        Ok(CommandResult {
            output,
            animate: true,
            ..Default::default()
        })
    }
}

// ---------------------------------------------------------------------------
// projects
// ---------------------------------------------------------------------------

struct ProjectsCmd;
impl Command for ProjectsCmd {
    fn name(&self) -> &str {
        "projects"
    }
    fn description(&self) -> &str {
        "Browse my portfolio"
    }
    fn usage(&self) -> &str {
        "projects"
    }
    fn category(&self) -> Category {
        Category::Navigation
    }
    fn execute(&self, _inv: &Invocation, env: &mut Environment<'_>) -> Result<CommandResult> {
        let mut output = vec![
            "Loading project portfolio...".to_string(),
            String::new(),
            "📁 Featured Projects:".to_string(),
            String::new(),
        ];

        for (i, project) in env.profile.projects.iter().enumerate() {
            output.push(format!("  {}. {}", i + 1, project.name));
            output.push(format!("     Tech: {}", project.tech));
            for point in &project.points {
                output.push(format!("     → {point}"));
            }
            output.push(String::new());
        }

        Ok(CommandResult {
            output,
            action: Some(Action::immediate(ActionKind::ScrollToSection(
                "projects".to_string(),
            ))),
            ..Default::default()
        })
    }
}

/// Register navigation commands.
pub fn register_nav_commands(reg: &mut crate::CommandRegistry) {
    reg.register(Box::new(AboutCmd));
    reg.register(Box::new(SkillsCmd));
    reg.register(Box::new(ProjectsCmd));
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_platform::SeededRandom;

    use crate::CommandRegistry;
    use crate::profile::Profile;

    fn run(line: &str) -> CommandResult {
        let mut reg = CommandRegistry::new();
        register_nav_commands(&mut reg);
        let profile = Profile::default();
        let random = SeededRandom::new(3);
        let mut env = Environment {
            profile: &profile,
            history: Vec::new(),
            random: &random,
        };
        reg.execute(&crate::parser::parse(line).unwrap(), &mut env)
            .unwrap()
    }

    #[test]
    fn about_frames_profile_and_scrolls() {
        let result = run("about");
        let text = result.output.join("\n");
        assert!(text.contains("About Me"));
        assert!(text.contains(&Profile::default().title));
        assert_eq!(
            result.action,
            Some(Action::immediate(ActionKind::ScrollToSection(
                "about".to_string()
            )))
        );
        assert!(!result.animate);
    }

    #[test]
    fn framed_box_has_even_edges() {
        let lines = framed("Test", &["one".to_string(), "two".to_string()]);
        assert!(lines[0].starts_with("┌─ Test "));
        assert!(lines[0].ends_with('┐'));
        assert!(lines.last().unwrap().starts_with('└'));
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn skills_renders_a_meter_per_item() {
        let result = run("skills");
        assert!(result.animate);
        let profile = Profile::default();
        let item_count: usize = profile.skills.iter().map(|g| g.items.len()).sum();
        let meters = result
            .output
            .iter()
            .filter(|l| l.contains('[') && l.contains('%'))
            .count();
        assert_eq!(meters, item_count);
    }

    #[test]
    fn skill_levels_stay_in_band() {
        let result = run("skills");
        for line in result.output.iter().filter(|l| l.ends_with('%')) {
            let pct: u32 = line
                .rsplit_once('[')
                .and_then(|(_, tail)| tail.rsplit_once("] "))
                .and_then(|(_, pct)| pct.trim_end_matches('%').parse().ok())
                .unwrap();
            assert!((80..100).contains(&pct), "level {pct} out of band");
        }
    }

    #[test]
    fn projects_lists_numbered_entries_and_scrolls() {
        let result = run("projects");
        let text = result.output.join("\n");
        assert!(text.contains("Featured Projects"));
        assert!(text.contains("  1. "));
        assert!(text.contains("Tech: "));
        assert!(text.contains('→'));
        assert_eq!(
            result.action,
            Some(Action::immediate(ActionKind::ScrollToSection(
                "projects".to_string()
            )))
        );
    }
}

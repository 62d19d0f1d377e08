//! Side-effect commands: hire, resume, github, linkedin, email.
//!
//! Each returns a short confirmation and an action routed through the
//! matching collaborator. `hire` is the delayed-action showcase: its
//! scroll fires three seconds after the output is scheduled.

use folio_types::error::Result;

use crate::interpreter::{
    Action, ActionKind, Category, Command, CommandResult, Environment,
};
use crate::parser::Invocation;

/// Delay before `hire` scrolls to the contact section.
const HIRE_ACTION_DELAY_MS: u64 = 3_000;

// ---------------------------------------------------------------------------
// hire
// ---------------------------------------------------------------------------

struct HireCmd;
impl Command for HireCmd {
    fn name(&self) -> &str {
        "hire"
    }
    fn description(&self) -> &str {
        "Instant hire mode 😉"
    }
    fn usage(&self) -> &str {
        "hire"
    }
    fn category(&self) -> Category {
        Category::Fun
    }
    fn execute(&self, _inv: &Invocation, _env: &mut Environment<'_>) -> Result<CommandResult> {
        let output = vec![
            "[sudo] password for recruiter: ********".to_string(),
            String::new(),
            "🔓 ACCESS GRANTED - ADMIN MODE ACTIVATED".to_string(),
            String::new(),
            "┌─────────────────────────────────────────┐".to_string(),
            "│     INSTANT HIRE PROTOCOL INITIATED     │".to_string(),
            "└─────────────────────────────────────────┘".to_string(),
            String::new(),
            "⚡ Running compatibility check...".to_string(),
            "  ✓ Skills: EXCEPTIONAL".to_string(),
            "  ✓ Experience: IMPRESSIVE".to_string(),
            "  ✓ Portfolio: OUTSTANDING".to_string(),
            "  ✓ Culture Fit: PERFECT MATCH".to_string(),
            "  ✓ Availability: IMMEDIATE".to_string(),
            String::new(),
            "🎉 HIRE RECOMMENDATION: STRONGLY POSITIVE".to_string(),
            String::new(),
            "Redirecting to contact form in 3 seconds...".to_string(),
        ];
        Ok(CommandResult {
            output,
            action: Some(Action::delayed(
                ActionKind::ScrollToSection("contact".to_string()),
                HIRE_ACTION_DELAY_MS,
            )),
            animate: true,
            ..Default::default()
        })
    }
}

// ---------------------------------------------------------------------------
// resume
// ---------------------------------------------------------------------------

struct ResumeCmd;
impl Command for ResumeCmd {
    fn name(&self) -> &str {
        "resume"
    }
    fn description(&self) -> &str {
        "Download my resume"
    }
    fn usage(&self) -> &str {
        "resume"
    }
    fn category(&self) -> Category {
        Category::Actions
    }
    fn execute(&self, _inv: &Invocation, env: &mut Environment<'_>) -> Result<CommandResult> {
        let resume = &env.profile.resume;
        Ok(CommandResult {
            output: vec![
                "Preparing resume download...".to_string(),
                format!("📄 {}", resume.display_name),
                format!("Size: {}", resume.size_label),
                String::new(),
                "Download started!".to_string(),
            ],
            action: Some(Action::immediate(ActionKind::DownloadResume)),
            ..Default::default()
        })
    }
}

// ---------------------------------------------------------------------------
// github / linkedin / email
// ---------------------------------------------------------------------------

struct GithubCmd;
impl Command for GithubCmd {
    fn name(&self) -> &str {
        "github"
    }
    fn description(&self) -> &str {
        "Visit my GitHub profile"
    }
    fn usage(&self) -> &str {
        "github"
    }
    fn category(&self) -> Category {
        Category::Actions
    }
    fn execute(&self, _inv: &Invocation, env: &mut Environment<'_>) -> Result<CommandResult> {
        Ok(CommandResult {
            output: vec!["Opening GitHub profile...".to_string()],
            action: Some(Action::immediate(ActionKind::OpenUrl(
                env.profile.github_url.clone(),
            ))),
            ..Default::default()
        })
    }
}

struct LinkedinCmd;
impl Command for LinkedinCmd {
    fn name(&self) -> &str {
        "linkedin"
    }
    fn description(&self) -> &str {
        "Connect on LinkedIn"
    }
    fn usage(&self) -> &str {
        "linkedin"
    }
    fn category(&self) -> Category {
        Category::Actions
    }
    fn execute(&self, _inv: &Invocation, env: &mut Environment<'_>) -> Result<CommandResult> {
        Ok(CommandResult {
            output: vec!["Opening LinkedIn profile...".to_string()],
            action: Some(Action::immediate(ActionKind::OpenUrl(
                env.profile.linkedin_url.clone(),
            ))),
            ..Default::default()
        })
    }
}

struct EmailCmd;
impl Command for EmailCmd {
    fn name(&self) -> &str {
        "email"
    }
    fn description(&self) -> &str {
        "Send me an email"
    }
    fn usage(&self) -> &str {
        "email"
    }
    fn category(&self) -> Category {
        Category::Actions
    }
    fn execute(&self, _inv: &Invocation, env: &mut Environment<'_>) -> Result<CommandResult> {
        Ok(CommandResult {
            output: vec!["Opening email client...".to_string()],
            action: Some(Action::immediate(ActionKind::ComposeMail(
                env.profile.email.clone(),
            ))),
            ..Default::default()
        })
    }
}

/// Register side-effect commands.
pub fn register_action_commands(reg: &mut crate::CommandRegistry) {
    reg.register(Box::new(HireCmd));
    reg.register(Box::new(ResumeCmd));
    reg.register(Box::new(GithubCmd));
    reg.register(Box::new(LinkedinCmd));
    reg.register(Box::new(EmailCmd));
}

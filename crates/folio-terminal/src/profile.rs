//! Presented-developer profile data.
//!
//! Everything the command catalogue displays about the portfolio's owner
//! lives here: identity, links, resume asset, skills, projects, and the
//! fortune pool. Loadable from TOML with built-in defaults for every
//! field, so the binary runs with no config file at all.

use std::path::Path;

use serde::Deserialize;

use folio_types::error::Result;

/// The presented developer's profile.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Display name shown in the banner and window title.
    pub name: String,
    /// One-line professional title.
    pub title: String,
    /// Lines rendered inside the `about` box (after the title).
    pub about: Vec<String>,
    pub github_url: String,
    pub linkedin_url: String,
    pub email: String,
    pub resume: ResumeInfo,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<Project>,
    /// Pool the `fortune` command picks from.
    pub fortunes: Vec<String>,
}

/// Resume download metadata.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResumeInfo {
    /// Asset path or URL handed to the download collaborator.
    pub asset: String,
    /// Filename suggested to the visitor.
    pub save_as: String,
    /// Name shown in the command output.
    pub display_name: String,
    /// Size shown in the command output.
    pub size_label: String,
}

/// A named group of skills.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub items: Vec<String>,
}

/// A featured project.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub name: String,
    pub tech: String,
    /// Bullet points rendered under the project.
    pub points: Vec<String>,
}

impl Profile {
    /// Parse a profile from TOML text. Missing fields keep defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a profile from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Jordan Avery".to_string(),
            title: "Full Stack Developer | UI/UX Enthusiast".to_string(),
            about: vec![
                "Passionate about creating exceptional digital".to_string(),
                "experiences with modern web technologies.".to_string(),
                String::new(),
                "🚀 3+ years of experience".to_string(),
                "💡 Problem solver & creative thinker".to_string(),
                "🎯 Detail-oriented & performance-focused".to_string(),
                "🤝 Excellent team player & communicator".to_string(),
            ],
            github_url: "https://github.com/javery-dev".to_string(),
            linkedin_url: "https://www.linkedin.com/in/javery-dev".to_string(),
            email: "jordan@javery.dev".to_string(),
            resume: ResumeInfo::default(),
            skills: default_skills(),
            projects: default_projects(),
            fortunes: vec![
                "A new opportunity will present itself soon.".to_string(),
                "Your code will compile on the first try today.".to_string(),
                "The bug you seek is in line 42.".to_string(),
                "Your next project will exceed expectations.".to_string(),
                "Coffee is the answer. It doesn't matter what the question is.".to_string(),
            ],
        }
    }
}

impl Default for ResumeInfo {
    fn default() -> Self {
        Self {
            asset: "assets/resume.pdf".to_string(),
            save_as: "JordanAvery_Resume.pdf".to_string(),
            display_name: "Resume_FullStackDeveloper.pdf".to_string(),
            size_label: "184 KB".to_string(),
        }
    }
}

fn default_skills() -> Vec<SkillCategory> {
    let group = |name: &str, items: &[&str]| SkillCategory {
        name: name.to_string(),
        items: items.iter().map(|s| s.to_string()).collect(),
    };
    vec![
        group(
            "Programming Languages",
            &["C/C++", "Python", "JavaScript", "TypeScript", "Rust"],
        ),
        group(
            "Web Technologies",
            &["React.js", "Next.js", "Node.js", "RESTful APIs", "Tailwind CSS"],
        ),
        group("Databases & Data", &["PostgreSQL", "MongoDB", "Redis"]),
        group(
            "Developer Tools",
            &["Git", "Docker", "Kubernetes", "CI/CD"],
        ),
        group(
            "Soft Skills",
            &["Problem Solving", "Team Collaboration", "Communication"],
        ),
    ]
}

fn default_projects() -> Vec<Project> {
    let project = |name: &str, tech: &str, points: &[&str]| Project {
        name: name.to_string(),
        tech: tech.to_string(),
        points: points.iter().map(|s| s.to_string()).collect(),
    };
    vec![
        project(
            "Community Club Website",
            "React.js, Tailwind CSS, Node.js, MongoDB",
            &[
                "Architected and implemented a responsive club web application",
                "Enhanced performance, security, and user engagement",
            ],
        ),
        project(
            "Hostel Administration System",
            "Next.js, Go, PostgreSQL, Turborepo",
            &[
                "Full-stack app automating maintenance requests & complaints",
                "Go backend with REST APIs & JWT auth, responsive Next.js frontend",
            ],
        ),
        project(
            "Recruitment Portal",
            "Next.js, Node.js, Tailwind CSS, MongoDB",
            &[
                "Portal streamlining applications for 1,100+ students",
                "User auth, role-based dashboards, and task submission with uploads",
            ],
        ),
    ]
}

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::modal::{PreviewDescriptor, PreviewKind};

pub const DEFAULT_CONTENT: &str = include_str!("../content/portfolio.yaml");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub intro: Intro,
    #[serde(default)]
    pub experience: Vec<Job>,
    pub projects: Vec<Project>,
    pub contact: Vec<ContactLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intro {
    #[serde(default = "default_greeting")]
    pub greeting: String,
    pub name: String,
    #[serde(default)]
    pub tagline: Vec<String>,
}

fn default_greeting() -> String {
    "hey, i'm".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub company: String,
    pub role: String,
    #[serde(default)]
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub summary: String,
}

impl Job {
    pub fn period(&self) -> String {
        format!("{} \u{2014} {}", self.start_date, self.end_date)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub tech: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<PreviewDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub value: String,
    pub href: String,
}

/// A validated portfolio plus the directory relative media paths resolve
/// against.
#[derive(Debug, Clone)]
pub struct Content {
    pub portfolio: Portfolio,
    pub base_dir: PathBuf,
}

impl Content {
    pub fn embedded() -> Result<Self> {
        let portfolio = parse(DEFAULT_CONTENT).context("Embedded portfolio is invalid")?;
        let base_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Ok(Self {
            portfolio,
            base_dir,
        })
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("Content file not found: {}", path.display())
            } else {
                anyhow::anyhow!("Failed to read {}: {e}", path.display())
            }
        })?;
        let portfolio = parse(&text).with_context(|| format!("Invalid {}", path.display()))?;
        let base_dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
            .to_path_buf();
        log::info!(
            "loaded {} jobs, {} projects, {} links from {}",
            portfolio.experience.len(),
            portfolio.projects.len(),
            portfolio.contact.len(),
            path.display()
        );
        Ok(Self {
            portfolio,
            base_dir,
        })
    }

    /// Load from `path` when given, otherwise the embedded default.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from(p),
            None => Self::embedded(),
        }
    }
}

pub fn parse(text: &str) -> Result<Portfolio> {
    let portfolio: Portfolio = serde_yaml::from_str(text)?;
    validate(&portfolio)?;
    Ok(portfolio)
}

pub fn validate(portfolio: &Portfolio) -> Result<()> {
    if portfolio.intro.name.trim().is_empty() {
        anyhow::bail!("intro.name must not be empty");
    }
    if portfolio.projects.is_empty() {
        anyhow::bail!("At least one project is required");
    }
    if portfolio.contact.is_empty() {
        anyhow::bail!("At least one contact link is required");
    }
    for link in &portfolio.contact {
        if link.href.trim().is_empty() {
            anyhow::bail!("Contact link '{}' has an empty href", link.label);
        }
    }
    for project in &portfolio.projects {
        let Some(preview) = &project.preview else {
            continue;
        };
        if preview.source.trim().is_empty() {
            anyhow::bail!("Project '{}' has a preview with no source", project.name);
        }
        if preview.kind == PreviewKind::EmbeddedRemote
            && !(preview.source.starts_with("https://") || preview.source.starts_with("http://"))
        {
            anyhow::bail!(
                "Project '{}' has a remote preview that is not an http(s) URL: {}",
                project.name,
                preview.source
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = "\
intro:
  name: Sam
projects:
  - name: Thing
contact:
  - label: Email
    value: sam@example.com
    href: mailto:sam@example.com
";

    #[test]
    fn test_embedded_content_parses() {
        let portfolio = parse(DEFAULT_CONTENT).expect("embedded content is valid");
        assert!(!portfolio.experience.is_empty());
        assert_eq!(portfolio.projects.len(), 3);
        assert!(portfolio.projects.iter().any(|p| p.preview.is_some()));
        assert!(portfolio.projects.iter().any(|p| p.preview.is_none()));
        assert!(portfolio.experience[0].current);
    }

    #[test]
    fn test_minimal_content_uses_defaults() {
        let portfolio = parse(MINIMAL).expect("minimal content is valid");
        assert_eq!(portfolio.intro.greeting, "hey, i'm");
        assert!(portfolio.intro.tagline.is_empty());
        assert!(portfolio.experience.is_empty());
        assert_eq!(portfolio.projects[0].preview, None);
    }

    #[test]
    fn test_job_period() {
        let portfolio = parse(DEFAULT_CONTENT).expect("embedded content is valid");
        let period = portfolio.experience[0].period();
        assert!(period.contains("Jan 2026"));
        assert!(period.contains("Apr 2026"));
    }

    #[test]
    fn test_rejects_empty_name() {
        let text = MINIMAL.replace("name: Sam", "name: \"  \"");
        let err = parse(&text).unwrap_err();
        assert!(err.to_string().contains("intro.name"), "{err}");
    }

    #[test]
    fn test_rejects_missing_contact() {
        let text = "intro:\n  name: Sam\nprojects:\n  - name: A\ncontact: []\n";
        assert!(parse(text).is_err());
    }

    #[test]
    fn test_rejects_non_http_remote_preview() {
        let text = MINIMAL.replace(
            "  - name: Thing\n",
            "  - name: Thing\n    preview:\n      kind: embedded-remote\n      source: ftp://x\n",
        );
        let err = parse(&text).unwrap_err();
        assert!(err.to_string().contains("http(s)"), "{err}");
    }

    #[test]
    fn test_accepts_file_preview() {
        let text = MINIMAL.replace(
            "  - name: Thing\n",
            "  - name: Thing\n    preview:\n      kind: embedded-file\n      source: demo.mp4\n",
        );
        let portfolio = parse(&text).expect("file preview is valid");
        assert_eq!(
            portfolio.projects[0].preview,
            Some(PreviewDescriptor::file("demo.mp4"))
        );
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = Content::load_from(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(err.to_string().contains("not found"), "{err}");
    }

    #[test]
    fn test_load_from_file_sets_base_dir() {
        let dir = std::env::temp_dir().join(format!("folio-content-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        let path = dir.join("portfolio.yaml");
        std::fs::write(&path, MINIMAL).expect("write content");

        let content = Content::load(Some(&path)).expect("load content");
        assert_eq!(content.base_dir, dir);
        assert_eq!(content.portfolio.intro.name, "Sam");

        let _ = std::fs::remove_dir_all(&dir);
    }
}

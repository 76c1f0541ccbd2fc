use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;

use crate::content::{self, Content};

pub fn run(check: Option<PathBuf>) -> Result<()> {
    let Some(path) = check else {
        print!("{}", content::DEFAULT_CONTENT);
        return Ok(());
    };

    let loaded = Content::load_from(&path)?;
    let portfolio = &loaded.portfolio;
    let previews = portfolio
        .projects
        .iter()
        .filter(|p| p.preview.is_some())
        .count();
    println!("{} {}", "\u{2713}".green().bold(), path.display());
    println!(
        "  {} jobs, {} projects ({} with previews), {} contact links",
        portfolio.experience.len(),
        portfolio.projects.len(),
        previews,
        portfolio.contact.len()
    );
    Ok(())
}

use anyhow::Result;
use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::Config;

pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => set(&key, &value),
    }
}

fn show() -> Result<()> {
    let path = Config::path()?;
    let config = Config::load_or_default();
    let defaults = config.defaults.unwrap_or_default();

    println!("{} {}", "Config file:".bold(), path.display());
    if !path.exists() {
        println!("{}", "(not created yet, showing defaults)".dimmed());
    }
    println!();

    let rows = [
        ("defaults.theme", defaults.theme, "dark"),
        ("defaults.start_slide", defaults.start_slide, "intro"),
        ("defaults.content", defaults.content, "(built-in)"),
    ];
    for (key, value, fallback) in rows {
        match value {
            Some(v) => println!("  {:<22} {}", key.cyan(), v),
            None => println!("  {:<22} {}", key.cyan(), fallback.dimmed()),
        }
    }
    Ok(())
}

fn set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load_or_default();
    config.set(key, value)?;
    let path = config.save()?;
    println!("{} {} = {}", "Set".green().bold(), key, value);
    log::debug!("wrote {}", path.display());
    Ok(())
}

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about)]
#[command(long_about = "A keyboard-driven portfolio slideshow.\n\n\
    Four panels (intro, experience, projects, contact) navigated with the\n\
    arrow keys, Space/Enter, or the mouse.\n\n\
    Examples:\n  \
    folio                          Launch fullscreen with the built-in portfolio\n  \
    folio --content me.yaml        Launch with your own portfolio file\n  \
    folio --windowed --slide 3     Start windowed on the projects panel\n  \
    folio content > me.yaml        Write out the built-in portfolio as a template")]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Portfolio YAML to present (defaults to the built-in one)
    #[arg(long, global = false)]
    pub content: Option<PathBuf>,

    /// Launch in a window instead of fullscreen
    #[arg(long, global = false)]
    pub windowed: bool,

    /// Start on a specific slide: intro, experience, projects, contact, or 1-4
    #[arg(long, global = false)]
    pub slide: Option<String>,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Print the built-in portfolio YAML, or validate a portfolio file
    Content {
        /// Validate this file instead of printing the built-in content
        #[arg(long)]
        check: Option<PathBuf>,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. defaults.theme, defaults.start_slide, defaults.content)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    /// `log` level implied by the verbosity flags.
    pub fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            return log::LevelFilter::Error;
        }
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Commands::Config { command }) => crate::commands::config::run(command),
            Some(Commands::Content { check }) => crate::commands::content::run(check),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::Version) => {
                crate::banner::print_banner_with_version();
                Ok(())
            }
            None => crate::app::run(self.content, self.windowed, self.slide),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_launch_flags() {
        let cli = Cli::parse_from(["folio", "--content", "me.yaml", "--windowed", "--slide", "projects"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.content, Some(PathBuf::from("me.yaml")));
        assert!(cli.windowed);
        assert_eq!(cli.slide.as_deref(), Some("projects"));
    }

    #[test]
    fn test_config_set_parses() {
        let cli = Cli::parse_from(["folio", "config", "set", "defaults.theme", "light"]);
        match cli.command {
            Some(Commands::Config {
                command: ConfigCommands::Set { key, value },
            }) => {
                assert_eq!(key, "defaults.theme");
                assert_eq!(value, "light");
            }
            _ => panic!("expected config set"),
        }
    }

    #[test]
    fn test_log_level() {
        assert_eq!(Cli::parse_from(["folio"]).log_level(), log::LevelFilter::Warn);
        assert_eq!(Cli::parse_from(["folio", "-v"]).log_level(), log::LevelFilter::Debug);
        assert_eq!(Cli::parse_from(["folio", "-vv"]).log_level(), log::LevelFilter::Trace);
        assert_eq!(Cli::parse_from(["folio", "-q"]).log_level(), log::LevelFilter::Error);
    }
}

//! Runtime configuration: the `~/.playground/` directory and CLI arguments.

use crate::constants::{CONFIG_DIR_NAME, CONTENT_FILE_NAME, LOG_FILE_NAME};
use crate::playground::GameTab;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Get the ~/.playground/ directory path, creating it if needed.
pub fn playground_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    playground_dir_in(&home_dir)
}

fn playground_dir_in(home: &Path) -> io::Result<PathBuf> {
    let dir = home.join(CONFIG_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

pub fn content_path() -> io::Result<PathBuf> {
    Ok(playground_dir()?.join(CONTENT_FILE_NAME))
}

pub fn log_path() -> io::Result<PathBuf> {
    Ok(playground_dir()?.join(LOG_FILE_NAME))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Fixed RNG seed; entropy when absent.
    pub seed: Option<u64>,
    pub start_tab: GameTab,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            start_tab: GameTab::Snake,
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Run(Config),
    Help,
    Version,
}

pub const USAGE: &str = "\
Playground - terminal mini-games

Usage: playground [options]

Options:
  --seed <n>    Use a fixed random seed
  --tab <name>  Start on a tab: snake, aim, memory, quiz, reaction
  --version     Show version information
  --help        Show this help message

Keys:
  Tab / Shift-Tab  Switch game        F1-F5  Jump to game
  Esc / q          Quit";

/// Parse arguments (without the program name).
pub fn parse_args<I>(args: I) -> Result<CliCommand, String>
where
    I: IntoIterator<Item = String>,
{
    let mut config = Config::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-v" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--seed" => {
                let value = args.next().ok_or("--seed requires a value")?;
                let seed = value
                    .parse::<u64>()
                    .map_err(|_| format!("Invalid seed: {}", value))?;
                config.seed = Some(seed);
            }
            "--tab" => {
                let value = args.next().ok_or("--tab requires a value")?;
                config.start_tab =
                    GameTab::from_name(&value).ok_or(format!("Unknown tab: {}", value))?;
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
    }
    Ok(CliCommand::Run(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliCommand, String> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_no_args_runs_with_defaults() {
        assert_eq!(parse(&[]), Ok(CliCommand::Run(Config::default())));
    }

    #[test]
    fn test_seed_and_tab() {
        let cmd = parse(&["--seed", "7", "--tab", "quiz"]).unwrap();
        assert_eq!(
            cmd,
            CliCommand::Run(Config {
                seed: Some(7),
                start_tab: GameTab::Quiz,
            })
        );
    }

    #[test]
    fn test_help_and_version() {
        assert_eq!(parse(&["--help"]), Ok(CliCommand::Help));
        assert_eq!(parse(&["-v"]), Ok(CliCommand::Version));
        assert_eq!(parse(&["--seed", "1", "--version"]), Ok(CliCommand::Version));
    }

    #[test]
    fn test_errors() {
        assert!(parse(&["--seed"]).is_err());
        assert!(parse(&["--seed", "abc"]).is_err());
        assert!(parse(&["--tab", "chess"]).is_err());
        assert!(parse(&["update"]).is_err());
    }

    #[test]
    fn test_playground_dir_created_under_home() {
        let home = std::env::temp_dir().join("playground_config_test_home");
        let _ = fs::remove_dir_all(&home);

        let dir = playground_dir_in(&home).expect("playground_dir_in should succeed");
        assert!(dir.is_dir());
        assert!(dir.join(CONTENT_FILE_NAME).ends_with(".playground/content.json"));
        assert!(dir.join(LOG_FILE_NAME).ends_with(".playground/playground.log"));

        let _ = fs::remove_dir_all(&home);
    }
}

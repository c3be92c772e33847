//! Command-line and environment configuration.

use crate::constants::{DATA_DIR_ENV, LOG_FILE};
use crate::game::Difficulty;
use crate::utils::persistence::default_data_dir;
use std::fmt;
use std::path::PathBuf;

pub const USAGE: &str = "\
gridsnake - terminal snake on a 40x40 board

Usage: gridsnake [options]

Options:
  -d, --difficulty <easy|medium|hard>  Skip the level selection and start playing
      --data-dir <path>                Where high scores and logs are kept
                                       (default: ~/.gridsnake, or $GRIDSNAKE_DATA_DIR)
      --no-save                        Keep high scores in memory only
  -v, --version                        Show version information
  -h, --help                           Show this help message";

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub data_dir: PathBuf,
    /// Write high scores to disk.
    pub persist: bool,
    pub start_difficulty: Option<Difficulty>,
}

impl GameConfig {
    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE)
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    Play(GameConfig),
    Help,
    Version,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownArgument(String),
    MissingValue(&'static str),
    InvalidDifficulty(String),
    NoDataDir,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownArgument(arg) => write!(f, "unknown argument: {}", arg),
            Self::MissingValue(flag) => write!(f, "{} requires a value", flag),
            Self::InvalidDifficulty(msg) => f.write_str(msg),
            Self::NoDataDir => write!(
                f,
                "could not determine home directory; pass --data-dir or set {}",
                DATA_DIR_ENV
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Parse arguments (without the program name). `env_data_dir` is the value
/// of `GRIDSNAKE_DATA_DIR`, which `--data-dir` overrides.
pub fn parse_args<I>(args: I, env_data_dir: Option<PathBuf>) -> Result<CliAction, ConfigError>
where
    I: IntoIterator<Item = String>,
{
    let mut data_dir: Option<PathBuf> = None;
    let mut persist = true;
    let mut start_difficulty = None;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(CliAction::Help),
            "--version" | "-v" => return Ok(CliAction::Version),
            "--no-save" => persist = false,
            "--difficulty" | "-d" => {
                let value = args.next().ok_or(ConfigError::MissingValue("--difficulty"))?;
                let difficulty = value
                    .parse::<Difficulty>()
                    .map_err(ConfigError::InvalidDifficulty)?;
                start_difficulty = Some(difficulty);
            }
            "--data-dir" => {
                let value = args.next().ok_or(ConfigError::MissingValue("--data-dir"))?;
                data_dir = Some(PathBuf::from(value));
            }
            other => return Err(ConfigError::UnknownArgument(other.to_string())),
        }
    }

    let data_dir = match data_dir.or(env_data_dir) {
        Some(dir) => dir,
        None => default_data_dir().map_err(|_| ConfigError::NoDataDir)?,
    };

    Ok(CliAction::Play(GameConfig {
        data_dir,
        persist,
        start_difficulty,
    }))
}

/// Parse the process arguments and environment.
pub fn from_env() -> Result<CliAction, ConfigError> {
    let env_data_dir = std::env::var_os(DATA_DIR_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);
    parse_args(std::env::args().skip(1), env_data_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn play(list: &[&str], env: Option<&str>) -> GameConfig {
        match parse_args(args(list), env.map(PathBuf::from)) {
            Ok(CliAction::Play(config)) => config,
            other => panic!("expected Play, got {:?}", other),
        }
    }

    #[test]
    fn test_defaults() {
        let config = play(&[], None);
        assert!(config.persist);
        assert_eq!(config.start_difficulty, None);
        assert!(config.data_dir.ends_with(".gridsnake"));
        assert!(config.log_path().ends_with("gridsnake.log"));
    }

    #[test]
    fn test_flags() {
        let config = play(
            &["--difficulty", "hard", "--data-dir", "/tmp/snake", "--no-save"],
            None,
        );
        assert_eq!(config.start_difficulty, Some(Difficulty::Hard));
        assert_eq!(config.data_dir, PathBuf::from("/tmp/snake"));
        assert!(!config.persist);
    }

    #[test]
    fn test_data_dir_precedence() {
        assert_eq!(play(&[], Some("/env/dir")).data_dir, PathBuf::from("/env/dir"));
        assert_eq!(
            play(&["--data-dir", "/cli/dir"], Some("/env/dir")).data_dir,
            PathBuf::from("/cli/dir")
        );
    }

    #[test]
    fn test_help_and_version() {
        assert_eq!(parse_args(args(&["--help"]), None), Ok(CliAction::Help));
        assert_eq!(parse_args(args(&["-v"]), None), Ok(CliAction::Version));
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            parse_args(args(&["--turbo"]), None),
            Err(ConfigError::UnknownArgument("--turbo".to_string()))
        );
        assert_eq!(
            parse_args(args(&["--difficulty"]), None),
            Err(ConfigError::MissingValue("--difficulty"))
        );
        assert!(matches!(
            parse_args(args(&["-d", "nightmare"]), None),
            Err(ConfigError::InvalidDifficulty(_))
        ));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::MissingValue("--data-dir").to_string(),
            "--data-dir requires a value"
        );
        assert!(ConfigError::NoDataDir.to_string().contains("GRIDSNAKE_DATA_DIR"));
    }
}

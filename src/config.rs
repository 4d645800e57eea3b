use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::board::Player;
use crate::error::ConfigError;
use crate::search::DEFAULT_DEPTH;

/// Config file read when no `--config` is given
pub const DEFAULT_CONFIG_PATH: &str = "mnk.toml";

/// Game settings shared by the GUI and the CLI, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub height: usize,
    pub width: usize,
    pub run_length: usize,
    pub misere: bool,
    /// Search depth in plies
    pub depth: u32,
    /// Side played by the computer; `None` for two humans
    pub ai_player: Option<Player>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            height: 3,
            width: 3,
            run_length: 3,
            misere: false,
            depth: DEFAULT_DEPTH,
            ai_player: Some(Player::O),
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.height == 0 || self.width == 0 {
            return Err(ConfigError::Validation(
                "height and width must be > 0".into(),
            ));
        }
        if self.run_length == 0 {
            return Err(ConfigError::Validation("run_length must be > 0".into()));
        }
        if self.depth == 0 {
            return Err(ConfigError::Validation("depth must be > 0".into()));
        }
        Ok(())
    }

    /// Search depth as passed to the session
    pub fn search_depth(&self) -> i32 {
        i32::try_from(self.depth).unwrap_or(i32::MAX)
    }
}

/// Which side the computer plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AiSide {
    X,
    O,
    None,
}

impl From<AiSide> for Option<Player> {
    fn from(side: AiSide) -> Self {
        match side {
            AiSide::X => Some(Player::X),
            AiSide::O => Some(Player::O),
            AiSide::None => None,
        }
    }
}

/// Command line options shared by the binaries. Flags override values
/// from the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Path to a TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Board rows
    #[arg(long)]
    pub height: Option<usize>,

    /// Board columns
    #[arg(long)]
    pub width: Option<usize>,

    /// Marks in a row needed to complete a run
    #[arg(long)]
    pub run_length: Option<usize>,

    /// Completing a run loses instead of winning
    #[arg(long)]
    pub misere: bool,

    /// AI search depth in plies
    #[arg(long)]
    pub depth: Option<u32>,

    /// Side played by the computer
    #[arg(long, value_enum)]
    pub ai: Option<AiSide>,
}

impl ConfigArgs {
    /// Load the config file and apply the flags on top. Without
    /// `--config`, `mnk.toml` is used if present.
    pub fn resolve(&self) -> Result<GameConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::load_or_default(Path::new(DEFAULT_CONFIG_PATH))?,
        };
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(run_length) = self.run_length {
            config.run_length = run_length;
        }
        if self.misere {
            config.misere = true;
        }
        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        if let Some(ai) = self.ai {
            config.ai_player = ai.into();
        }
        config.validate()?;
        Ok(config)
    }
}

//! Player configuration loaded from TOML.

use crossterm::style::Color;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_core::{PlayerId, PlayerProfile};
use tracing::{debug, info, instrument};

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Colour a player's marks are drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MarkColor {
    /// Red.
    Red,
    /// Green.
    Green,
    /// Yellow.
    Yellow,
    /// Blue.
    Blue,
    /// Magenta.
    Magenta,
    /// Cyan.
    Cyan,
    /// White.
    White,
}

impl MarkColor {
    /// Terminal colour for this mark.
    pub fn to_terminal(self) -> Color {
        match self {
            MarkColor::Red => Color::Red,
            MarkColor::Green => Color::Green,
            MarkColor::Yellow => Color::Yellow,
            MarkColor::Blue => Color::Blue,
            MarkColor::Magenta => Color::Magenta,
            MarkColor::Cyan => Color::Cyan,
            MarkColor::White => Color::White,
        }
    }
}

/// Display settings for one seat.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Display name.
    label: String,
    /// Mark drawn in claimed cells.
    symbol: String,
    /// Colour of the mark.
    color: MarkColor,
}

impl PlayerConfig {
    /// Defaults for a seat: blue `X` for player one, yellow `O` for player two.
    pub fn default_for(id: PlayerId) -> Self {
        let profile = PlayerProfile::default_for(id);
        let color = match id {
            PlayerId::One => MarkColor::Blue,
            PlayerId::Two => MarkColor::Yellow,
        };
        Self {
            label: profile.label().clone(),
            symbol: profile.symbol().clone(),
            color,
        }
    }

    /// Engine-side profile for this seat.
    pub fn profile(&self) -> PlayerProfile {
        PlayerProfile::new(self.symbol.clone(), self.label.clone())
    }
}

/// Console game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Player one (moves first).
    #[serde(default = "default_player_one")]
    player_one: PlayerConfig,

    /// Player two.
    #[serde(default = "default_player_two")]
    player_two: PlayerConfig,
}

#[instrument]
fn default_player_one() -> PlayerConfig {
    PlayerConfig::default_for(PlayerId::One)
}

#[instrument]
fn default_player_two() -> PlayerConfig {
    PlayerConfig::default_for(PlayerId::Two)
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_one: default_player_one(),
            player_two: default_player_two(),
        }
    }
}

impl GameConfig {
    /// Settings for a seat.
    pub fn player(&self, id: PlayerId) -> &PlayerConfig {
        match id {
            PlayerId::One => &self.player_one,
            PlayerId::Two => &self.player_two,
        }
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            player_one = %config.player_one.label,
            player_two = %config.player_two.label,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads from `path` when given, otherwise returns the defaults.
    #[instrument(skip(path))]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }

    /// Checks labels and symbols are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (seat, player) in [("player_one", &self.player_one), ("player_two", &self.player_two)] {
            if player.label.trim().is_empty() {
                return Err(ConfigError::new(format!("{seat}.label must not be empty")));
            }
            if player.symbol.trim().is_empty() {
                return Err(ConfigError::new(format!("{seat}.symbol must not be empty")));
            }
        }
        if self.player_one.symbol == self.player_two.symbol {
            return Err(ConfigError::new(format!(
                "players must use different symbols (both are {:?})",
                self.player_one.symbol
            )));
        }
        Ok(())
    }
}

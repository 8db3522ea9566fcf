//! Rules configuration, loadable from TOML.
//!
//! ```toml
//! checkmate = "full"
//! promotion = "auto_queen"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How a king in check is judged checkmated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckmateDetection {
    /// Checkmate when none of the king's eight neighbouring squares is a safe
    /// escape. Blocking the check or capturing the checker with another piece
    /// is not considered, so some positions are reported as mate too early.
    #[default]
    KingEscapeOnly,
    /// Checkmate when no legal move of any piece resolves the check.
    Full,
}

/// What happens when a pawn reaches the farthest rank without a promotion kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromotionPolicy {
    /// The move is rejected.
    #[default]
    Explicit,
    /// The pawn becomes a queen.
    AutoQueen,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub checkmate: CheckmateDetection,
    pub promotion: PromotionPolicy,
}

impl RulesConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load rules configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

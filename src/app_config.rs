use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Extraction engine settings
    #[serde(default)]
    pub parser: ParserConfig,

    /// Reply and character filtering settings
    #[serde(default)]
    pub filter: FilterConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Extraction engine thresholds
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Characters with fewer surviving replies than this are dropped
    #[serde(default = "default_minimum_replies")]
    pub minimum_replies: usize,

    /// Scripts with fewer surviving characters than this are retried with
    /// the reformatting fallback, then reported unparsed
    #[serde(default = "default_minimum_characters")]
    pub minimum_characters: usize,

    /// Matches a reformatting cue pattern must exceed before its rewrite
    /// is applied to the script
    #[serde(default = "default_reformat_line_threshold")]
    pub reformat_line_threshold: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            minimum_replies: default_minimum_replies(),
            minimum_characters: default_minimum_characters(),
            reformat_line_threshold: default_reformat_line_threshold(),
        }
    }
}

/// Blacklists used to reject false-positive characters and replies
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    /// Substrings that disqualify a character name (case-sensitive)
    #[serde(default = "default_character_blacklist")]
    pub character_blacklist: Vec<String>,

    /// Substrings that disqualify a reply text (case-sensitive)
    #[serde(default = "default_reply_blacklist")]
    pub reply_blacklist: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            character_blacklist: default_character_blacklist(),
            reply_blacklist: default_reply_blacklist(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_minimum_replies() -> usize {
    1
}

fn default_minimum_characters() -> usize {
    5
}

fn default_reformat_line_threshold() -> usize {
    10
}

/// Scene, transition and narrative vocabulary that marks a cue header as
/// something other than a speaking character.
fn default_character_blacklist() -> Vec<String> {
    [
        " - ", " -- ", "...",
        "LATER", "LATE", "FADE OUT", "FADE IN", "CUT TO", "EXT.", "EXTERIOR",
        "INT.", "INTERIOR", "INSIDE", "OUTSIDE", "ANGLE ON", "MUSIC ON", "MUSIC UP",
        "CLOSE ON", "THE END", "CUT FROM", "CAMERA", "LENS", "MINIATURE", "ANGLE", "POV",
        "SUNSET", "AERIAL VIEW", "FANTASY", "CLOSE UP", "SLOW MOTION", "CLOSE-UP", " END ", " END.",
        "DAY", "NIGHT", "MORNING", "EVENING", "WEEK", "THE ", "SCENE", "ACTION", "CONTINUED", "CHANGED", "HORIZON",
        "ENDS", "MONTAGE", "FROM", "WIDE-SHOT", "SHOT", "EXPLOSION", "THEY", "DISSOLVE", "FOOTAGE",
        "ROOM", "UP AHEAD", "SHOOTING SCRIPT", "NEARBY", "CUTS", "SEES", "INSERT", "REVEAL",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Same vocabulary family for reply text. Slightly smaller than the
/// character list and with its own spacing variants.
fn default_reply_blacklist() -> Vec<String> {
    [
        "LATER", "FADE OUT", "FADE IN", "CUT TO", "EXT.", "EXTERIOR",
        "INT.", "INTERIOR", "ANGLE ON", "MUSIC ON", "MUSIC UP",
        "CLOSE ON", "THE END", "CUT FROM", "CAMERA", "LENS", "MINIATURE", "ANGLE", "POV",
        "SUNSET", "AERIAL VIEW", "FANTASY", "CLOSE UP", "SLOW MOTION", "CLOSE-UP", "END ",
        " DAY", " NIGHT", " MORNING", "WEEK", "SCENE", "CONTINUED", "CHANGED", "HORIZON",
        "ENDS", "MONTAGE", "WIDE-SHOT", "DISSOLVE", "FILM INSET",
        "ROOM", "UP AHEAD", "SHOOTING SCRIPT", "NEARBY", "CUTS", "INSERT",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        // An empty substring is contained in every string, which would
        // silently drop every reply or character
        if self.filter.character_blacklist.iter().any(|w| w.is_empty()) {
            return Err(anyhow!("Character blacklist entries must not be empty"));
        }
        if self.filter.reply_blacklist.iter().any(|w| w.is_empty()) {
            return Err(anyhow!("Reply blacklist entries must not be empty"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            parser: ParserConfig::default(),
            filter: FilterConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

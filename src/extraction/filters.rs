/*!
 * Blacklist and pattern rejection of false positives.
 *
 * The cue scanner is deliberately permissive, so scene headers, camera
 * directions and page furniture regularly come out of it looking like
 * characters. This pass removes replies that carry production vocabulary
 * or page numbers, then removes characters whose name or surviving reply
 * count disqualifies them.
 */

use std::sync::LazyLock;

use regex::Regex;

use crate::app_config::FilterConfig;
use crate::script_model::Character;

/// Page numbers that leak into dialogue: digits followed by a period.
static PAGE_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.").expect("Invalid page number regex"));

/// Shot labels scanned as names, like "B3" or "A337".
static SHOT_LABEL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]\d+").expect("Invalid shot label regex"));

/// Prefixes marking a cue as a direction rather than a character.
const REJECTED_PREFIXES: [&str; 6] = ["ON ", "BACK ", "CUT ", "TO ", "A ", "END "];

/// Names with more space characters than this are rejected.
const MAX_NAME_SPACES: usize = 5;

/// Reply and character filter driven by blacklist configuration.
#[derive(Debug, Clone)]
pub struct CharacterFilter {
    config: FilterConfig,
    minimum_replies: usize,
}

impl CharacterFilter {
    /// Create a filter with the given blacklists and reply threshold.
    pub fn new(config: FilterConfig, minimum_replies: usize) -> Self {
        Self {
            config,
            minimum_replies,
        }
    }

    /// Create with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(FilterConfig::default(), 1)
    }

    /// Clean an extracted character list.
    ///
    /// Replies are filtered first; the character conditions then run
    /// against the reduced reply lists. Order of survivors is preserved.
    pub fn clean(&self, characters: Vec<Character>) -> Vec<Character> {
        let mut kept = Vec::with_capacity(characters.len());

        for mut character in characters {
            character.replies.retain(|reply| self.keep_reply(&reply.text));

            if self.keep_character(&character) {
                kept.push(character);
            }
        }

        kept
    }

    /// A reply survives unless it carries blacklisted vocabulary or a
    /// page number.
    fn keep_reply(&self, text: &str) -> bool {
        if self
            .config
            .reply_blacklist
            .iter()
            .any(|word| text.contains(word.as_str()))
        {
            return false;
        }

        !PAGE_NUMBER_REGEX.is_match(text)
    }

    fn keep_character(&self, character: &Character) -> bool {
        let name = character.name.as_str();

        if character.replies.len() < self.minimum_replies {
            return false;
        }
        if self
            .config
            .character_blacklist
            .iter()
            .any(|word| name.contains(word.as_str()))
        {
            return false;
        }
        if name.matches(' ').count() > MAX_NAME_SPACES {
            return false;
        }
        if SHOT_LABEL_REGEX.is_match(name) {
            return false;
        }
        if name.starts_with('(') && name.ends_with(')') {
            return false;
        }
        if name.ends_with('.') || name.ends_with(" -") {
            return false;
        }

        !REJECTED_PREFIXES.iter().any(|prefix| name.starts_with(prefix))
    }
}

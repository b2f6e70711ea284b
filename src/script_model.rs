/*!
 * Core data model for extracted movie scripts.
 *
 * These types provide a JSON-serializable representation of a parsed
 * screenplay: dialogue replies with their source offsets, characters with
 * their merged reply lists, and the movie record tying characters to the
 * script's header metadata.
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single line of dialogue extracted from a script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    /// Normalized dialogue text (one line, inner padding collapsed)
    pub text: String,

    /// Stage direction attached to this reply, composed from the cue
    /// header's annotation and the reply's own leading annotation
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub annotation: String,

    /// Byte offset where the raw reply starts in the scanned document
    pub start: usize,

    /// Byte offset one past the raw reply, terminal punctuation and line
    /// break included. When the reformatting fallback rewrote the script,
    /// offsets refer to the rewritten text.
    pub end: usize,
}

impl Reply {
    /// Create a new reply.
    pub fn new(text: String, annotation: String, start: usize, end: usize) -> Self {
        Self {
            text,
            annotation,
            start,
            end,
        }
    }

    /// Length in bytes of the raw span this reply was extracted from.
    pub fn span_len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check whether a stage direction is attached.
    pub fn has_annotation(&self) -> bool {
        !self.annotation.is_empty()
    }
}

/// A speaking character with all of their dialogue in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Character name exactly as printed in the cue header (trimmed).
    /// Names are case- and whitespace-sensitive identity keys, so "JOHN"
    /// and "JOHN " headers merge only after trimming.
    pub name: String,

    /// Replies in the order their cues appear in the script
    pub replies: Vec<Reply>,
}

impl Character {
    /// Create a new character.
    pub fn new(name: String, replies: Vec<Reply>) -> Self {
        Self { name, replies }
    }

    /// Number of replies attributed to this character.
    pub fn reply_count(&self) -> usize {
        self.replies.len()
    }
}

/// Outcome of character extraction for one script.
///
/// Serialized untagged, so the JSON `characters` field holds either an
/// array of character records or a plain diagnostic string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CharacterOutcome {
    /// Extraction succeeded and produced a usable cast list
    Characters(Vec<Character>),

    /// Extraction gave up; the string explains what to check
    Unparsed(String),
}

impl CharacterOutcome {
    /// Check whether extraction produced a cast list.
    pub fn is_parsed(&self) -> bool {
        matches!(self, Self::Characters(_))
    }

    /// Extracted characters, or `None` for an unparsed script.
    pub fn characters(&self) -> Option<&[Character]> {
        match self {
            Self::Characters(list) => Some(list),
            Self::Unparsed(_) => None,
        }
    }

    /// Diagnostic text, or `None` when extraction succeeded.
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            Self::Characters(_) => None,
            Self::Unparsed(message) => Some(message),
        }
    }
}

/// A fully parsed movie script: header metadata plus extraction outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Movie title as printed in the script header
    pub title: String,

    /// Script writers listed in the header
    pub authors: Vec<String>,

    /// Genres listed in the header
    pub genres: Vec<String>,

    /// Cast list, or a diagnostic string for scripts that resisted parsing
    pub characters: CharacterOutcome,
}

impl Movie {
    /// Create a movie with an extracted cast list.
    pub fn parsed(
        title: String,
        authors: Vec<String>,
        genres: Vec<String>,
        characters: Vec<Character>,
    ) -> Self {
        Self {
            title,
            authors,
            genres,
            characters: CharacterOutcome::Characters(characters),
        }
    }

    /// Create a movie whose script could not be parsed.
    pub fn unparsed(
        title: String,
        authors: Vec<String>,
        genres: Vec<String>,
        diagnostic: String,
    ) -> Self {
        Self {
            title,
            authors,
            genres,
            characters: CharacterOutcome::Unparsed(diagnostic),
        }
    }

    /// Number of extracted characters (0 for unparsed scripts).
    pub fn character_count(&self) -> usize {
        self.characters.characters().map_or(0, <[Character]>::len)
    }

    /// Total replies across all characters (0 for unparsed scripts).
    pub fn total_reply_count(&self) -> usize {
        self.characters
            .characters()
            .map_or(0, |list| list.iter().map(Character::reply_count).sum())
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.characters {
            CharacterOutcome::Characters(list) => write!(
                f,
                "{} ({} characters, {} replies)",
                self.title.trim(),
                list.len(),
                self.total_reply_count()
            ),
            CharacterOutcome::Unparsed(_) => {
                write!(f, "{} (unparsed)", self.title.trim())
            }
        }
    }
}

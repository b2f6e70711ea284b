/*!
 * Two-pass cue scanner and the parser entry point.
 *
 * Pass one finds uppercase cue headers and slices the script into
 * per-character segments. Pass two scans each segment for replies,
 * stopping at the first follow-up candidate without its own stage
 * direction so scene prose below the dialogue is not swept in.
 */

use std::collections::HashMap;

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::app_config::{FilterConfig, ParserConfig};
use crate::errors::ParseError;
use crate::extraction::filters::CharacterFilter;
use crate::extraction::metadata;
use crate::extraction::normalize::{clean_padding, compose_annotation};
use crate::extraction::reformat::Reformatter;
use crate::script_model::{Character, Movie, Reply};

// @module: Character and reply extraction

// @const: Cue header regex (group 1: name, group 2: stage direction)
static HEADER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*([A-Z][A-Z0-9 -]+?)(\([\w'.]+\))?$").unwrap()
});

// @const: Reply regex (group 1: stage direction, group 2: text with its
// terminator and line break)
static REPLY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)^\s*(\([\w][\w '.,\n]+?\))?([\w\s,.:;!?'"-]+?(([!?."-]|(\.{3} ))\n))"#)
        .unwrap()
});

/// Hint attached to the log notice and the stored diagnostic when a
/// script resists extraction.
const FORMAT_HINT: &str =
    "Please check the original file's formatting, or add a reformatting rule matching its layout.";

/// One cue header occurrence: who speaks, with what direction, and where
/// their segment starts.
struct CueHeader<'t> {
    name: &'t str,
    annotation: &'t str,
    start: usize,
    end: usize,
}

/// Movie script parser.
///
/// Runs the two-pass cue scan, merges repeated cues into one character
/// each, filters false positives, and falls back to a single reformatting
/// retry for scripts whose layout defeats the scanner.
#[derive(Debug)]
pub struct ScriptParser {
    config: ParserConfig,
    filter: CharacterFilter,
    reformatter: Reformatter,
}

impl ScriptParser {
    /// Create a parser with explicit thresholds and blacklists.
    pub fn new(config: ParserConfig, filter_config: FilterConfig) -> Self {
        let filter = CharacterFilter::new(filter_config, config.minimum_replies);
        let reformatter = Reformatter::new(config.reformat_line_threshold);

        ScriptParser {
            config,
            filter,
            reformatter,
        }
    }

    /// Create a parser with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(ParserConfig::default(), FilterConfig::default())
    }

    /// Parse a movie script into a movie record.
    ///
    /// Metadata anchors are mandatory and their absence is the only error.
    /// Too few surviving characters is not: the script is retried once
    /// through the reformatter and, if still short, comes back as a
    /// successful record carrying a diagnostic in place of the cast list.
    pub fn parse(&self, text: &str) -> Result<Movie, ParseError> {
        let mut characters = self.extract_characters(text);

        if characters.len() < self.config.minimum_characters {
            characters = self.reformat_and_retry(text);
        }

        let title = metadata::extract_title(text)?;
        let authors = metadata::extract_authors(text)?;
        let genres = metadata::extract_genres(text)?;

        if characters.len() < self.config.minimum_characters {
            warn!("The script {} couldn't be parsed. {}", title, FORMAT_HINT);
            return Ok(Movie::unparsed(
                title,
                authors,
                genres,
                format!("This script couldn't be parsed. {}", FORMAT_HINT),
            ));
        }

        debug!(
            "Parsed script {} with {} characters",
            title,
            characters.len()
        );
        Ok(Movie::parsed(title, authors, genres, characters))
    }

    /// First pass: scan cue headers, then extract each header's replies
    /// from the segment running to the next header (or end of script).
    /// Repeated cues for one name merge in first-appearance order, and
    /// filtering runs on the merged list.
    pub fn extract_characters(&self, text: &str) -> Vec<Character> {
        let cues: Vec<CueHeader<'_>> = HEADER_REGEX
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let name = caps.get(1)?;
                Some(CueHeader {
                    name: name.as_str(),
                    annotation: caps.get(2).map_or("", |m| m.as_str()),
                    start: whole.start(),
                    end: whole.end(),
                })
            })
            .collect();

        let mut characters: Vec<Character> = Vec::new();
        let mut slots: HashMap<&str, usize> = HashMap::new();

        for (idx, cue) in cues.iter().enumerate() {
            let name = cue.name.trim();
            let segment_end = cues.get(idx + 1).map_or(text.len(), |next| next.start);
            let segment = &text[cue.end..segment_end];

            let replies = self.extract_replies(segment, cue.annotation, cue.end);

            match slots.get(name) {
                Some(&slot) => characters[slot].replies.extend(replies),
                None => {
                    slots.insert(name, characters.len());
                    characters.push(Character::new(name.to_string(), replies));
                }
            }
        }

        self.filter.clean(characters)
    }

    /// Second pass: scan one segment for replies.
    ///
    /// The first candidate is always taken. Later candidates are taken
    /// only while they open with their own stage direction; the first one
    /// that does not ends the scan, and the rest of the segment is
    /// treated as scene text even if it contains well-formed candidates.
    fn extract_replies(
        &self,
        segment: &str,
        header_annotation: &str,
        segment_offset: usize,
    ) -> Vec<Reply> {
        let mut replies = Vec::new();

        for (idx, caps) in REPLY_REGEX.captures_iter(segment).enumerate() {
            let own_annotation = caps.get(1).map(|m| m.as_str());

            if idx > 0 && own_annotation.is_none() {
                break;
            }

            let Some(body) = caps.get(2) else {
                continue;
            };

            replies.push(Reply::new(
                clean_padding(body.as_str()),
                compose_annotation(header_annotation, own_annotation),
                segment_offset + body.start(),
                segment_offset + body.end(),
            ));
        }

        replies
    }

    /// Single reformatting retry for scripts the cue scan cannot read.
    /// Offsets in the result refer to the rewritten script.
    fn reformat_and_retry(&self, text: &str) -> Vec<Character> {
        match self.reformatter.rewrite(text) {
            Some((strategy, rewritten)) => {
                debug!("Retrying extraction after rewriting {}", strategy.describe());
                self.extract_characters(&rewritten)
            }
            None => Vec::new(),
        }
    }
}

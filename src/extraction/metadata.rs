/*!
 * Header metadata extraction: title, writers and genres.
 *
 * Scripts open with a metadata block where the title sits after a tab and
 * the writer and genre lines are introduced by literal "Writers :" and
 * "Genres :" anchors. Within a line, individual names are separated by
 * no-break spaces.
 */

use std::sync::LazyLock;

use regex::Regex;

use crate::errors::ParseError;

/// Title line: the run of text between a tab and the writers anchor.
static TITLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\t(.+)\s+Writers :").expect("Invalid title regex"));

/// Writers line: everything between the anchor and the line break.
static AUTHORS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Writers : (.+)\n").expect("Invalid writers regex"));

/// Genres line: everything between the anchor and the line break.
static GENRES_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Genres : (.+)\n").expect("Invalid genres regex"));

/// Separator between names within a metadata line (no-break space).
const FIELD_SEPARATOR: char = '\u{a0}';

/// Extract the movie title.
///
/// The capture is returned as scanned, trailing padding included.
pub fn extract_title(text: &str) -> Result<String, ParseError> {
    TITLE_REGEX
        .captures(text)
        .map(|caps| caps[1].to_string())
        .ok_or_else(ParseError::missing_title)
}

/// Extract the list of writers.
pub fn extract_authors(text: &str) -> Result<Vec<String>, ParseError> {
    AUTHORS_REGEX
        .captures(text)
        .map(|caps| split_names(&caps[1]))
        .ok_or_else(ParseError::missing_authors)
}

/// Extract the list of genres.
pub fn extract_genres(text: &str) -> Result<Vec<String>, ParseError> {
    GENRES_REGEX
        .captures(text)
        .map(|caps| split_names(&caps[1]))
        .ok_or_else(ParseError::missing_genres)
}

/// Split a metadata line on no-break spaces, dropping empty segments left
/// by leading or doubled separators.
fn split_names(line: &str) -> Vec<String> {
    line.split(FIELD_SEPARATOR)
        .filter(|name| !name.is_empty())
        .map(|name| name.to_string())
        .collect()
}

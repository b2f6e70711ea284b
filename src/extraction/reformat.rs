/*!
 * Rewrite strategies for scripts the cue scanner cannot read.
 *
 * Some scripts reach us with their layout destroyed: everything on one
 * enormous line, or cue names lowercased and glued to their dialogue with
 * colons. Each strategy pairs a detection pattern with a rewrite that
 * restores enough line structure for the scanner to work. Detection runs
 * in a fixed priority order and at most one strategy is ever applied.
 */

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Script whose body sits on one enormous line: leading whitespace
/// followed by a thousand characters without a line break.
static SINGLE_LINE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s+.{1000}").unwrap());

/// Whitespace runs long enough to mark a column boundary on a
/// single-line script.
static WHITESPACE_RUN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{3,}").unwrap());

/// Cue name followed by a colon, possibly lowercase, possibly glued to
/// the dialogue. Groups 1, 3 and 4 hold whitespace to retain; group 2 is
/// the name to rewrite.
static COLON_CUE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(\s*)([A-Za-z0-9 .-]+)(\s*):(\s*\n*)").unwrap());

/// Lowercase cue name alone on its line. Groups 1 and 3 hold whitespace
/// to retain; group 2 is the name to rewrite.
static LOWERCASE_CUE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(\s*)([A-Za-z0-9]+)(\s*\n+)").unwrap());

/// Rewrite strategies, in detection priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReformatStrategy {
    /// Whole script on one line; whitespace runs become line breaks
    SingleLine,

    /// Cue names end in a colon; uppercase them and break the line
    ColonCues,

    /// Cue names are lowercase words on their own line; uppercase them
    LowercaseCues,
}

impl ReformatStrategy {
    /// Short human label for logging.
    pub fn describe(&self) -> &'static str {
        match self {
            ReformatStrategy::SingleLine => "single-line layout",
            ReformatStrategy::ColonCues => "colon-terminated cues",
            ReformatStrategy::LowercaseCues => "lowercase cues",
        }
    }
}

/// Detects which strategy fits a script and applies its rewrite.
#[derive(Debug, Clone)]
pub struct Reformatter {
    /// Matches a cue pattern must exceed before its rewrite applies
    line_threshold: usize,
}

impl Reformatter {
    /// Create a reformatter with the given match threshold.
    pub fn new(line_threshold: usize) -> Self {
        Self { line_threshold }
    }

    /// Create with the default threshold.
    pub fn with_defaults() -> Self {
        Self::new(10)
    }

    /// Pick the first strategy whose detection pattern qualifies.
    pub fn detect(&self, text: &str) -> Option<ReformatStrategy> {
        if SINGLE_LINE_REGEX.is_match(text) {
            return Some(ReformatStrategy::SingleLine);
        }
        if COLON_CUE_REGEX.find_iter(text).count() > self.line_threshold {
            return Some(ReformatStrategy::ColonCues);
        }
        if LOWERCASE_CUE_REGEX.find_iter(text).count() > self.line_threshold {
            return Some(ReformatStrategy::LowercaseCues);
        }

        None
    }

    /// Apply one strategy's rewrite to a script.
    pub fn apply(&self, strategy: ReformatStrategy, text: &str) -> String {
        match strategy {
            ReformatStrategy::SingleLine => WHITESPACE_RUN_REGEX
                .replace_all(text, |caps: &Captures| {
                    // The break replaces the run's last character, keeping
                    // the rest as indentation for the new line
                    format!("\n{}", drop_last_char(&caps[0]))
                })
                .into_owned(),
            ReformatStrategy::ColonCues => COLON_CUE_REGEX
                .replace_all(text, |caps: &Captures| {
                    format!(
                        "{}{}{}\n{}",
                        &caps[1],
                        caps[2].to_uppercase(),
                        &caps[3],
                        &caps[4]
                    )
                })
                .into_owned(),
            ReformatStrategy::LowercaseCues => LOWERCASE_CUE_REGEX
                .replace_all(text, |caps: &Captures| {
                    format!(
                        "{}{}\n{}",
                        &caps[1],
                        caps[2].to_uppercase(),
                        drop_last_char(&caps[3])
                    )
                })
                .into_owned(),
        }
    }

    /// Detect and rewrite in one step.
    pub fn rewrite(&self, text: &str) -> Option<(ReformatStrategy, String)> {
        self.detect(text)
            .map(|strategy| (strategy, self.apply(strategy, text)))
    }
}

fn drop_last_char(run: &str) -> &str {
    let mut chars = run.chars();
    chars.next_back();
    chars.as_str()
}

/*!
 * Tests for false-positive character and reply filtering
 */

use scriptmine::app_config::FilterConfig;
use scriptmine::extraction::CharacterFilter;
use scriptmine::{Character, Reply};

/// Builds a character whose replies carry the given texts
fn character(name: &str, reply_texts: &[&str]) -> Character {
    let replies = reply_texts
        .iter()
        .map(|text| Reply::new(text.to_string(), String::new(), 0, text.len() + 1))
        .collect();
    Character::new(name.to_string(), replies)
}

/// Test that a character without surviving replies is dropped
#[test]
fn test_clean_withNoReplies_shouldDropCharacter() {
    let filter = CharacterFilter::with_defaults();
    let cleaned = filter.clean(vec![character("JOHN", &[])]);
    assert!(cleaned.is_empty());
}

/// Test that scene vocabulary in a name disqualifies the character
#[test]
fn test_clean_withBlacklistedName_shouldDropCharacter() {
    let filter = CharacterFilter::with_defaults();
    let cleaned = filter.clean(vec![
        character("EXTERIOR", &["Not actually dialogue."]),
        character("FADE OUT", &["Not actually dialogue."]),
        character("JOHN", &["Real dialogue."]),
    ]);

    let names: Vec<&str> = cleaned.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["JOHN"]);
}

/// Test that a name with more than five spaces is rejected
#[test]
fn test_clean_withLongWordyName_shouldDropCharacter() {
    let filter = CharacterFilter::with_defaults();

    let wordy = "JOHN PAUL GEORGE RINGO PETE STU BILL";
    let cleaned = filter.clean(vec![character(wordy, &["Too long to be a cue."])]);
    assert!(cleaned.is_empty());

    // Five spaces is still acceptable
    let five = "JOHN PAUL GEORGE RINGO PETE STU";
    let cleaned = filter.clean(vec![character(five, &["Borderline but kept."])]);
    assert_eq!(cleaned.len(), 1);
}

/// Test that shot labels like "B3" are rejected
#[test]
fn test_clean_withShotLabelName_shouldDropCharacter() {
    let filter = CharacterFilter::with_defaults();
    let cleaned = filter.clean(vec![
        character("B3", &["Not a speaker."]),
        character("UNIT C12", &["Not a speaker."]),
    ]);
    assert!(cleaned.is_empty());
}

/// Test that a fully parenthesized name is rejected
#[test]
fn test_clean_withParenthesizedName_shouldDropCharacter() {
    let filter = CharacterFilter::with_defaults();
    let cleaned = filter.clean(vec![character("(VOICE)", &["Whisper."])]);
    assert!(cleaned.is_empty());
}

/// Test that names ending in a period or a dash marker are rejected
#[test]
fn test_clean_withTrailingPunctuation_shouldDropCharacter() {
    let filter = CharacterFilter::with_defaults();
    let cleaned = filter.clean(vec![
        character("MR.", &["Clipped cue."]),
        character("JOHN -", &["Clipped cue."]),
    ]);
    assert!(cleaned.is_empty());
}

/// Test that direction prefixes disqualify a name while lookalike names
/// without the trailing space survive
#[test]
fn test_clean_withDirectionPrefix_shouldDropCharacter() {
    let filter = CharacterFilter::with_defaults();
    let cleaned = filter.clean(vec![
        character("ON DECK", &["Stage business."]),
        character("BACK WALL", &["Stage business."]),
        character("TO BE CONT", &["Stage business."]),
        character("TONY", &["Real dialogue."]),
        character("ANNA", &["Real dialogue."]),
    ]);

    let names: Vec<&str> = cleaned.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["TONY", "ANNA"]);
}

/// Test that a blacklisted reply is removed without losing the character
#[test]
fn test_clean_withBlacklistedReply_shouldDropReplyOnly() {
    let filter = CharacterFilter::with_defaults();
    let cleaned = filter.clean(vec![character(
        "JOHN",
        &["FADE OUT on the pier.", "Hold my hand."],
    )]);

    assert_eq!(cleaned.len(), 1);
    assert_eq!(cleaned[0].reply_count(), 1);
    assert_eq!(cleaned[0].replies[0].text, "Hold my hand.");
}

/// Test that blacklist matching is case-sensitive
#[test]
fn test_clean_withLowercaseVocabulary_shouldKeepReply() {
    let filter = CharacterFilter::with_defaults();
    let cleaned = filter.clean(vec![character("JOHN", &["Just fade out quietly."])]);

    assert_eq!(cleaned.len(), 1);
    assert_eq!(cleaned[0].reply_count(), 1);
}

/// Test that replies carrying page numbers are removed
#[test]
fn test_clean_withPageNumberReply_shouldDropReply() {
    let filter = CharacterFilter::with_defaults();
    let cleaned = filter.clean(vec![character(
        "JOHN",
        &["Turn to page 3.", "No digits in this one."],
    )]);

    assert_eq!(cleaned.len(), 1);
    assert_eq!(cleaned[0].replies[0].text, "No digits in this one.");
}

/// Test that survivor order matches input order
#[test]
fn test_clean_withMultipleSurvivors_shouldPreserveOrder() {
    let filter = CharacterFilter::with_defaults();
    let cleaned = filter.clean(vec![
        character("ZED", &["Last alphabetically, first here."]),
        character("ANNA", &["Second here."]),
    ]);

    let names: Vec<&str> = cleaned.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["ZED", "ANNA"]);
}

/// Test that a custom reply threshold drops characters with thin dialogue
#[test]
fn test_clean_withHigherReplyThreshold_shouldDropThinCharacters() {
    let filter = CharacterFilter::new(FilterConfig::default(), 2);
    let cleaned = filter.clean(vec![
        character("JOHN", &["One line only."]),
        character("MARY", &["First line here.", "Second line here."]),
    ]);

    let names: Vec<&str> = cleaned.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["MARY"]);
}

/// Test that custom blacklists replace the defaults
#[test]
fn test_clean_withCustomBlacklist_shouldApplyIt() {
    let config = FilterConfig {
        character_blacklist: vec!["ZED".to_string()],
        reply_blacklist: vec!["forbidden".to_string()],
    };
    let filter = CharacterFilter::new(config, 1);

    let cleaned = filter.clean(vec![
        character("ZED", &["Anything at all."]),
        character("FADE OUT", &["Allowed by the custom list."]),
        character("JOHN", &["A forbidden word.", "A clean line."]),
    ]);

    let names: Vec<&str> = cleaned.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["FADE OUT", "JOHN"]);
    assert_eq!(cleaned[1].reply_count(), 1);
}

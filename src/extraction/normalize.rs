/*!
 * Whitespace normalization for extracted script fragments.
 *
 * Raw cue segments keep the script's hard wrapping and column padding.
 * Reply text and stage directions are flattened to single clean lines
 * before they enter the data model.
 */

/// Collapse a fragment into one clean line.
///
/// Each line is trimmed, lines are joined with single spaces, and the
/// result is trimmed again. Output never contains line breaks or
/// leading/trailing whitespace, so a second application is a no-op.
pub fn clean_padding(fragment: &str) -> String {
    fragment
        .split('\n')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

/// Compose a reply's stage direction.
///
/// The cue header's annotation applies to every reply under it; a reply
/// may also open with its own parenthesized direction. Present parts are
/// joined with a space and normalized. Both absent gives an empty string.
pub fn compose_annotation(header_annotation: &str, own_annotation: Option<&str>) -> String {
    let mut parts = Vec::with_capacity(2);
    if !header_annotation.is_empty() {
        parts.push(header_annotation);
    }
    if let Some(own) = own_annotation {
        parts.push(own);
    }
    clean_padding(&parts.join(" "))
}

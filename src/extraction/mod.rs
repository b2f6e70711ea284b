/*!
 * Character and reply extraction from movie scripts.
 *
 * This module contains the extraction engine and its supporting passes.
 * It is split into several submodules:
 *
 * - `core`: Two-pass cue scanner and the parser entry point
 * - `metadata`: Title, writers and genres anchors
 * - `normalize`: Whitespace normalization for extracted fragments
 * - `reformat`: Rewrite strategies for scripts the scanner cannot read
 * - `filters`: Blacklist and pattern rejection of false positives
 */

// Re-export main types for easier usage
pub use self::core::ScriptParser;
pub use self::filters::CharacterFilter;
pub use self::reformat::{ReformatStrategy, Reformatter};

// Submodules
pub mod core;
pub mod filters;
pub mod metadata;
pub mod normalize;
pub mod reformat;

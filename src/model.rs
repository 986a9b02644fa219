//! # Domain Model: Blocks, Text Modes, and Normalization
//!
//! A [`Block`] is the only persisted entity. A "section" has no row of its
//! own: it is the derived group of all blocks sharing a `section` label, and
//! it ceases to exist when its last block is removed. Keeping sections
//! derived avoids ever having two representations of the same fact drift
//! apart.
//!
//! ## Normalization
//!
//! Callers paste whatever they want; the service stores a canonical form:
//!
//! - Text is trimmed on every write. Empty text on create is replaced with
//!   [`DEFAULT_BLOCK_TEXT`]; empty text on update is rejected.
//! - Section labels are trimmed; a blank label falls back to `"Page 1"`.
//! - [`TextMode`] is a closed enum. Raw input is coerced through
//!   [`TextMode::from_raw`], with anything unrecognized mapping to
//!   [`TextMode::Base`]. Coercion is idempotent: a value that already came
//!   out of `from_raw` round-trips unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Placeholder used when a block is created with blank text.
pub const DEFAULT_BLOCK_TEXT: &str = "New text block";

/// Display mode for a block's text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextMode {
    #[default]
    Base,
    Bold,
    Line,
    BoldItalicsLine,
}

impl TextMode {
    /// Coerces free-form input to a mode. Unrecognized or empty input maps
    /// to [`TextMode::Base`].
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim() {
            "base" => TextMode::Base,
            "bold" => TextMode::Bold,
            "line" => TextMode::Line,
            "bold-italics-line" => TextMode::BoldItalicsLine,
            _ => TextMode::Base,
        }
    }

    /// The wire spelling, matching what [`TextMode::from_raw`] accepts.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextMode::Base => "base",
            TextMode::Bold => "bold",
            TextMode::Line => "line",
            TextMode::BoldItalicsLine => "bold-italics-line",
        }
    }
}

impl std::fmt::Display for TextMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted text block. `id` is assigned by the store on insert and is
/// immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: Uuid,
    pub text: String,
    pub mode: TextMode,
    pub section: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Block {
    /// Re-applies write-time normalization to a block read back from the
    /// store. Listings run every block through this so callers never see a
    /// raw label or an out-of-enum mode, even if the stored data predates
    /// the current rules.
    pub fn normalize(&mut self) {
        self.text = self.text.trim().to_string();
        self.section = normalize_section_label(&self.section);
    }
}

/// A block as handed to the store for insertion, before an id exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockDraft {
    pub text: String,
    pub mode: TextMode,
    pub section: String,
}

impl BlockDraft {
    /// Builds a fully normalized draft from raw caller input.
    pub fn from_raw(section: &str, text: &str, mode: &str) -> Self {
        let text = text.trim();
        Self {
            text: if text.is_empty() {
                DEFAULT_BLOCK_TEXT.to_string()
            } else {
                text.to_string()
            },
            mode: TextMode::from_raw(mode),
            section: normalize_section_label(section),
        }
    }

    /// Draft for the template block a new section starts with.
    pub fn section_template(section: String) -> Self {
        Self {
            text: DEFAULT_BLOCK_TEXT.to_string(),
            mode: TextMode::Base,
            section,
        }
    }
}

/// Trims a section label, falling back to `"Page 1"` when blank.
pub fn normalize_section_label(label: &str) -> String {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        "Page 1".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Renders the canonical label for page `n`.
pub fn page_label(n: u64) -> String {
    format!("Page {}", n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_recognizes_all_modes() {
        assert_eq!(TextMode::from_raw("base"), TextMode::Base);
        assert_eq!(TextMode::from_raw("bold"), TextMode::Bold);
        assert_eq!(TextMode::from_raw("line"), TextMode::Line);
        assert_eq!(
            TextMode::from_raw("bold-italics-line"),
            TextMode::BoldItalicsLine
        );
    }

    #[test]
    fn from_raw_defaults_to_base() {
        assert_eq!(TextMode::from_raw(""), TextMode::Base);
        assert_eq!(TextMode::from_raw("  "), TextMode::Base);
        assert_eq!(TextMode::from_raw("shout"), TextMode::Base);
        assert_eq!(TextMode::from_raw("BOLD"), TextMode::Base);
    }

    #[test]
    fn from_raw_trims_input() {
        assert_eq!(TextMode::from_raw("  bold  "), TextMode::Bold);
    }

    #[test]
    fn from_raw_is_idempotent() {
        for raw in ["base", "bold", "line", "bold-italics-line", "junk", ""] {
            let once = TextMode::from_raw(raw);
            let twice = TextMode::from_raw(once.as_str());
            assert_eq!(once, twice, "coercion not idempotent for {:?}", raw);
        }
    }

    #[test]
    fn mode_serde_uses_wire_spelling() {
        let json = serde_json::to_string(&TextMode::BoldItalicsLine).unwrap();
        assert_eq!(json, "\"bold-italics-line\"");
        let back: TextMode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TextMode::BoldItalicsLine);
    }

    #[test]
    fn normalize_label_trims() {
        assert_eq!(normalize_section_label("  Page 3  "), "Page 3");
    }

    #[test]
    fn normalize_label_blank_defaults_to_page_1() {
        assert_eq!(normalize_section_label(""), "Page 1");
        assert_eq!(normalize_section_label("   "), "Page 1");
    }

    #[test]
    fn draft_from_raw_trims_and_defaults() {
        let draft = BlockDraft::from_raw("", "  hello  ", "bold");
        assert_eq!(draft.section, "Page 1");
        assert_eq!(draft.text, "hello");
        assert_eq!(draft.mode, TextMode::Bold);

        let blank = BlockDraft::from_raw("Page 2", "   ", "nope");
        assert_eq!(blank.text, DEFAULT_BLOCK_TEXT);
        assert_eq!(blank.mode, TextMode::Base);
    }

    #[test]
    fn section_template_uses_placeholder() {
        let draft = BlockDraft::section_template(page_label(4));
        assert_eq!(draft.section, "Page 4");
        assert_eq!(draft.text, DEFAULT_BLOCK_TEXT);
        assert_eq!(draft.mode, TextMode::Base);
    }

    #[test]
    fn block_serde_roundtrip() {
        let block = Block {
            id: Uuid::new_v4(),
            text: "Drink water".to_string(),
            mode: TextMode::Line,
            section: "Page 2".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string(&block).unwrap();
        let back: Block = serde_json::from_str(&json).unwrap();
        assert_eq!(back, block);
    }
}

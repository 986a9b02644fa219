//! # Canonical Ordering
//!
//! Both listings and the resequencing pass use the same total order:
//! extracted page number ascending, ties broken lexicographically. For
//! listings the tie-break key is the block text; for labels it is the full
//! label string. A label with no digits sorts as page `0`, ahead of every
//! real page; ordering never rejects input, it just places it.

use crate::model::Block;
use std::cmp::Ordering;

/// Parses the first run of ASCII digits in a label. Returns `0` when there
/// is none, or when the run does not fit in a `u64`.
pub fn extract_page_number(label: &str) -> u64 {
    let digits: String = label
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

/// Compares two labels in the canonical order.
pub fn cmp_labels(a: &str, b: &str) -> Ordering {
    extract_page_number(a)
        .cmp(&extract_page_number(b))
        .then_with(|| a.cmp(b))
}

/// Sorts distinct section labels into the canonical order.
pub fn sort_labels(labels: &mut [String]) {
    labels.sort_by(|a, b| cmp_labels(a, b));
}

/// Sorts blocks by section page number, then by text within a section.
pub fn sort_blocks(blocks: &mut [Block]) {
    blocks.sort_by(|a, b| {
        extract_page_number(&a.section)
            .cmp(&extract_page_number(&b.section))
            .then_with(|| a.text.cmp(&b.text))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TextMode;
    use chrono::Utc;
    use uuid::Uuid;

    fn block(section: &str, text: &str) -> Block {
        Block {
            id: Uuid::new_v4(),
            text: text.to_string(),
            mode: TextMode::Base,
            section: section.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn extracts_first_digit_run() {
        assert_eq!(extract_page_number("Page 7"), 7);
        assert_eq!(extract_page_number("Page 12 draft 3"), 12);
        assert_eq!(extract_page_number("intro"), 0);
        assert_eq!(extract_page_number(""), 0);
    }

    #[test]
    fn oversized_digit_run_sorts_as_zero() {
        assert_eq!(extract_page_number("Page 99999999999999999999999"), 0);
    }

    #[test]
    fn labels_sort_numerically_then_lexically() {
        let mut labels = vec![
            "Page 10".to_string(),
            "Page 2".to_string(),
            "intro".to_string(),
            "Page 2 copy".to_string(),
        ];
        sort_labels(&mut labels);
        assert_eq!(labels, ["intro", "Page 2", "Page 2 copy", "Page 10"]);
    }

    #[test]
    fn blocks_sort_by_page_then_text() {
        let mut blocks = vec![
            block("Page 2", "b"),
            block("Page 1", "z"),
            block("Page 1", "a"),
        ];
        sort_blocks(&mut blocks);
        let order: Vec<(&str, &str)> = blocks
            .iter()
            .map(|b| (b.section.as_str(), b.text.as_str()))
            .collect();
        assert_eq!(
            order,
            [("Page 1", "a"), ("Page 1", "z"), ("Page 2", "b")]
        );
    }
}

use super::helpers::parse_block_id;
use super::OpResult;
use crate::error::{DeckError, Result};
use crate::model::TextMode;
use crate::store::{BlockStore, Deadline};

/// Updates a block's text and mode in place. The section label is never
/// touched by this operation; moving a block between sections goes through
/// delete and recreate.
///
/// Blank text is rejected up front rather than replaced with the
/// placeholder: an explicit update to nothing is a caller mistake, not a
/// request for the template.
pub fn run<S: BlockStore>(
    store: &mut S,
    deadline: &Deadline,
    id: &str,
    text: &str,
    mode: &str,
) -> Result<OpResult> {
    let block_id = parse_block_id(id)?;

    let clean_text = text.trim();
    if clean_text.is_empty() {
        return Err(DeckError::InvalidInput("block text is required".to_string()));
    }
    let clean_mode = TextMode::from_raw(mode);

    let matched = store.update_text(deadline, &block_id, clean_text, clean_mode)?;
    if matched == 0 {
        return Err(DeckError::NotFound(format!("block {}", block_id)));
    }

    // Re-read so the caller sees exactly what the store now holds,
    // normalized like any listing entry.
    let blocks = store.find_all(deadline)?;
    match blocks.into_iter().find(|b| b.id == block_id) {
        Some(mut block) => {
            block.normalize();
            Ok(OpResult::default().with_block(block))
        }
        None => Err(DeckError::NotFound(format!("block {}", block_id))),
    }
}

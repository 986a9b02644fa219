//! Shared pieces of the command layer: id parsing, the normalized sorted
//! listing, and the resequencing pass itself.

use crate::error::{DeckError, Result};
use crate::model::{page_label, Block};
use crate::order::{sort_blocks, sort_labels};
use crate::store::{BlockStore, Deadline};
use uuid::Uuid;

/// Parses a caller-supplied block id, trimming first.
pub fn parse_block_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|_| DeckError::InvalidId(raw.to_string()))
}

/// Reads all blocks, normalizes each, and sorts them into the canonical
/// order: page number ascending, text ascending within a page.
pub fn sorted_listing<S: BlockStore>(store: &S, deadline: &Deadline) -> Result<Vec<Block>> {
    let mut blocks = store.find_all(deadline)?;
    for block in &mut blocks {
        block.normalize();
    }
    sort_blocks(&mut blocks);
    Ok(blocks)
}

/// Compacts the section labels into the dense canonical sequence
/// `Page 1 .. Page K`, preserving the relative order of sections.
///
/// The pass is read-plan-apply with no transaction: labels are read once,
/// sorted, and each label whose canonical target differs is renamed with
/// one bulk relabel call. A store error aborts the pass immediately; renames
/// already applied stay applied. Running the pass again on any renumbered
/// state converges, so a failed or raced pass is healed by the next one.
///
/// Returns the number of relabel calls issued.
pub fn resequence<S: BlockStore>(store: &mut S, deadline: &Deadline) -> Result<u64> {
    let mut labels = store.distinct_labels(deadline)?;
    if labels.is_empty() {
        return Ok(0);
    }

    sort_labels(&mut labels);

    let mut renamed = 0;
    for (position, old) in labels.iter().enumerate() {
        let canonical = page_label(position as u64 + 1);
        if *old == canonical {
            continue;
        }
        store.relabel(deadline, old, &canonical)?;
        renamed += 1;
    }

    Ok(renamed)
}

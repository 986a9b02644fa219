use super::helpers::{resequence, sorted_listing};
use super::OpResult;
use crate::error::{DeckError, Result};
use crate::model::BlockDraft;
use crate::store::{BlockStore, Deadline};

/// Raw input for creating a block. All fields tolerate blank/garbage
/// values; normalization supplies the defaults.
#[derive(Debug, Clone, Default)]
pub struct AddBlockInput {
    pub section: String,
    pub text: String,
    pub mode: String,
}

/// Creates a block under an arbitrary section label, then resequences.
///
/// An arbitrary label can land anywhere in the numbering ("Page 5" on a
/// store that only has "Page 1"), so the compaction pass runs after the
/// insert. If the pass fails the block stays inserted and the error carries
/// it (partial success).
///
/// The returned block carries its label as inserted; the listing reflects
/// the labels after compaction.
pub fn run<S: BlockStore>(
    store: &mut S,
    deadline: &Deadline,
    input: AddBlockInput,
) -> Result<OpResult> {
    let draft = BlockDraft::from_raw(&input.section, &input.text, &input.mode);
    let block = store.insert(deadline, draft)?;

    if let Err(err) = resequence(store, deadline) {
        return Err(DeckError::Resequence {
            reason: err.to_string(),
            block: Some(block),
            deleted: 0,
        });
    }

    let listing = sorted_listing(store, deadline)?;
    Ok(OpResult::default().with_block(block).with_listing(listing))
}

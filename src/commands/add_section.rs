use super::helpers::sorted_listing;
use super::OpResult;
use crate::error::Result;
use crate::model::{page_label, BlockDraft};
use crate::store::{BlockStore, Deadline};

/// Creates a new section by inserting one template block labeled
/// `Page {K+1}`, where K is the current distinct-label count.
///
/// Appending the next integer can never open a gap, so no resequencing pass
/// runs here.
pub fn run<S: BlockStore>(store: &mut S, deadline: &Deadline) -> Result<OpResult> {
    let labels = store.distinct_labels(deadline)?;
    let label = page_label(labels.len() as u64 + 1);

    let block = store.insert(deadline, BlockDraft::section_template(label))?;

    let listing = sorted_listing(store, deadline)?;
    Ok(OpResult::default().with_block(block).with_listing(listing))
}

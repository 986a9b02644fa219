use super::helpers::sorted_listing;
use super::OpResult;
use crate::error::Result;
use crate::store::{BlockStore, Deadline};

/// Returns every block, normalized and in the canonical order: sections by
/// page number, blocks within a section by text. Read-only; reflects
/// whatever store state the single read observed.
pub fn run<S: BlockStore>(store: &S, deadline: &Deadline) -> Result<OpResult> {
    let listing = sorted_listing(store, deadline)?;
    Ok(OpResult::default().with_listing(listing))
}

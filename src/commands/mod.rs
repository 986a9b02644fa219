//! # Command Layer
//!
//! One module per operation, each exposing a `run` function generic over
//! [`BlockStore`](crate::store::BlockStore). This is where the business
//! logic lives: input validation, normalization, the resequencing pass, and
//! the mapping of store match counts to not-found errors. Commands do no
//! I/O of their own beyond the store and return structured [`OpResult`]s;
//! rendering is the caller's problem.
//!
//! Ordering of work inside a mutation is deliberate and matches the error
//! taxonomy: validation fails before any store call, the primary mutation
//! runs next, and the resequencing pass runs last so its failure can be
//! reported as partial success rather than masking the mutation.
//!
//! Most of the crate's tests live here, running against
//! [`InMemoryStore`](crate::store::memory::InMemoryStore).

use crate::model::Block;
use serde::Serialize;

pub mod add_block;
pub mod add_section;
pub mod delete_block;
pub mod delete_section;
pub mod helpers;
pub mod list;
pub mod update_block;

/// Structured outcome of a command.
///
/// Not every field is meaningful for every command: `block` is the
/// created/updated block, `listing` the freshly sorted full listing, and
/// `deleted` the number of blocks a delete removed.
#[derive(Debug, Default, Clone, Serialize)]
pub struct OpResult {
    pub block: Option<Block>,
    pub listing: Vec<Block>,
    pub deleted: u64,
}

impl OpResult {
    pub fn with_block(mut self, block: Block) -> Self {
        self.block = Some(block);
        self
    }

    pub fn with_listing(mut self, listing: Vec<Block>) -> Self {
        self.listing = listing;
        self
    }

    pub fn with_deleted(mut self, deleted: u64) -> Self {
        self.deleted = deleted;
        self
    }
}

//! # Storage Layer
//!
//! [`BlockStore`] is the narrow interface the command layer drives. It is
//! deliberately close to a document collection: single-record insert,
//! update, and delete, plus the three queries resequencing needs (all
//! blocks, distinct labels, bulk relabel). Anything smarter (ordering,
//! normalization, keeping labels dense) lives above the store.
//!
//! ## Deadlines
//!
//! Every public operation runs under a per-call duration budget. The facade
//! creates one [`Deadline`] per operation and threads it through each store
//! call; an adapter that finds the budget exhausted fails the call as a
//! store error. There is no cancellation beyond that: no background tasks,
//! no queues.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: for testing logic without filesystem I/O,
//!   with hooks for simulating store failure.
//! - [`fs::FileStore`]: a single JSON file, written atomically.

use crate::error::{DeckError, Result};
use crate::model::{Block, BlockDraft, TextMode};
use std::time::{Duration, Instant};
use uuid::Uuid;

pub mod fs;
pub mod memory;

/// Per-operation time budget, created once per public operation.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    expires: Instant,
}

impl Deadline {
    pub fn after(budget: Duration) -> Self {
        Self {
            expires: Instant::now() + budget,
        }
    }

    pub fn expired(&self) -> bool {
        Instant::now() >= self.expires
    }

    /// Fails with a store error if the budget is exhausted. Adapters call
    /// this at the top of every method.
    pub fn check(&self) -> Result<()> {
        if self.expired() {
            Err(DeckError::Store("operation deadline exceeded".to_string()))
        } else {
            Ok(())
        }
    }
}

/// Abstract interface for block persistence.
///
/// Counts are returned for update/delete so the command layer can map "zero
/// matches" to not-found without a prior existence check.
pub trait BlockStore {
    /// Insert a new block. The store assigns the id and timestamps.
    fn insert(&mut self, deadline: &Deadline, draft: BlockDraft) -> Result<Block>;

    /// Update text and mode of a block by id. Returns the matched count.
    fn update_text(
        &mut self,
        deadline: &Deadline,
        id: &Uuid,
        text: &str,
        mode: TextMode,
    ) -> Result<u64>;

    /// Delete one block by id. Returns the deleted count (0 or 1).
    fn delete_by_id(&mut self, deadline: &Deadline, id: &Uuid) -> Result<u64>;

    /// Delete every block carrying `label`. Returns the deleted count.
    fn delete_by_label(&mut self, deadline: &Deadline, label: &str) -> Result<u64>;

    /// All blocks, in no particular order.
    fn find_all(&self, deadline: &Deadline) -> Result<Vec<Block>>;

    /// The distinct section labels currently present.
    fn distinct_labels(&self, deadline: &Deadline) -> Result<Vec<String>>;

    /// Bulk-rename every block carrying `old` to `new`.
    fn relabel(&mut self, deadline: &Deadline, old: &str, new: &str) -> Result<()>;
}

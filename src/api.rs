//! # API Facade
//!
//! [`DeckApi`] is a thin facade over the command layer: it owns the store,
//! creates the per-operation [`Deadline`], and dispatches. No business
//! logic lives here. Generic over [`BlockStore`] so the same surface runs
//! against the file store in production and the in-memory store in tests.

use crate::commands::{self, OpResult};
use crate::error::Result;
use crate::store::{BlockStore, Deadline};
use std::time::Duration;

pub use crate::commands::add_block::AddBlockInput;
pub use crate::commands::delete_section::SectionRef;

/// Default per-operation time budget. Generous for a local file store but
/// callers backed by remote storage can rely on it.
pub const DEFAULT_OP_TIMEOUT: Duration = Duration::from_secs(10);

pub struct DeckApi<S: BlockStore> {
    store: S,
    op_timeout: Duration,
}

impl<S: BlockStore> DeckApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            op_timeout: DEFAULT_OP_TIMEOUT,
        }
    }

    pub fn with_op_timeout(mut self, budget: Duration) -> Self {
        self.op_timeout = budget;
        self
    }

    fn deadline(&self) -> Deadline {
        Deadline::after(self.op_timeout)
    }

    pub fn add_block(&mut self, input: AddBlockInput) -> Result<OpResult> {
        let deadline = self.deadline();
        commands::add_block::run(&mut self.store, &deadline, input)
    }

    pub fn add_section(&mut self) -> Result<OpResult> {
        let deadline = self.deadline();
        commands::add_section::run(&mut self.store, &deadline)
    }

    pub fn update_block(&mut self, id: &str, text: &str, mode: &str) -> Result<OpResult> {
        let deadline = self.deadline();
        commands::update_block::run(&mut self.store, &deadline, id, text, mode)
    }

    pub fn delete_block(&mut self, id: &str) -> Result<OpResult> {
        let deadline = self.deadline();
        commands::delete_block::run(&mut self.store, &deadline, id)
    }

    pub fn delete_section(&mut self, section: &SectionRef) -> Result<OpResult> {
        let deadline = self.deadline();
        commands::delete_section::run(&mut self.store, &deadline, section)
    }

    pub fn list(&self) -> Result<OpResult> {
        let deadline = self.deadline();
        commands::list::run(&self.store, &deadline)
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

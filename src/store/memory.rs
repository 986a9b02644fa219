use super::{BlockStore, Deadline};
use crate::error::{DeckError, Result};
use crate::model::{Block, BlockDraft, TextMode};
use chrono::Utc;
use uuid::Uuid;

/// In-memory block store for testing.
///
/// Keeps blocks in insertion order. The two `set_simulate_*` hooks let
/// tests exercise store-failure and partial-resequence paths without a real
/// backend.
#[derive(Default)]
pub struct InMemoryStore {
    blocks: Vec<Block>,
    simulate_store_error: bool,
    simulate_relabel_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every store call fail.
    pub fn set_simulate_store_error(&mut self, simulate: bool) {
        self.simulate_store_error = simulate;
    }

    /// Make only `relabel` fail, leaving the primary mutations working.
    pub fn set_simulate_relabel_error(&mut self, simulate: bool) {
        self.simulate_relabel_error = simulate;
    }

    /// Direct snapshot of the raw contents, bypassing deadline checks.
    pub fn raw_blocks(&self) -> &[Block] {
        &self.blocks
    }

    fn check(&self, deadline: &Deadline) -> Result<()> {
        deadline.check()?;
        if self.simulate_store_error {
            return Err(DeckError::Store("simulated store error".to_string()));
        }
        Ok(())
    }
}

impl BlockStore for InMemoryStore {
    fn insert(&mut self, deadline: &Deadline, draft: BlockDraft) -> Result<Block> {
        self.check(deadline)?;
        let now = Utc::now();
        let block = Block {
            id: Uuid::new_v4(),
            text: draft.text,
            mode: draft.mode,
            section: draft.section,
            created_at: now,
            updated_at: now,
        };
        self.blocks.push(block.clone());
        Ok(block)
    }

    fn update_text(
        &mut self,
        deadline: &Deadline,
        id: &Uuid,
        text: &str,
        mode: TextMode,
    ) -> Result<u64> {
        self.check(deadline)?;
        match self.blocks.iter_mut().find(|b| b.id == *id) {
            Some(block) => {
                block.text = text.to_string();
                block.mode = mode;
                block.updated_at = Utc::now();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn delete_by_id(&mut self, deadline: &Deadline, id: &Uuid) -> Result<u64> {
        self.check(deadline)?;
        let before = self.blocks.len();
        self.blocks.retain(|b| b.id != *id);
        Ok((before - self.blocks.len()) as u64)
    }

    fn delete_by_label(&mut self, deadline: &Deadline, label: &str) -> Result<u64> {
        self.check(deadline)?;
        let before = self.blocks.len();
        self.blocks.retain(|b| b.section != label);
        Ok((before - self.blocks.len()) as u64)
    }

    fn find_all(&self, deadline: &Deadline) -> Result<Vec<Block>> {
        self.check(deadline)?;
        Ok(self.blocks.clone())
    }

    fn distinct_labels(&self, deadline: &Deadline) -> Result<Vec<String>> {
        self.check(deadline)?;
        let mut labels: Vec<String> = Vec::new();
        for block in &self.blocks {
            if !labels.iter().any(|l| l == &block.section) {
                labels.push(block.section.clone());
            }
        }
        Ok(labels)
    }

    fn relabel(&mut self, deadline: &Deadline, old: &str, new: &str) -> Result<()> {
        self.check(deadline)?;
        if self.simulate_relabel_error {
            return Err(DeckError::Store("simulated relabel error".to_string()));
        }
        for block in self.blocks.iter_mut().filter(|b| b.section == old) {
            block.section = new.to_string();
        }
        Ok(())
    }
}

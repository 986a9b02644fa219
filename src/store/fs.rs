use super::{BlockStore, Deadline};
use crate::error::Result;
use crate::model::{Block, BlockDraft, TextMode};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// File-backed block store: one JSON array in a single file.
///
/// Every operation reads the file fresh and mutations write it back, so
/// concurrent processes see each other's committed writes (last writer
/// wins, same as the document store this models). Writes go to a temp file
/// first and are renamed into place to avoid partial files.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<Block>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&self, blocks: &[Block]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(blocks)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl BlockStore for FileStore {
    fn insert(&mut self, deadline: &Deadline, draft: BlockDraft) -> Result<Block> {
        deadline.check()?;
        let mut blocks = self.load()?;
        let now = Utc::now();
        let block = Block {
            id: Uuid::new_v4(),
            text: draft.text,
            mode: draft.mode,
            section: draft.section,
            created_at: now,
            updated_at: now,
        };
        blocks.push(block.clone());
        self.save(&blocks)?;
        Ok(block)
    }

    fn update_text(
        &mut self,
        deadline: &Deadline,
        id: &Uuid,
        text: &str,
        mode: TextMode,
    ) -> Result<u64> {
        deadline.check()?;
        let mut blocks = self.load()?;
        let mut matched = 0;
        if let Some(block) = blocks.iter_mut().find(|b| b.id == *id) {
            block.text = text.to_string();
            block.mode = mode;
            block.updated_at = Utc::now();
            matched = 1;
        }
        if matched > 0 {
            self.save(&blocks)?;
        }
        Ok(matched)
    }

    fn delete_by_id(&mut self, deadline: &Deadline, id: &Uuid) -> Result<u64> {
        deadline.check()?;
        let mut blocks = self.load()?;
        let before = blocks.len();
        blocks.retain(|b| b.id != *id);
        let deleted = (before - blocks.len()) as u64;
        if deleted > 0 {
            self.save(&blocks)?;
        }
        Ok(deleted)
    }

    fn delete_by_label(&mut self, deadline: &Deadline, label: &str) -> Result<u64> {
        deadline.check()?;
        let mut blocks = self.load()?;
        let before = blocks.len();
        blocks.retain(|b| b.section != label);
        let deleted = (before - blocks.len()) as u64;
        if deleted > 0 {
            self.save(&blocks)?;
        }
        Ok(deleted)
    }

    fn find_all(&self, deadline: &Deadline) -> Result<Vec<Block>> {
        deadline.check()?;
        self.load()
    }

    fn distinct_labels(&self, deadline: &Deadline) -> Result<Vec<String>> {
        deadline.check()?;
        let blocks = self.load()?;
        let mut labels: Vec<String> = Vec::new();
        for block in &blocks {
            if !labels.iter().any(|l| l == &block.section) {
                labels.push(block.section.clone());
            }
        }
        Ok(labels)
    }

    fn relabel(&mut self, deadline: &Deadline, old: &str, new: &str) -> Result<()> {
        deadline.check()?;
        let mut blocks = self.load()?;
        let mut changed = false;
        for block in blocks.iter_mut().filter(|b| b.section == old) {
            block.section = new.to_string();
            changed = true;
        }
        if changed {
            self.save(&blocks)?;
        }
        Ok(())
    }
}

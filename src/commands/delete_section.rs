use super::helpers::{resequence, sorted_listing};
use super::OpResult;
use crate::error::{DeckError, Result};
use crate::model::{normalize_section_label, page_label};
use crate::store::{BlockStore, Deadline};

/// How the caller names the section to delete: either the full label or a
/// bare page number that is rendered into the canonical label form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionRef {
    Label(String),
    Page(u64),
}

impl SectionRef {
    /// Resolves the reference to a concrete label, rejecting blank labels
    /// and page zero before any store call.
    pub fn resolve(&self) -> Result<String> {
        match self {
            SectionRef::Label(label) => {
                let trimmed = label.trim();
                if trimmed.is_empty() {
                    return Err(DeckError::InvalidInput(
                        "section label is required".to_string(),
                    ));
                }
                Ok(normalize_section_label(trimmed))
            }
            SectionRef::Page(0) => Err(DeckError::InvalidInput(
                "page number must be positive".to_string(),
            )),
            SectionRef::Page(n) => Ok(page_label(*n)),
        }
    }
}

/// Deletes every block of a section, then resequences to close the gap the
/// removal leaves in the numbering.
pub fn run<S: BlockStore>(
    store: &mut S,
    deadline: &Deadline,
    section: &SectionRef,
) -> Result<OpResult> {
    let label = section.resolve()?;

    let deleted = store.delete_by_label(deadline, &label)?;
    if deleted == 0 {
        return Err(DeckError::NotFound(format!("section {:?}", label)));
    }

    if let Err(err) = resequence(store, deadline) {
        return Err(DeckError::Resequence {
            reason: err.to_string(),
            block: None,
            deleted,
        });
    }

    let listing = sorted_listing(store, deadline)?;
    Ok(OpResult::default().with_deleted(deleted).with_listing(listing))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add_block::{self, AddBlockInput};
    use crate::store::memory::InMemoryStore;
    use std::time::Duration;

    fn deadline() -> Deadline {
        Deadline::after(Duration::from_secs(10))
    }

    fn add(store: &mut InMemoryStore, section: &str, text: &str) {
        add_block::run(
            store,
            &deadline(),
            AddBlockInput {
                section: section.to_string(),
                text: text.to_string(),
                mode: String::new(),
            },
        )
        .unwrap();
    }

    #[test]
    fn section_ref_resolution() {
        assert_eq!(
            SectionRef::Label(" Page 2 ".to_string()).resolve().unwrap(),
            "Page 2"
        );
        assert_eq!(SectionRef::Page(3).resolve().unwrap(), "Page 3");
        assert!(matches!(
            SectionRef::Label("   ".to_string()).resolve(),
            Err(DeckError::InvalidInput(_))
        ));
        assert!(matches!(
            SectionRef::Page(0).resolve(),
            Err(DeckError::InvalidInput(_))
        ));
    }

    #[test]
    fn deleting_the_first_section_relabels_the_rest_in_order() {
        let mut store = InMemoryStore::new();
        add(&mut store, "Page 1", "one");
        add(&mut store, "Page 2", "two");
        add(&mut store, "Page 3", "three");

        let result = run(
            &mut store,
            &deadline(),
            &SectionRef::Label("Page 1".to_string()),
        )
        .unwrap();

        assert_eq!(result.deleted, 1);
        let pairs: Vec<(&str, &str)> = result
            .listing
            .iter()
            .map(|b| (b.section.as_str(), b.text.as_str()))
            .collect();
        // Old Page 2 became Page 1, old Page 3 became Page 2
        assert_eq!(pairs, [("Page 1", "two"), ("Page 2", "three")]);
    }

    #[test]
    fn deletes_every_block_of_the_section() {
        let mut store = InMemoryStore::new();
        add(&mut store, "Page 1", "a");
        add(&mut store, "Page 1", "b");
        add(&mut store, "Page 2", "c");

        let result = run(&mut store, &deadline(), &SectionRef::Page(1)).unwrap();
        assert_eq!(result.deleted, 2);
        assert_eq!(result.listing.len(), 1);
        assert_eq!(result.listing[0].section, "Page 1");
        assert_eq!(result.listing[0].text, "c");
    }

    #[test]
    fn unknown_section_is_not_found_and_store_unchanged() {
        let mut store = InMemoryStore::new();
        add(&mut store, "Page 1", "only");

        assert!(matches!(
            run(
                &mut store,
                &deadline(),
                &SectionRef::Label("Page 999".to_string())
            ),
            Err(DeckError::NotFound(_))
        ));
        assert_eq!(store.raw_blocks().len(), 1);
    }

    #[test]
    fn resequence_failure_reports_the_deleted_count() {
        let mut store = InMemoryStore::new();
        add(&mut store, "Page 1", "a");
        add(&mut store, "Page 1", "b");
        add(&mut store, "Page 2", "c");
        store.set_simulate_relabel_error(true);

        match run(&mut store, &deadline(), &SectionRef::Page(1)) {
            Err(DeckError::Resequence { deleted, .. }) => assert_eq!(deleted, 2),
            other => panic!("expected Resequence, got {:?}", other),
        }
        // Section is gone even though renumbering failed
        assert_eq!(store.raw_blocks().len(), 1);
        assert_eq!(store.raw_blocks()[0].section, "Page 2");
    }
}

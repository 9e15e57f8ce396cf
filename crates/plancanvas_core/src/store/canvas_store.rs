//! Owned in-memory store for all canvas sections.
//!
//! # Responsibility
//! - Hold current content for the full closed set of sections.
//! - Provide the set/clear/reset mutations and progress derivations.
//!
//! # Invariants
//! - Every id in [`ALL_SECTIONS`] is present from construction onward.
//! - `progress_percent` is always `round(100 * completed / total)`.
//! - Unknown string keys degrade to silent no-ops, never errors.

use crate::model::section::{Section, SectionId, ALL_SECTIONS, SECTION_COUNT};
use log::debug;

/// The full set of canvas sections with derived progress state.
///
/// A plain owned structure: the service layer is the only mutator, so the
/// store itself carries no synchronization. Sections live in a fixed array
/// indexed by id, which keeps lookups infallible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanvasStore {
    sections: [Section; SECTION_COUNT],
}

impl CanvasStore {
    /// Creates a store where every section holds its fixed default content.
    ///
    /// This is the startup state of the canvas page: nine pre-filled
    /// sections plus the empty free-notes section.
    pub fn with_defaults() -> Self {
        Self {
            sections: ALL_SECTIONS.map(Section::with_default),
        }
    }

    /// Creates a store where every section starts empty.
    pub fn empty() -> Self {
        Self {
            sections: ALL_SECTIONS.map(Section::empty),
        }
    }

    /// Stores the full replacement text for one section.
    ///
    /// Completion, counter tier and progress are derived projections, so
    /// there is nothing else to recompute eagerly.
    pub fn set_content(&mut self, id: SectionId, content: impl Into<String>) {
        self.sections[id as usize].set_content(content);
    }

    /// String-keyed variant of [`CanvasStore::set_content`] for the UI
    /// boundary.
    ///
    /// # Contract
    /// - Unknown keys are a silent no-op; returns whether the edit applied.
    pub fn apply_edit(&mut self, key: &str, content: &str) -> bool {
        match SectionId::from_key(key) {
            Ok(id) => {
                self.set_content(id, content);
                true
            }
            Err(err) => {
                debug!("event=edit_dropped module=store status=noop reason={err}");
                false
            }
        }
    }

    /// Restores one section to its fixed default content.
    ///
    /// The free-notes section resets to empty regardless of its default.
    pub fn reset(&mut self, id: SectionId) {
        let content = if id.is_free_notes() {
            ""
        } else {
            id.default_content()
        };
        self.set_content(id, content);
    }

    /// Sets one section's content to the empty string unconditionally.
    ///
    /// Distinct from [`CanvasStore::reset`]: clear never restores defaults.
    pub fn clear(&mut self, id: SectionId) {
        self.set_content(id, "");
    }

    /// Restores every section via [`CanvasStore::reset`].
    pub fn reset_all(&mut self) {
        for id in ALL_SECTIONS {
            self.reset(id);
        }
    }

    /// Borrows one section.
    pub fn section(&self, id: SectionId) -> &Section {
        &self.sections[id as usize]
    }

    /// Current content of one section.
    pub fn content(&self, id: SectionId) -> &str {
        self.section(id).content.as_str()
    }

    /// Iterates sections in canonical canvas order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Number of sections whose completion flag is currently true.
    pub fn completion_count(&self) -> usize {
        self.sections.iter().filter(|s| s.completed()).count()
    }

    /// Overall canvas progress as a rounded percentage.
    pub fn progress_percent(&self) -> u8 {
        let completed = self.completion_count() as f64;
        (100.0 * completed / SECTION_COUNT as f64).round() as u8
    }
}

impl Default for CanvasStore {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::CanvasStore;
    use crate::model::section::{SectionId, ALL_SECTIONS};

    #[test]
    fn with_defaults_prefills_everything_but_free_notes() {
        let store = CanvasStore::with_defaults();
        for id in ALL_SECTIONS {
            let expect_empty = id.is_free_notes();
            assert_eq!(store.content(id).is_empty(), expect_empty, "{id:?}");
        }
    }

    #[test]
    fn sections_iterate_in_canonical_order() {
        let store = CanvasStore::empty();
        let order: Vec<SectionId> = store.sections().map(|s| s.id).collect();
        assert_eq!(order, ALL_SECTIONS);
    }

    #[test]
    fn apply_edit_with_unknown_key_is_noop() {
        let mut store = CanvasStore::with_defaults();
        let before = store.clone();

        assert!(!store.apply_edit("not_a_section", "text that is long enough"));
        assert_eq!(store, before);
    }
}

//! Canvas section domain model.
//!
//! # Responsibility
//! - Define the closed set of section identifiers for the planning canvas.
//! - Derive completion and character-counter projections from content.
//!
//! # Invariants
//! - The identifier set is fixed at compile time; no id is added or removed
//!   at runtime.
//! - `completed` is a pure function of the current content only.

use crate::model::defaults::default_content;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Number of sections on the canvas. The set never changes at runtime.
pub const SECTION_COUNT: usize = 10;

/// A section counts as completed once its trimmed content exceeds this many
/// characters.
pub const COMPLETION_MIN_CHARS: usize = 20;

/// Character counts above this value move the counter into the warning tier.
pub const COUNTER_WARNING_CHARS: usize = 300;

/// Character counts above this value move the counter into the alert tier.
pub const COUNTER_ALERT_CHARS: usize = 500;

/// Stable identifier for one cell of the planning canvas.
///
/// Serialized string ids are the wire contract shared with the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    KeyPartnerships,
    KeyActivities,
    KeyResources,
    ValuePropositions,
    CustomerRelationships,
    Channels,
    CustomerSegments,
    CostStructure,
    RevenueStreams,
    NotesIdeas,
}

/// All section identifiers in canonical canvas order.
pub const ALL_SECTIONS: [SectionId; SECTION_COUNT] = [
    SectionId::KeyPartnerships,
    SectionId::KeyActivities,
    SectionId::KeyResources,
    SectionId::ValuePropositions,
    SectionId::CustomerRelationships,
    SectionId::Channels,
    SectionId::CustomerSegments,
    SectionId::CostStructure,
    SectionId::RevenueStreams,
    SectionId::NotesIdeas,
];

impl SectionId {
    /// Stable string id used in edit events and snapshots.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::KeyPartnerships => "key_partnerships",
            Self::KeyActivities => "key_activities",
            Self::KeyResources => "key_resources",
            Self::ValuePropositions => "value_propositions",
            Self::CustomerRelationships => "customer_relationships",
            Self::Channels => "channels",
            Self::CustomerSegments => "customer_segments",
            Self::CostStructure => "cost_structure",
            Self::RevenueStreams => "revenue_streams",
            Self::NotesIdeas => "notes_ideas",
        }
    }

    /// User-facing section title.
    pub fn title(self) -> &'static str {
        match self {
            Self::KeyPartnerships => "Key Partnerships",
            Self::KeyActivities => "Key Activities",
            Self::KeyResources => "Key Resources",
            Self::ValuePropositions => "Value Propositions",
            Self::CustomerRelationships => "Customer Relationships",
            Self::Channels => "Channels",
            Self::CustomerSegments => "Customer Segments",
            Self::CostStructure => "Cost Structure",
            Self::RevenueStreams => "Revenue Streams",
            Self::NotesIdeas => "Notes & Ideas",
        }
    }

    /// Resolves a string key from the UI boundary into a section id.
    ///
    /// # Contract
    /// - Input is trimmed before matching.
    /// - Unknown keys return [`SectionKeyError`]; callers on the silent
    ///   no-op path log and drop the error instead of surfacing it.
    pub fn from_key(key: &str) -> Result<Self, SectionKeyError> {
        match key.trim() {
            "key_partnerships" => Ok(Self::KeyPartnerships),
            "key_activities" => Ok(Self::KeyActivities),
            "key_resources" => Ok(Self::KeyResources),
            "value_propositions" => Ok(Self::ValuePropositions),
            "customer_relationships" => Ok(Self::CustomerRelationships),
            "channels" => Ok(Self::Channels),
            "customer_segments" => Ok(Self::CustomerSegments),
            "cost_structure" => Ok(Self::CostStructure),
            "revenue_streams" => Ok(Self::RevenueStreams),
            "notes_ideas" => Ok(Self::NotesIdeas),
            other => Err(SectionKeyError::Unknown(other.to_string())),
        }
    }

    /// Returns whether this is the designated free-notes section.
    ///
    /// The free-notes section resets to empty content regardless of any
    /// default, and starts empty on a fresh canvas.
    pub fn is_free_notes(self) -> bool {
        matches!(self, Self::NotesIdeas)
    }

    /// Fixed original content restored by the reset action.
    pub fn default_content(self) -> &'static str {
        default_content(self)
    }
}

/// Error raised when a string key does not name a known section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionKeyError {
    Unknown(String),
}

impl Display for SectionKeyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown(key) => write!(f, "unknown section key: `{key}`"),
        }
    }
}

impl Error for SectionKeyError {}

/// Display tier for the per-section character counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterTier {
    /// Comfortable content length.
    Neutral,
    /// Content is getting long.
    Warning,
    /// Content is very long.
    Alert,
}

impl CounterTier {
    /// Maps a character count onto its display tier.
    pub fn for_count(count: usize) -> Self {
        if count > COUNTER_ALERT_CHARS {
            Self::Alert
        } else if count > COUNTER_WARNING_CHARS {
            Self::Warning
        } else {
            Self::Neutral
        }
    }

    /// Stable string id used in snapshots.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Warning => "warning",
            Self::Alert => "alert",
        }
    }
}

/// One canvas cell: identifier plus current free-text content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Fixed identifier; never changes after construction.
    pub id: SectionId,
    /// Current content. Unbounded; completion and tiers derive from it.
    pub content: String,
}

impl Section {
    /// Creates a section with empty content.
    pub fn empty(id: SectionId) -> Self {
        Self {
            id,
            content: String::new(),
        }
    }

    /// Creates a section holding its fixed default content.
    ///
    /// The free-notes section has an empty default, so this matches
    /// [`Section::empty`] for it.
    pub fn with_default(id: SectionId) -> Self {
        Self {
            id,
            content: id.default_content().to_string(),
        }
    }

    /// Replaces the content in full. Edit events carry the complete text.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Returns whether this section counts toward canvas progress.
    pub fn completed(&self) -> bool {
        self.content.trim().chars().count() > COMPLETION_MIN_CHARS
    }

    /// Character count of the raw (untrimmed) content.
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Display tier for the character counter.
    pub fn counter_tier(&self) -> CounterTier {
        CounterTier::for_count(self.char_count())
    }

    /// Number of content lines; at least 1 even for empty content.
    ///
    /// The UI uses this to auto-expand the input field height.
    pub fn line_count(&self) -> usize {
        self.content.lines().count().max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::{CounterTier, Section, SectionId, ALL_SECTIONS, SECTION_COUNT};

    #[test]
    fn all_sections_covers_every_id_once() {
        assert_eq!(ALL_SECTIONS.len(), SECTION_COUNT);
        for (index, id) in ALL_SECTIONS.iter().enumerate() {
            assert!(!ALL_SECTIONS[index + 1..].contains(id), "{id:?} repeated");
            // Canonical order matches the enum discriminants; the store
            // relies on this for array indexing.
            assert_eq!(*id as usize, index);
        }
    }

    #[test]
    fn key_round_trip_is_stable() {
        for id in ALL_SECTIONS {
            assert_eq!(SectionId::from_key(id.as_str()), Ok(id));
        }
    }

    #[test]
    fn from_key_trims_before_matching() {
        assert_eq!(
            SectionId::from_key("  channels \n"),
            Ok(SectionId::Channels)
        );
    }

    #[test]
    fn from_key_rejects_unknown_key() {
        let err = SectionId::from_key("swot_matrix").unwrap_err();
        assert_eq!(err.to_string(), "unknown section key: `swot_matrix`");
    }

    #[test]
    fn completion_requires_more_than_threshold_trimmed_chars() {
        let mut section = Section::empty(SectionId::Channels);

        section.set_content("x".repeat(20));
        assert!(!section.completed());

        section.set_content("x".repeat(21));
        assert!(section.completed());

        // Surrounding whitespace does not count toward completion.
        section.set_content(format!("   {}   ", "x".repeat(20)));
        assert!(!section.completed());
    }

    #[test]
    fn counter_tier_boundaries() {
        assert_eq!(CounterTier::for_count(0), CounterTier::Neutral);
        assert_eq!(CounterTier::for_count(300), CounterTier::Neutral);
        assert_eq!(CounterTier::for_count(301), CounterTier::Warning);
        assert_eq!(CounterTier::for_count(500), CounterTier::Warning);
        assert_eq!(CounterTier::for_count(501), CounterTier::Alert);
    }

    #[test]
    fn line_count_never_reports_zero() {
        let section = Section::empty(SectionId::NotesIdeas);
        assert_eq!(section.line_count(), 1);
    }

    #[test]
    fn free_notes_default_is_empty() {
        assert_eq!(SectionId::NotesIdeas.default_content(), "");
    }

    #[test]
    fn prefilled_defaults_count_as_completed() {
        for id in ALL_SECTIONS {
            let section = Section::with_default(id);
            assert_eq!(section.completed(), !id.is_free_notes());
        }
    }
}

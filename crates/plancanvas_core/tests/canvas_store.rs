use plancanvas_core::{CanvasStore, SectionId, ALL_SECTIONS};

fn completing_text() -> String {
    "long enough to count toward progress".to_string()
}

#[test]
fn empty_store_reports_zero_progress() {
    let store = CanvasStore::empty();
    assert_eq!(store.completion_count(), 0);
    assert_eq!(store.progress_percent(), 0);
}

#[test]
fn three_completed_sections_of_ten_is_thirty_percent() {
    let mut store = CanvasStore::empty();
    store.set_content(SectionId::KeyPartnerships, completing_text());
    store.set_content(SectionId::Channels, completing_text());
    store.set_content(SectionId::RevenueStreams, completing_text());

    assert_eq!(store.completion_count(), 3);
    assert_eq!(store.progress_percent(), 30);
}

#[test]
fn all_completed_sections_is_full_progress() {
    let mut store = CanvasStore::empty();
    for id in ALL_SECTIONS {
        store.set_content(id, completing_text());
    }
    assert_eq!(store.progress_percent(), 100);
}

#[test]
fn default_canvas_progress_counts_only_prefilled_sections() {
    // Nine prefilled sections complete; the free-notes section starts empty.
    let store = CanvasStore::with_defaults();
    assert_eq!(store.completion_count(), 9);
    assert_eq!(store.progress_percent(), 90);
}

#[test]
fn set_content_recomputes_completion_both_ways() {
    let mut store = CanvasStore::empty();

    store.set_content(SectionId::CustomerSegments, completing_text());
    assert!(store.section(SectionId::CustomerSegments).completed());

    store.set_content(SectionId::CustomerSegments, "short");
    assert!(!store.section(SectionId::CustomerSegments).completed());
}

#[test]
fn reset_restores_the_documented_default() {
    let mut store = CanvasStore::with_defaults();
    store.set_content(SectionId::Channels, "scribbles");

    store.reset(SectionId::Channels);
    assert_eq!(
        store.content(SectionId::Channels),
        SectionId::Channels.default_content()
    );
}

#[test]
fn reset_empties_free_notes_regardless_of_prior_content() {
    let mut store = CanvasStore::with_defaults();
    store.set_content(SectionId::NotesIdeas, completing_text());

    store.reset(SectionId::NotesIdeas);
    assert_eq!(store.content(SectionId::NotesIdeas), "");
}

#[test]
fn clear_always_empties_and_flips_completion() {
    let mut store = CanvasStore::empty();
    store.set_content(SectionId::KeyResources, completing_text());
    assert!(store.section(SectionId::KeyResources).completed());

    store.clear(SectionId::KeyResources);
    assert_eq!(store.content(SectionId::KeyResources), "");
    assert!(!store.section(SectionId::KeyResources).completed());
}

#[test]
fn clear_does_not_restore_defaults() {
    let mut store = CanvasStore::with_defaults();
    store.clear(SectionId::CostStructure);
    assert_eq!(store.content(SectionId::CostStructure), "");
}

#[test]
fn reset_all_restores_every_section() {
    let mut store = CanvasStore::with_defaults();
    for id in ALL_SECTIONS {
        store.set_content(id, "overwritten");
    }

    store.reset_all();
    for id in ALL_SECTIONS {
        let expected = if id.is_free_notes() {
            ""
        } else {
            id.default_content()
        };
        assert_eq!(store.content(id), expected, "{id:?}");
    }
}

#[test]
fn apply_edit_resolves_known_keys() {
    let mut store = CanvasStore::empty();
    assert!(store.apply_edit("channels", "Website: 3,000 visitors/month"));
    assert_eq!(
        store.content(SectionId::Channels),
        "Website: 3,000 visitors/month"
    );
}

#[test]
fn apply_edit_ignores_unknown_keys() {
    let mut store = CanvasStore::empty();
    assert!(!store.apply_edit("swot_matrix", completing_text().as_str()));
    assert_eq!(store.completion_count(), 0);
}

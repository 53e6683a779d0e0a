use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_count_is_zero() {
    let state = UiState::default();
    assert_eq!(state.click_count, 0);
}

// =============================================================
// record_click
// =============================================================

#[test]
fn record_click_increments_by_one() {
    let mut state = UiState::default();
    state.record_click();
    assert_eq!(state.click_count, 1);
}

#[test]
fn record_click_n_times_counts_n() {
    let mut state = UiState::default();
    for _ in 0..57 {
        state.record_click();
    }
    assert_eq!(state.click_count, 57);
}

#[test]
fn record_click_is_monotonic() {
    let mut state = UiState::default();
    let mut previous = state.click_count;
    for _ in 0..10 {
        state.record_click();
        assert!(state.click_count > previous);
        assert_eq!(state.click_count, previous + 1);
        previous = state.click_count;
    }
}

#[test]
fn record_click_shared_across_regions() {
    // Nav, editor demo, and draft-save handlers all call record_click on the
    // same state; the counter is not partitioned per button.
    let mut state = UiState::default();
    state.record_click(); // "Posts"
    state.record_click(); // "Save Draft"
    state.record_click(); // editor demo button
    assert_eq!(state.click_count, 3);
}

#[test]
fn ui_state_equality_tracks_count() {
    // Unchanged state compares equal, so a re-render with no interaction
    // renders from an identical model.
    let a = UiState::default();
    let b = UiState::default();
    assert_eq!(a, b);

    let mut c = UiState::default();
    c.record_click();
    assert_ne!(a, c);
}

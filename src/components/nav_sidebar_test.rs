use super::*;

// =============================================================
// tab_class
// =============================================================

#[test]
fn active_tab_carries_modifier() {
    assert_eq!(tab_class(true), "nav__tab nav__tab--active");
}

#[test]
fn inactive_tab_has_no_modifier() {
    // The "Plugins" tab always renders inactive in this scaffold, regardless
    // of counter value.
    assert_eq!(tab_class(false), "nav__tab");
    assert!(!tab_class(false).contains("--active"));
}

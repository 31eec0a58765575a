use super::*;

#[test]
fn navbar_css_styles_scrolled_class_in_both_themes() {
    assert!(NAVBAR_CSS.contains(".navbar.scrolled"));
    assert!(NAVBAR_CSS.contains("[data-theme=\"dark\"] .navbar.scrolled"));
}

#[test]
fn reveal_css_covers_revealed_and_lazy_states() {
    assert!(REVEAL_CSS.contains("section.section-revealed"));
    assert!(REVEAL_CSS.contains(".lazy"));
}

#[test]
fn ripple_keyframes_are_named_ripple() {
    assert!(RIPPLE_CSS.contains("@keyframes ripple"));
}

#[test]
fn fragments_are_distinct_and_non_empty() {
    let names: Vec<&str> = ALL.iter().map(|(name, _)| *name).collect();
    assert_eq!(names, ["navbar", "ripple", "reveal"]);
    assert!(ALL.iter().all(|(_, css)| !css.trim().is_empty()));
}

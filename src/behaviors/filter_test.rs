use super::*;

#[test]
fn all_shows_every_card() {
    assert!(card_matches(ALL, Some("ml")));
    assert!(card_matches(ALL, None));
}

#[test]
fn category_must_match_exactly() {
    assert!(card_matches("ml", Some("ml")));
    assert!(!card_matches("ml", Some("web")));
    assert!(!card_matches("ml", Some("ML")));
    assert!(!card_matches("ml", None));
}

#[test]
fn shown_style_restores_layout() {
    assert!(SHOWN_STYLE.contains(&("display", "block")));
    assert!(SHOWN_STYLE.contains(&("opacity", "1")));
    assert!(FADING_STYLE.iter().all(|(property, _)| *property != "display"));
}

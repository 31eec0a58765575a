use super::*;

// =============================================================
// Ripple
// =============================================================

#[test]
fn ripple_centres_on_click() {
    let rect = Rect { left: 100.0, top: 50.0, width: 120.0, height: 40.0 };
    let ripple = Ripple::from_click(rect, 160.0, 70.0);
    assert_eq!(ripple.size, 120.0);
    assert_eq!(ripple.x, 0.0);
    assert_eq!(ripple.y, -40.0);
}

#[test]
fn ripple_size_uses_longer_side() {
    let rect = Rect { left: 0.0, top: 0.0, width: 30.0, height: 90.0 };
    assert_eq!(Ripple::from_click(rect, 0.0, 0.0).size, 90.0);
}

#[test]
fn ripple_css_places_span() {
    let ripple = Ripple { size: 80.0, x: 4.0, y: -2.5 };
    let css = ripple.css_text();
    assert!(css.contains("width: 80px; height: 80px;"));
    assert!(css.contains("left: 4px; top: -2.5px;"));
    assert!(css.contains("animation: ripple 0.6s linear;"));
}

// =============================================================
// Parallax
// =============================================================

#[test]
fn parallax_moves_deeper_icons_faster() {
    assert!((parallax_speed(0) - 0.2).abs() < 1e-9);
    assert!((parallax_speed(2) - 0.4).abs() < 1e-9);
    assert!((parallax_offset(100.0, 0) + 20.0).abs() < 1e-9);
    assert!(parallax_offset(100.0, 3) < parallax_offset(100.0, 1));
}

#[test]
fn parallax_at_top_is_neutral() {
    assert_eq!(parallax_offset(0.0, 4), 0.0);
}

// =============================================================
// Typewriter
// =============================================================

#[test]
fn typewriter_emits_one_char_per_step() {
    let frames: Vec<String> = Typewriter::new("Hi!").collect();
    assert_eq!(frames, ["H", "Hi", "Hi!"]);
}

#[test]
fn typewriter_keeps_tags_whole() {
    let frames: Vec<String> = Typewriter::new("<b>ok</b>").collect();
    assert_eq!(frames, ["<b>o", "<b>ok", "<b>ok</b>"]);
}

#[test]
fn typewriter_keeps_entities_whole() {
    let frames: Vec<String> = Typewriter::new("a&amp;b").collect();
    assert_eq!(frames, ["a", "a&amp;", "a&amp;b"]);
}

#[test]
fn typewriter_handles_multibyte_chars() {
    let frames: Vec<String> = Typewriter::new("héé").collect();
    assert_eq!(frames, ["h", "hé", "héé"]);
}

#[test]
fn typewriter_treats_stray_markup_as_text() {
    let frames: Vec<String> = Typewriter::new("1 < 2 & 3").collect();
    assert_eq!(frames.len(), "1 < 2 & 3".len());
    assert_eq!(frames.last().map(String::as_str), Some("1 < 2 & 3"));
}

#[test]
fn typewriter_on_empty_text_is_done() {
    let mut writer = Typewriter::new("");
    assert!(writer.is_done());
    assert_eq!(writer.next(), None);
}

// =============================================================
// Misc
// =============================================================

#[test]
fn focus_style_kept_only_with_value() {
    assert!(keeps_focus_style("ada@example.com"));
    assert!(!keeps_focus_style(""));
}

#[test]
fn hero_sequence_order() {
    assert_eq!(HERO_SELECTORS[0], ".hero-title");
    assert_eq!(HERO_SELECTORS[4], ".social-links");
}

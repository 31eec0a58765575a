use super::*;
use crate::theme::memory::{MemoryStore, RecordingSurface};

const KEY: &str = "theme";

type TestController = ThemeController<MemoryStore, Option<bool>, RecordingSurface>;

fn controller(store: MemoryStore, system: Option<bool>) -> TestController {
    ThemeController::new(store, system, RecordingSurface::new(), KEY)
}

fn stored(c: &TestController) -> Option<String> {
    c.store().get(KEY)
}

// =============================================================
// resolve_initial_theme
// =============================================================

#[test]
fn resolve_prefers_stored_dark() {
    let c = controller(MemoryStore::with_entry(KEY, "dark"), Some(false));
    let mut ui = UiState::default();
    assert_eq!(c.resolve_initial_theme(&mut ui), Theme::Dark);
    assert_eq!(ui.theme, Some(Theme::Dark));
    assert_eq!(c.surface().theme(), Some(Theme::Dark));
    assert_eq!(c.surface().icon(), Some(ThemeIcon::Sun));
}

#[test]
fn resolve_prefers_stored_light_over_system_dark() {
    let c = controller(MemoryStore::with_entry(KEY, "light"), Some(true));
    let mut ui = UiState::default();
    assert_eq!(c.resolve_initial_theme(&mut ui), Theme::Light);
    assert_eq!(c.surface().icon(), Some(ThemeIcon::Moon));
}

#[test]
fn resolve_falls_back_to_system_dark() {
    let c = controller(MemoryStore::new(), Some(true));
    let mut ui = UiState::default();
    assert_eq!(c.resolve_initial_theme(&mut ui), Theme::Dark);
}

#[test]
fn resolve_falls_back_to_system_light() {
    let c = controller(MemoryStore::new(), Some(false));
    let mut ui = UiState::default();
    assert_eq!(c.resolve_initial_theme(&mut ui), Theme::Light);
}

#[test]
fn resolve_defaults_to_light_when_system_unknown() {
    let c = controller(MemoryStore::new(), None);
    let mut ui = UiState::default();
    assert_eq!(c.resolve_initial_theme(&mut ui), Theme::Light);
    assert_eq!(c.surface().icon(), Some(ThemeIcon::Moon));
}

#[test]
fn resolve_never_writes_the_store() {
    let cases = [
        (MemoryStore::with_entry(KEY, "dark"), Some(false)),
        (MemoryStore::with_entry(KEY, "light"), Some(true)),
        (MemoryStore::new(), Some(true)),
        (MemoryStore::new(), Some(false)),
        (MemoryStore::new(), None),
    ];
    for (store, system) in cases {
        let before = store.snapshot();
        let c = controller(store, system);
        c.resolve_initial_theme(&mut UiState::default());
        assert_eq!(c.store().writes(), 0);
        assert_eq!(c.store().snapshot(), before);
    }
}

#[test]
fn resolve_treats_unknown_stored_value_as_no_choice() {
    let c = controller(MemoryStore::with_entry(KEY, "sepia"), Some(true));
    let mut ui = UiState::default();
    assert_eq!(c.resolve_initial_theme(&mut ui), Theme::Dark);
    assert_eq!(stored(&c).as_deref(), Some("sepia"));
}

#[test]
fn resolve_treats_empty_stored_value_as_no_choice() {
    let c = controller(MemoryStore::with_entry(KEY, ""), Some(true));
    let mut ui = UiState::default();
    assert_eq!(c.resolve_initial_theme(&mut ui), Theme::Dark);
    assert!(!c.has_stored_choice());
}

#[test]
fn resolve_tolerates_missing_icon() {
    let c = ThemeController::new(MemoryStore::new(), Some(true), RecordingSurface::without_icon(), KEY);
    let mut ui = UiState::default();
    assert_eq!(c.resolve_initial_theme(&mut ui), Theme::Dark);
    assert_eq!(c.surface().theme(), Some(Theme::Dark));
    assert_eq!(c.surface().icon(), None);
}

// =============================================================
// toggle_theme
// =============================================================

#[test]
fn toggle_persists_new_theme() {
    let c = controller(MemoryStore::new(), Some(false));
    let mut ui = UiState::default();
    c.resolve_initial_theme(&mut ui);
    assert_eq!(c.toggle_theme(&mut ui), Theme::Dark);
    assert_eq!(stored(&c).as_deref(), Some("dark"));
    assert_eq!(c.surface().theme(), Some(Theme::Dark));
    assert_eq!(c.surface().icon(), Some(ThemeIcon::Sun));
}

#[test]
fn toggle_from_unresolved_state_starts_at_light() {
    let c = controller(MemoryStore::new(), None);
    let mut ui = UiState::default();
    assert_eq!(c.toggle_theme(&mut ui), Theme::Dark);
}

#[test]
fn toggle_twice_restores_theme_and_stored_value() {
    for start in ["light", "dark"] {
        let c = controller(MemoryStore::with_entry(KEY, start), None);
        let mut ui = UiState::default();
        let original = c.resolve_initial_theme(&mut ui);
        c.toggle_theme(&mut ui);
        c.toggle_theme(&mut ui);
        assert_eq!(ui.theme, Some(original));
        assert_eq!(c.surface().theme(), Some(original));
        assert_eq!(stored(&c).as_deref(), Some(start));
    }
}

#[test]
fn store_always_holds_active_theme_after_toggle() {
    let c = controller(MemoryStore::new(), Some(true));
    let mut ui = UiState::default();
    c.resolve_initial_theme(&mut ui);
    for _ in 0..5 {
        let next = c.toggle_theme(&mut ui);
        assert_eq!(stored(&c), Some(next.as_str().to_owned()));
        assert_eq!(ui.theme, Some(next));
    }
    assert_eq!(c.store().writes(), 5);
}

#[test]
fn toggle_still_applies_when_store_rejects_write() {
    let c = ThemeController::new(MemoryStore::read_only(), None, RecordingSurface::new(), KEY);
    let mut ui = UiState::default();
    c.resolve_initial_theme(&mut ui);
    assert_eq!(c.toggle_theme(&mut ui), Theme::Dark);
    assert_eq!(c.surface().theme(), Some(Theme::Dark));
    assert_eq!(c.store().get(KEY), None);
}

// =============================================================
// on_system_theme_change
// =============================================================

#[test]
fn system_change_applies_without_stored_choice() {
    let c = controller(MemoryStore::new(), Some(false));
    let mut ui = UiState::default();
    c.resolve_initial_theme(&mut ui);
    assert_eq!(c.on_system_theme_change(&mut ui, true), Some(Theme::Dark));
    assert_eq!(ui.theme, Some(Theme::Dark));
    assert_eq!(c.surface().icon(), Some(ThemeIcon::Sun));
    assert_eq!(c.on_system_theme_change(&mut ui, false), Some(Theme::Light));
    assert_eq!(c.store().writes(), 0);
}

#[test]
fn system_change_ignored_with_stored_choice() {
    for value in [true, false] {
        let c = controller(MemoryStore::with_entry(KEY, "dark"), Some(!value));
        let mut ui = UiState::default();
        c.resolve_initial_theme(&mut ui);
        assert_eq!(c.on_system_theme_change(&mut ui, value), None);
        assert_eq!(ui.theme, Some(Theme::Dark));
        assert_eq!(c.surface().theme(), Some(Theme::Dark));
        assert_eq!(stored(&c).as_deref(), Some("dark"));
    }
}

#[test]
fn system_change_ignored_with_unrecognised_stored_value() {
    let c = controller(MemoryStore::with_entry(KEY, "sepia"), Some(false));
    let mut ui = UiState::default();
    c.resolve_initial_theme(&mut ui);
    assert_eq!(c.on_system_theme_change(&mut ui, true), None);
    assert_eq!(ui.theme, Some(Theme::Light));
}

// =============================================================
// Scenarios
// =============================================================

#[test]
fn scenario_system_dark_then_toggle_then_system_light() {
    let c = controller(MemoryStore::new(), Some(true));
    let mut ui = UiState::default();

    assert_eq!(c.resolve_initial_theme(&mut ui), Theme::Dark);
    assert_eq!(c.surface().icon(), Some(ThemeIcon::Sun));
    assert_eq!(stored(&c), None);

    assert_eq!(c.toggle_theme(&mut ui), Theme::Light);
    assert_eq!(c.surface().icon(), Some(ThemeIcon::Moon));
    assert_eq!(stored(&c).as_deref(), Some("light"));

    assert_eq!(c.on_system_theme_change(&mut ui, false), None);
    assert_eq!(ui.theme, Some(Theme::Light));
    assert_eq!(stored(&c).as_deref(), Some("light"));
}

#[test]
fn scenario_stored_light_beats_system_dark() {
    let c = controller(MemoryStore::with_entry(KEY, "light"), Some(true));
    let mut ui = UiState::default();
    assert_eq!(c.resolve_initial_theme(&mut ui), Theme::Light);
    assert_eq!(c.surface().icon(), Some(ThemeIcon::Moon));
}

//! Shared client-side state.
//!
//! DESIGN
//! ======
//! The page has exactly one piece of state worth owning: the active theme.
//! It lives in [`ui::UiState`] next to the few flags the navigation bindings
//! track, and the whole struct is held in one `RwSignal` created at boot.

pub mod theme;
pub mod ui;

//! Utility helpers shared across behaviors.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns from the behavior logic so the
//! pure parts stay testable natively.

#[cfg(feature = "hydrate")]
pub mod bind;
#[cfg(feature = "hydrate")]
pub mod dark_mode;
pub mod debounce;
#[cfg(feature = "hydrate")]
pub mod dom;

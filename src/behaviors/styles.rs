//! Stylesheet fragments the behaviors rely on, injected once at boot.

#[cfg(test)]
#[path = "styles_test.rs"]
mod styles_test;

pub const NAVBAR_CSS: &str = "
.navbar {
    transition: transform 0.3s ease, background-color 0.3s ease;
}
.navbar.scrolled {
    background-color: rgba(255, 255, 255, 0.98);
    backdrop-filter: blur(20px);
}
[data-theme=\"dark\"] .navbar.scrolled {
    background-color: rgba(17, 24, 39, 0.98);
}
";

pub const RIPPLE_CSS: &str = "
@keyframes ripple {
    to {
        transform: scale(4);
        opacity: 0;
    }
}
";

pub const REVEAL_CSS: &str = "
section {
    opacity: 0;
    transform: translateY(30px);
    transition: opacity 0.6s ease, transform 0.6s ease;
}
section.section-revealed {
    opacity: 1;
    transform: translateY(0);
}
.lazy {
    opacity: 0;
    transition: opacity 0.3s;
}
.lazy:not([src]) {
    background: var(--bg-tertiary);
}
";

pub const ALL: [(&str, &str); 3] = [("navbar", NAVBAR_CSS), ("ripple", RIPPLE_CSS), ("reveal", REVEAL_CSS)];

#[cfg(feature = "hydrate")]
pub fn inject_all() {
    for (name, css) in ALL {
        if let Err(e) = crate::util::dom::inject_style(css) {
            log::warn!("{name} styles not injected: {e}");
        }
    }
}

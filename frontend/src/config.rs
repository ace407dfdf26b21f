use log::Level;

use crate::dom;
use crate::motion::smooth_scroll::ScrollOptions;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Phase changes and frame diagnostics while developing
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Whether the visitor asked the OS for reduced motion.
pub fn prefers_reduced_motion() -> bool {
    dom::window()
        .ok()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Smooth scroll tuning for the landing page. Wheel smoothing is dropped
/// for visitors who prefer reduced motion.
pub fn scroll_options() -> ScrollOptions {
    let options = ScrollOptions::default();
    if prefers_reduced_motion() {
        ScrollOptions {
            smooth_wheel: false,
            ..options
        }
    } else {
        options
    }
}

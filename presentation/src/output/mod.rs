//! Result formatting

pub mod console;

/// Turn colored output off; when enabled, terminal detection decides.
pub fn set_color_enabled(enabled: bool) {
    if !enabled {
        colored::control::set_override(false);
    }
}

//! CLI argument definitions and terminal setup.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

/// Force plain output when asked to; otherwise leave `colored`'s own
/// detection (`NO_COLOR`, `CLICOLOR`, tty) in charge.
pub fn apply_color_choice(no_color: bool) {
    if no_color {
        colored::control::set_override(false);
    }
}

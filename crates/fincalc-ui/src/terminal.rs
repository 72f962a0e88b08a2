//! Terminal detection utilities.
//!
//! Colour support follows the usual environment conventions unless the
//! process has pinned a [`ColorMode`] with [`set_color_mode`].

use std::env;
use std::sync::atomic::{AtomicU8, Ordering};

use fincalc_config::ColorMode;

static COLOR_MODE: AtomicU8 = AtomicU8::new(0);

/// Pins colour output for the rest of the process.
pub fn set_color_mode(mode: ColorMode) {
    let raw = match mode {
        ColorMode::Auto => 0,
        ColorMode::Always => 1,
        ColorMode::Never => 2,
    };
    COLOR_MODE.store(raw, Ordering::Relaxed);
}

/// The mode last set with [`set_color_mode`].
pub fn color_mode() -> ColorMode {
    match COLOR_MODE.load(Ordering::Relaxed) {
        1 => ColorMode::Always,
        2 => ColorMode::Never,
        _ => ColorMode::Auto,
    }
}

/// Returns `true` if stdout is connected to a terminal (TTY).
pub fn is_tty() -> bool {
    crossterm::tty::IsTty::is_tty(&std::io::stdout())
}

/// Returns `true` if stdin is connected to a terminal, i.e. a person is
/// typing rather than a script piping commands in.
pub fn stdin_is_tty() -> bool {
    crossterm::tty::IsTty::is_tty(&std::io::stdin())
}

/// Determines if ANSI colour codes should be used.
///
/// An explicit `always`/`never` mode wins. In `auto` mode:
/// - `NO_COLOR` (any value): disables colour (<https://no-color.org/>)
/// - `CLICOLOR=0`: disables colour
/// - `TERM=dumb`: disables colour
/// - `CLICOLOR_FORCE` (any value): forces colour even in non-TTY
/// - Falls back to TTY detection
pub fn supports_color() -> bool {
    match color_mode() {
        ColorMode::Always => return true,
        ColorMode::Never => return false,
        ColorMode::Auto => {}
    }

    if env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if env::var("CLICOLOR").as_deref() == Ok("0") {
        return false;
    }

    if env::var("TERM").as_deref() == Ok("dumb") {
        return false;
    }

    if env::var_os("CLICOLOR_FORCE").is_some() {
        return true;
    }

    is_tty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detection_does_not_panic() {
        let _ = is_tty();
        let _ = stdin_is_tty();
        let _ = supports_color();
    }

    #[test]
    fn never_mode_disables_color() {
        set_color_mode(ColorMode::Never);
        assert_eq!(color_mode(), ColorMode::Never);
        assert!(!supports_color());
    }
}

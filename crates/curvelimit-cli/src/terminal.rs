//! Terminal styling and color utilities.
//!
//! Report rendering asks for a [`ColorPalette`] instead of emitting escape
//! codes directly, so the same code path serves colored terminals, pipes and
//! tests.

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bright bold white for table headers.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for separators and secondary values.
    pub const GRAY: &str = "\x1b[90m";
    /// Green for stable speeds.
    pub const GREEN: &str = "\x1b[32m";
    /// Orange (256-color) for values close to a threshold.
    pub const ORANGE: &str = "\x1b[38;5;208m";
    /// Red for infeasible curves and exceeded limits.
    pub const RED: &str = "\x1b[31m";
}

/// A collection of resolved color codes, either actual ANSI sequences
/// or empty strings when color is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub header: &'static str,
    pub gray: &'static str,
    pub stable: &'static str,
    pub warning: &'static str,
    pub unstable: &'static str,
}

impl ColorPalette {
    /// Create a palette with actual ANSI color codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            header: colors::WHITE_BOLD,
            gray: colors::GRAY,
            stable: colors::GREEN,
            warning: colors::ORANGE,
            unstable: colors::RED,
        }
    }

    /// Create a palette with no colors (empty strings).
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            header: "",
            gray: "",
            stable: "",
            warning: "",
            unstable: "",
        }
    }

    /// Resolve the palette from terminal capabilities and the `--no-color` flag.
    #[must_use]
    pub fn resolve(no_color: bool) -> Self {
        if !no_color && supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::resolve(false)
    }
}

/// Check if the terminal supports ANSI color codes.
///
/// Respects the `NO_COLOR` environment variable (https://no-color.org/) and
/// the `TERM=dumb` convention.
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_color_flag_forces_plain_palette() {
        assert_eq!(ColorPalette::resolve(true), ColorPalette::plain());
    }

    #[test]
    fn plain_palette_is_empty() {
        let palette = ColorPalette::plain();
        assert!(palette.reset.is_empty());
        assert!(palette.stable.is_empty());
        assert!(palette.unstable.is_empty());
    }

    #[test]
    fn colored_palette_uses_escape_codes() {
        let palette = ColorPalette::colored();
        assert_eq!(palette.unstable, colors::RED);
        assert!(palette.reset.starts_with('\x1b'));
    }
}

//! Semantic styling for text output.
//!
//! Renderers tag text with a [`Role`]; the [`Palette`] decides how (and
//! whether) a role is shown. Painting never changes the visible text, so
//! widths must always be measured on the unpainted string.

// ---------------------------------------------------------------------------
// ANSI escape sequences
// ---------------------------------------------------------------------------

const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_RED: &str = "\x1b[31m";
const ANSI_GREEN: &str = "\x1b[32m";
const ANSI_YELLOW: &str = "\x1b[33m";
const ANSI_RESET: &str = "\x1b[0m";

/// What a piece of text means in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Column headings.
    Heading,
    /// Values only the baseline has (`-` lines).
    Removed,
    /// Values only the candidate has (`+` lines).
    Added,
    /// A family whose name mentions its alias.
    Match,
    /// A family whose name gives no clue it serves its alias.
    ///
    /// Shown in yellow, the terminal's nearest match for the orange
    /// `notmatch` cells of HTML tables. Red stays reserved for `-` lines so
    /// a flagged family is never mistaken for a removal.
    Attention,
}

/// How roles are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    /// ANSI SGR escapes.
    Ansi,
    /// No styling at all.
    #[default]
    Plain,
}

impl Palette {
    /// Picks [`Palette::Ansi`] when `colors` is set.
    pub fn from_colors(colors: bool) -> Self {
        if colors { Palette::Ansi } else { Palette::Plain }
    }

    /// Wraps `text` in the escapes for `role`.
    ///
    /// Empty text stays empty so blank columns remain blank.
    pub fn paint(self, role: Role, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        match (self, sgr(role)) {
            (Palette::Ansi, Some(code)) => format!("{code}{text}{ANSI_RESET}"),
            (Palette::Ansi, None) | (Palette::Plain, _) => text.to_owned(),
        }
    }
}

fn sgr(role: Role) -> Option<&'static str> {
    match role {
        Role::Heading => Some(ANSI_BOLD),
        Role::Removed => Some(ANSI_RED),
        Role::Added => Some(ANSI_GREEN),
        Role::Attention => Some(ANSI_YELLOW),
        Role::Match => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_palette_returns_text_unchanged() {
        for role in [Role::Heading, Role::Removed, Role::Added, Role::Match, Role::Attention] {
            assert_eq!(Palette::Plain.paint(role, "DejaVu Sans"), "DejaVu Sans");
        }
    }

    #[test]
    fn ansi_palette_wraps_in_escape_and_reset() {
        assert_eq!(
            Palette::Ansi.paint(Role::Removed, "x"),
            "\x1b[31mx\x1b[0m"
        );
        assert_eq!(Palette::Ansi.paint(Role::Added, "x"), "\x1b[32mx\x1b[0m");
        assert_eq!(Palette::Ansi.paint(Role::Heading, "x"), "\x1b[1mx\x1b[0m");
    }

    #[test]
    fn attention_is_yellow_and_distinct_from_removed() {
        assert_eq!(Palette::Ansi.paint(Role::Attention, "x"), "\x1b[33mx\x1b[0m");
        assert_ne!(
            Palette::Ansi.paint(Role::Attention, "x"),
            Palette::Ansi.paint(Role::Removed, "x")
        );
    }

    #[test]
    fn match_role_is_unstyled() {
        assert_eq!(Palette::Ansi.paint(Role::Match, "Sans"), "Sans");
    }

    #[test]
    fn empty_text_is_never_painted() {
        assert_eq!(Palette::Ansi.paint(Role::Added, ""), "");
    }

    #[test]
    fn from_colors_selects_palette() {
        assert_eq!(Palette::from_colors(true), Palette::Ansi);
        assert_eq!(Palette::from_colors(false), Palette::Plain);
    }
}

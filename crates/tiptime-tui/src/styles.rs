//! TUI styles and color themes.

use ratatui::style::{Color, Modifier, Style};

/// Color theme for the form.
pub struct ColorTheme {
    pub primary: Color,
    pub success: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub focus: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            success: Color::Green,
            text: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
            focus: Color::Yellow,
        }
    }
}

impl ColorTheme {
    /// Get the style for the title.
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Get the style for normal text.
    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Get the style for muted text.
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Border style for a field, highlighted when it has focus.
    #[must_use]
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.focus)
        } else {
            Style::default().fg(self.border)
        }
    }

    /// Get the style for the computed tip.
    #[must_use]
    pub fn result_style(&self) -> Style {
        Style::default()
            .fg(self.success)
            .add_modifier(Modifier::BOLD)
    }

    /// Get the style for key hints.
    #[must_use]
    pub fn key_style(&self) -> Style {
        Style::default().fg(self.focus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_changes_border() {
        let theme = ColorTheme::default();
        assert_ne!(theme.border_style(true), theme.border_style(false));
        assert_eq!(theme.border_style(true).fg, Some(Color::Yellow));
    }

    #[test]
    fn result_is_bold() {
        let theme = ColorTheme::default();
        assert!(theme.result_style().add_modifier.contains(Modifier::BOLD));
    }
}

//! TUI footer panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Render the footer panel with keyboard shortcuts.
pub fn render_footer(frame: &mut Frame, area: Rect, theme: &ColorTheme) {
    let key = theme.key_style();
    let text = vec![Line::from(vec![
        Span::styled("Tab", key),
        Span::raw(": next | "),
        Span::styled("Ctrl-R", key),
        Span::raw(": round up | "),
        Span::styled("Ctrl-U", key),
        Span::raw(": clear | "),
        Span::styled("Esc", key),
        Span::raw(": quit"),
    ])];

    let block = Block::default().borders(Borders::TOP);
    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}

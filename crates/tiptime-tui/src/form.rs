//! Form widgets: text fields, the round-up toggle, and the result line.

use ratatui::layout::{Alignment, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Render a labelled single-line text field.
///
/// The terminal cursor is placed after the text when the field has focus.
pub fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    theme: &ColorTheme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {label} "))
        .border_style(theme.border_style(focused));

    let paragraph = Paragraph::new(value).style(theme.text_style()).block(block);
    frame.render_widget(paragraph, area);

    if focused && area.width > 2 && area.height > 2 {
        let typed = u16::try_from(value.chars().count()).unwrap_or(u16::MAX);
        let x = area
            .x
            .saturating_add(1)
            .saturating_add(typed)
            .min(area.right().saturating_sub(2));
        frame.set_cursor_position(Position::new(x, area.y + 1));
    }
}

/// Render the round-up toggle as a checkbox line.
pub fn render_toggle(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    on: bool,
    focused: bool,
    theme: &ColorTheme,
) {
    let mark = if on { "[x]" } else { "[ ]" };
    let line = Line::from(vec![
        Span::styled(mark, theme.border_style(focused)),
        Span::raw(" "),
        Span::styled(label, theme.text_style()),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(focused));
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Render the computed tip.
pub fn render_result(frame: &mut Frame, area: Rect, formatted: &str, theme: &ColorTheme) {
    let line = Line::from(Span::styled(
        format!("Tip amount: {formatted}"),
        theme.result_style(),
    ));
    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

//! TUI header panel.

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Render the title bar with the active locale and currency.
pub fn render_header(frame: &mut Frame, area: Rect, locale: &str, currency: &str, theme: &ColorTheme) {
    let text = vec![Line::from(vec![
        Span::styled("Calculate tip", theme.header_style()),
        Span::styled(format!("  {locale} ({currency})"), theme.muted_style()),
    ])];

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme.muted_style());

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn render_header_contains_title_and_locale() {
        let backend = TestBackend::new(60, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_header(frame, area, "en-US", "USD", &ColorTheme::default());
            })
            .unwrap();

        let content: String = (0..buf.area.width)
            .map(|x| buf.buffer[(x, 0)].symbol().to_string())
            .collect();
        assert!(content.contains("Calculate tip"));
        assert!(content.contains("en-US (USD)"));
    }
}

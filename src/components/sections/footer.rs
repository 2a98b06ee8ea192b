use crate::components::{theme, Section};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Closing line of the page. Not a navigation target.
pub struct Footer;

impl Section for Footer {
    fn id(&self) -> &'static str {
        "footer"
    }

    fn height(&self, _width: u16) -> u16 {
        3
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme::BORDER))
            .style(Style::default().bg(theme::BACKGROUND));
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(vec![
            Line::from(Span::styled(
                "Thodar: continuity of care for every implant.",
                Style::default().fg(theme::TITLE),
            )),
            Line::from(Span::styled(
                "Prototype concept. All records are simulated; no data leaves this screen.",
                Style::default().fg(theme::MUTED),
            )),
        ])
        .alignment(Alignment::Center)
        .render(inner, buf);
    }
}

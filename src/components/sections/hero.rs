use crate::components::{theme, Section};
use crate::observer::{RevealHandle, RevealRegistry};
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

const HEIGHT: u16 = 13;

/// Opening banner with the brand and call to action.
pub struct Hero {
    reveal: RevealHandle,
}

impl Hero {
    pub fn new(reveals: &RevealRegistry) -> Self {
        Self {
            reveal: reveals.observe("home"),
        }
    }
}

impl Section for Hero {
    fn id(&self) -> &'static str {
        "home"
    }

    fn height(&self, _width: u16) -> u16 {
        HEIGHT
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        let revealed = self.reveal.is_revealed();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::PANEL));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::default(),
            Line::from(Span::styled(
                "T H O D A R",
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Continuity of care for every orthopaedic implant",
                Style::default()
                    .fg(theme::TITLE)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(
                "A registry concept that follows each implant from the operating theatre \
                 through every review, so outcomes, recalls and follow-up gaps are seen early.",
                theme::body_style(revealed),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled(
                    " Explore the dashboard: press 4 or d ",
                    Style::default()
                        .fg(theme::BACKGROUND)
                        .bg(theme::FOCUS)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("   "),
                Span::styled(
                    " Read the vision: press 7 ",
                    Style::default().fg(theme::ACCENT).bg(theme::SELECTED),
                ),
            ]),
            Line::default(),
            Line::from(Span::styled(
                "Prototype. Every record on this page is simulated.",
                Style::default().fg(theme::MUTED).add_modifier(Modifier::ITALIC),
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

use super::{framed_height, render_framed};
use crate::components::{theme, Section};
use crate::observer::{RevealHandle, RevealRegistry};
use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

const INTRO: &str = "A registry earns trust one hospital at a time. The roadmap grows \
from a regional pilot to a national, interoperable record of every implant.";

const PHASES: [(&str, &str, &str); 3] = [
    (
        "Phase 1",
        "Regional pilot",
        "Three partner hospitals in Tamil Nadu record knee, hip and trauma implants with structured follow-up.",
    ),
    (
        "Phase 2",
        "State registry",
        "Open enrolment for public and private hospitals, automated overdue reminders and quarterly outcome reports.",
    ),
    (
        "Phase 3",
        "National interoperability",
        "Link with national health IDs and device databases so recall signals reach every treating surgeon.",
    ),
];

/// Roadmap from pilot to national registry.
pub struct Vision {
    reveal: RevealHandle,
}

impl Vision {
    pub fn new(reveals: &RevealRegistry) -> Self {
        Self {
            reveal: reveals.observe("vision"),
        }
    }

    fn roadmap(revealed: bool) -> Text<'static> {
        let mut lines = Vec::new();
        for (phase, name, detail) in PHASES {
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {phase} "),
                    Style::default()
                        .fg(theme::BACKGROUND)
                        .bg(theme::ACCENT)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {name}"),
                    Style::default().fg(theme::TITLE).add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::styled(detail, theme::body_style(revealed)));
            lines.push(Line::default());
        }
        Text::from(lines)
    }
}

impl Section for Vision {
    fn id(&self) -> &'static str {
        "vision"
    }

    fn height(&self, width: u16) -> u16 {
        let roadmap = Self::roadmap(true);
        let rows = theme::wrapped_height(&roadmap, theme::section_inner_width(width));
        framed_height(&Text::from(INTRO), width, rows)
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        let revealed = self.reveal.is_revealed();
        let body = render_framed("Vision", Text::from(INTRO), revealed, area, buf);
        Paragraph::new(Self::roadmap(revealed))
            .wrap(Wrap { trim: true })
            .render(body, buf);
    }
}

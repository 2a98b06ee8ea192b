use super::{framed_height, render_card, render_framed};
use crate::components::Section;
use crate::observer::{RevealHandle, RevealRegistry};
use ratatui::prelude::*;

const CARD_HEIGHT: u16 = 6;

const INTRO: &str = "Thodar is built on four pillars. Together they turn scattered \
surgical notes into a living record that clinicians, hospitals and regulators can trust.";

const PILLARS: [(&str, &str); 4] = [
    (
        "Unified Implant Record",
        "Every device, lot number, surgeon and institution linked to one patient timeline.",
    ),
    (
        "Longitudinal Follow-up",
        "Scheduled reviews with overdue tracking, across hospitals and across years.",
    ),
    (
        "Early Signal Detection",
        "Alert levels and risk grading surface the cases that deserve a second look.",
    ),
    (
        "Governance by Design",
        "Consent, role-based access and audit trails at the core, not bolted on.",
    ),
];

/// The four platform pillars, laid out as a two by two grid.
pub struct Platform {
    reveal: RevealHandle,
}

impl Platform {
    pub fn new(reveals: &RevealRegistry) -> Self {
        Self {
            reveal: reveals.observe("platform"),
        }
    }
}

impl Section for Platform {
    fn id(&self) -> &'static str {
        "platform"
    }

    fn height(&self, width: u16) -> u16 {
        framed_height(&Text::from(INTRO), width, CARD_HEIGHT * 2 + 1)
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        let revealed = self.reveal.is_revealed();
        let body = render_framed("Platform pillars", Text::from(INTRO), revealed, area, buf);

        let rows = Layout::vertical([Constraint::Length(CARD_HEIGHT); 2])
            .spacing(1)
            .split(body);
        for (row, pair) in rows.iter().zip(PILLARS.chunks(2)) {
            let cells = Layout::horizontal([Constraint::Ratio(1, 2); 2])
                .spacing(2)
                .split(*row);
            for ((title, text), cell) in pair.iter().zip(cells.iter()) {
                render_card(title, text, revealed, *cell, buf);
            }
        }
    }
}

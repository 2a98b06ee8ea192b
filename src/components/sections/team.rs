use super::{framed_height, render_card, render_framed};
use crate::components::Section;
use crate::observer::{RevealHandle, RevealRegistry};
use ratatui::prelude::*;

const CARD_HEIGHT: u16 = 6;

const INTRO: &str = "A small founding team of clinicians and engineers who have spent \
years on both sides of the operating table.";

const MEMBERS: [(&str, &str); 4] = [
    ("Dr. Nila Raman", "Orthopaedic surgeon. Clinical lead and registry design."),
    ("Karthik Selvam", "Health informatics. Data model and interoperability."),
    ("Dr. Priya Anand", "Epidemiologist. Outcome measures and signal detection."),
    ("Arjun Mehta", "Software engineer. Platform and security."),
];

/// Founding team cards.
pub struct Team {
    reveal: RevealHandle,
}

impl Team {
    pub fn new(reveals: &RevealRegistry) -> Self {
        Self {
            reveal: reveals.observe("team"),
        }
    }
}

impl Section for Team {
    fn id(&self) -> &'static str {
        "team"
    }

    fn height(&self, width: u16) -> u16 {
        framed_height(&Text::from(INTRO), width, CARD_HEIGHT)
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        let revealed = self.reveal.is_revealed();
        let body = render_framed("Team", Text::from(INTRO), revealed, area, buf);

        let cards = Layout::horizontal([Constraint::Ratio(1, 4); 4])
            .spacing(1)
            .split(body);
        for ((name, role), card) in MEMBERS.iter().zip(cards.iter()) {
            render_card(name, role, revealed, *card, buf);
        }
    }
}

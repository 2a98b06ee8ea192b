use super::{framed_height, render_card, render_framed};
use crate::components::Section;
use crate::observer::{RevealHandle, RevealRegistry};
use ratatui::prelude::*;

const CARD_HEIGHT: u16 = 6;

const INTRO: &str = "Joint replacement and fracture fixation are among the most common \
operations in Indian hospitals, and their numbers grow every year. Yet once a patient \
leaves the ward, the implant all but disappears from view. Lot numbers sit in paper \
files, follow-up depends on whether the patient returns, and a failing design is noticed \
only after many patients are affected.";

const GAPS: [(&str, &str); 3] = [
    (
        "No shared registry",
        "Implant outcomes are not tracked across hospitals, so no one sees the full picture.",
    ),
    (
        "Follow-up drop-off",
        "Reviews thin out after the first year, exactly when late failures begin to show.",
    ),
    (
        "Late recall signals",
        "Device problems surface years after they start, one anecdote at a time.",
    ),
];

/// Problem statement with the three gaps the platform addresses.
pub struct Problem {
    reveal: RevealHandle,
}

impl Problem {
    pub fn new(reveals: &RevealRegistry) -> Self {
        Self {
            reveal: reveals.observe("problem"),
        }
    }
}

impl Section for Problem {
    fn id(&self) -> &'static str {
        "problem"
    }

    fn height(&self, width: u16) -> u16 {
        framed_height(&Text::from(INTRO), width, CARD_HEIGHT)
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        let revealed = self.reveal.is_revealed();
        let body = render_framed(
            "The problem: implants without a memory",
            Text::from(INTRO),
            revealed,
            area,
            buf,
        );

        let cards = Layout::horizontal([Constraint::Ratio(1, 3); 3])
            .spacing(2)
            .split(body);
        for ((title, text), card) in GAPS.iter().zip(cards.iter()) {
            render_card(title, text, revealed, *card, buf);
        }
    }
}

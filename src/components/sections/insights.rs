use super::{framed_height, render_framed};
use crate::components::{theme, Section};
use crate::observer::{RevealHandle, RevealRegistry};
use ratatui::{
    prelude::*,
    widgets::{BarChart, Block, BorderType, Borders},
};

const CHART_HEIGHT: u16 = 14;

const INTRO: &str = "Illustrative trends from the pilot concept. The figures below are \
fixed sample arrays, shown to give a sense of what a registry makes visible.";

/// Share of tracked procedures by implant category, in percent.
pub const PROCEDURE_MIX: [(&str, u64); 5] = [
    ("TKA", 42),
    ("THA", 28),
    ("Spine", 14),
    ("Trauma", 9),
    ("Shoulder", 7),
];

/// Reviews completed on time per quarter, in percent.
pub const FOLLOW_UP_RATE: [(&str, u64); 5] = [
    ("Q1 24", 61),
    ("Q2 24", 66),
    ("Q3 24", 72),
    ("Q4 24", 78),
    ("Q1 25", 83),
];

/// Static charts rendered from hardcoded arrays.
pub struct Insights {
    reveal: RevealHandle,
}

impl Insights {
    pub fn new(reveals: &RevealRegistry) -> Self {
        Self {
            reveal: reveals.observe("insights"),
        }
    }
}

fn chart<'a>(title: &'a str, data: &'a [(&'a str, u64)], colour: Color) -> BarChart<'a> {
    BarChart::default()
        .block(
            Block::default()
                .title(format!(" {title} "))
                .title_style(Style::default().fg(theme::TITLE).add_modifier(Modifier::BOLD))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme::BORDER))
                .style(Style::default().bg(theme::RAISED)),
        )
        .data(data)
        .max(100)
        .bar_width(7)
        .bar_gap(2)
        .bar_style(Style::default().fg(colour))
        .value_style(Style::default().fg(theme::BACKGROUND).bg(colour))
        .label_style(Style::default().fg(theme::TEXT))
}

impl Section for Insights {
    fn id(&self) -> &'static str {
        "insights"
    }

    fn height(&self, width: u16) -> u16 {
        framed_height(&Text::from(INTRO), width, CHART_HEIGHT)
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        let revealed = self.reveal.is_revealed();
        let body = render_framed("Insights", Text::from(INTRO), revealed, area, buf);

        let [left, right] = Layout::horizontal([Constraint::Ratio(1, 2); 2])
            .spacing(2)
            .areas(body);

        let colour = |c| if revealed { c } else { theme::MUTED };
        chart("Procedure mix (%)", &PROCEDURE_MIX, colour(theme::ACCENT)).render(left, buf);
        chart("Follow-up completed on time (%)", &FOLLOW_UP_RATE, colour(theme::GOOD))
            .render(right, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_arrays_are_percentages() {
        let mix: u64 = PROCEDURE_MIX.iter().map(|(_, v)| v).sum();
        assert_eq!(mix, 100);
        assert!(FOLLOW_UP_RATE.iter().all(|(_, v)| *v <= 100));
    }
}

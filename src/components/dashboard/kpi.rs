//! Headline figures derived from the registry by simple filtering.

use crate::components::theme;
use crate::models::{AlertLevel, FollowUpStatus, ImplantRecord, RiskLevel};
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

pub const KPI_HEIGHT: u16 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kpis {
    pub tracked: usize,
    pub overdue: usize,
    pub attention: usize,
    pub complications: u32,
    pub high_risk: usize,
}

impl Kpis {
    pub fn from_records(records: &[ImplantRecord]) -> Self {
        Self {
            tracked: records.len(),
            overdue: records
                .iter()
                .filter(|r| r.follow_up == FollowUpStatus::Overdue)
                .count(),
            attention: records
                .iter()
                .filter(|r| r.alert == AlertLevel::Attention)
                .count(),
            complications: records
                .iter()
                .map(|r| u32::from(r.complications_logged))
                .sum(),
            high_risk: records.iter().filter(|r| r.risk == RiskLevel::High).count(),
        }
    }

    fn cards(&self) -> [(&'static str, String, Color); 5] {
        [
            ("Implants tracked", self.tracked.to_string(), theme::ACCENT),
            ("Overdue follow-ups", self.overdue.to_string(), theme::BAD),
            ("Needs attention", self.attention.to_string(), theme::WARN),
            ("Complications logged", self.complications.to_string(), theme::TEXT),
            ("High-risk cases", self.high_risk.to_string(), theme::BAD),
        ]
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let cards = self.cards();
        let slots = Layout::horizontal([Constraint::Ratio(1, cards.len() as u32); 5])
            .spacing(1)
            .split(area);

        for ((label, value, colour), slot) in cards.iter().zip(slots.iter()) {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme::BORDER))
                .style(Style::default().bg(theme::RAISED));
            let inner = block.inner(*slot);
            block.render(*slot, buf);

            Paragraph::new(vec![
                Line::from(Span::styled(
                    value.clone(),
                    Style::default().fg(*colour).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(*label, Style::default().fg(theme::MUTED))),
            ])
            .alignment(Alignment::Center)
            .render(inner, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry;

    #[test]
    fn counts_come_from_the_registry() {
        let kpis = Kpis::from_records(registry::records());
        assert_eq!(kpis.tracked, 10);
        assert_eq!(kpis.overdue, 3);
        assert_eq!(kpis.attention, 2);
        assert_eq!(kpis.complications, 8);
        assert_eq!(kpis.high_risk, 3);
    }

    #[test]
    fn empty_input_is_all_zero() {
        let kpis = Kpis::from_records(&[]);
        assert_eq!(kpis.tracked, 0);
        assert_eq!(kpis.complications, 0);
    }
}

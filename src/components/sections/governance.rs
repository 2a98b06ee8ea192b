use super::{framed_height, render_framed};
use crate::components::badge::{badge_for_label, BadgeFamily};
use crate::components::{theme, Section};
use crate::observer::{RevealHandle, RevealRegistry};
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Cell, Row, Table},
};

const INTRO: &str = "Placeholder: the tables below are static, illustrative rows. They \
are not backed by any audit log or compliance engine; a production registry would \
generate them from real access and consent events.";

/// Timestamp, actor, action, status.
const AUDIT_TRAIL: [(&str, &str, &str, &str); 5] = [
    ("2025-07-21 09:14", "Dr. A. Fathima", "Follow-up recorded, THD-2025-0012", "Completed"),
    ("2025-07-14 16:02", "Registry nurse, Kaveri", "Review booked, THD-2024-0190", "Scheduled"),
    ("2025-06-30 11:47", "Data steward", "Lot MK24-118-A linked to recall watch", "Pending sign-off"),
    ("2025-06-18 08:30", "System", "Overdue reminder sent, THD-2020-0377", "Overdue"),
    ("2025-05-06 13:25", "Dr. K. Vasanthi", "Consent renewed, THD-2023-0264", "Completed"),
];

/// Control, framework, signal, residual risk.
const CONTROLS: [(&str, &str, &str, &str); 4] = [
    ("Patient consent captured before entry", "DPDP Act 2023", "stable", "Low"),
    ("Role-based access to identifiable data", "ABDM guidelines", "review", "Moderate"),
    ("Device identifiers validated on entry", "CDSCO device rules", "attention", "High"),
    ("Quarterly data quality audit", "Registry charter", "Not assessed", "TBD"),
];

const TABLE_HEIGHT: u16 = AUDIT_TRAIL.len() as u16 + 4;
const CONTROLS_HEIGHT: u16 = CONTROLS.len() as u16 + 4;

/// Illustrative governance and audit tables.
pub struct Governance {
    reveal: RevealHandle,
}

impl Governance {
    pub fn new(reveals: &RevealRegistry) -> Self {
        Self {
            reveal: reveals.observe("governance"),
        }
    }
}

fn table_block(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .title_style(Style::default().fg(theme::TITLE).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::BORDER))
        .style(Style::default().bg(theme::RAISED))
}

fn header(cells: [&'static str; 4]) -> Row<'static> {
    Row::new(cells)
        .style(
            Style::default()
                .fg(theme::TITLE)
                .bg(theme::SELECTED)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1)
}

impl Section for Governance {
    fn id(&self) -> &'static str {
        "governance"
    }

    fn height(&self, width: u16) -> u16 {
        framed_height(&Text::from(INTRO), width, TABLE_HEIGHT + 1 + CONTROLS_HEIGHT)
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        let revealed = self.reveal.is_revealed();
        let body = render_framed("Governance & audit", Text::from(INTRO), revealed, area, buf);
        let text = theme::body_style(revealed);

        let [audit_area, controls_area] = Layout::vertical([
            Constraint::Length(TABLE_HEIGHT),
            Constraint::Length(CONTROLS_HEIGHT),
        ])
        .spacing(1)
        .areas(body);

        let audit_rows = AUDIT_TRAIL.iter().map(|(at, actor, action, status)| {
            Row::new(vec![
                Cell::from(*at),
                Cell::from(*actor),
                Cell::from(*action),
                Cell::from(badge_for_label(BadgeFamily::FollowUp, status)),
            ])
            .style(text)
        });
        let audit = Table::new(
            audit_rows,
            [
                Constraint::Length(17),
                Constraint::Percentage(25),
                Constraint::Fill(1),
                Constraint::Length(18),
            ],
        )
        .header(header(["When", "Who", "What", "Status"]))
        .block(table_block("Audit trail (illustrative)"))
        .column_spacing(2);
        Widget::render(audit, audit_area, buf);

        let control_rows = CONTROLS.iter().map(|(control, framework, signal, risk)| {
            Row::new(vec![
                Cell::from(*control),
                Cell::from(*framework),
                Cell::from(badge_for_label(BadgeFamily::Alert, signal)),
                Cell::from(badge_for_label(BadgeFamily::Risk, risk)),
            ])
            .style(text)
        });
        let controls = Table::new(
            control_rows,
            [
                Constraint::Fill(1),
                Constraint::Length(20),
                Constraint::Length(16),
                Constraint::Length(12),
            ],
        )
        .header(header(["Control", "Framework", "Signal", "Residual risk"]))
        .block(table_block("Compliance checklist (illustrative)"))
        .column_spacing(2);
        Widget::render(controls, controls_area, buf);
    }
}

//! Records table: filtering, sorting and rendering.

use crate::components::badge::{badge, BadgeKind};
use crate::components::theme;
use crate::models::{FollowUpStatus, ImplantRecord};
use crate::selection::ComparisonState;
use crate::utils::time_since;
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Cell, Row, Table, TableState},
};
use std::cmp::Ordering;
use time::Date;

/// Borders plus the header row and its bottom margin.
const TABLE_CHROME: u16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    PatientId,
    Age,
    SurgeryDate,
    Risk,
    FollowUp,
}

impl SortKey {
    pub fn label(self) -> &'static str {
        match self {
            SortKey::PatientId => "Patient ID",
            SortKey::Age => "Age",
            SortKey::SurgeryDate => "Surgery date",
            SortKey::Risk => "Risk",
            SortKey::FollowUp => "Follow-up",
        }
    }

    pub fn next(self) -> Self {
        match self {
            SortKey::PatientId => SortKey::Age,
            SortKey::Age => SortKey::SurgeryDate,
            SortKey::SurgeryDate => SortKey::Risk,
            SortKey::Risk => SortKey::FollowUp,
            SortKey::FollowUp => SortKey::PatientId,
        }
    }

    fn compare(self, a: &ImplantRecord, b: &ImplantRecord) -> Ordering {
        match self {
            SortKey::PatientId => a.patient_id.cmp(b.patient_id),
            SortKey::Age => a.age.cmp(&b.age),
            // ISO dates order lexically.
            SortKey::SurgeryDate => a.surgery_date.cmp(b.surgery_date),
            SortKey::Risk => a.risk.cmp(&b.risk),
            SortKey::FollowUp => a.follow_up.cmp(&b.follow_up),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub key: SortKey,
    pub descending: bool,
}

impl Default for SortOrder {
    fn default() -> Self {
        Self {
            key: SortKey::PatientId,
            descending: false,
        }
    }
}

impl SortOrder {
    pub fn label(&self) -> String {
        format!(
            "{} {}",
            self.key.label(),
            if self.descending { "desc" } else { "asc" }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(FollowUpStatus),
}

impl StatusFilter {
    pub fn next(self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Only(FollowUpStatus::Scheduled),
            StatusFilter::Only(FollowUpStatus::Scheduled) => {
                StatusFilter::Only(FollowUpStatus::Overdue)
            }
            StatusFilter::Only(FollowUpStatus::Overdue) => {
                StatusFilter::Only(FollowUpStatus::Completed)
            }
            StatusFilter::Only(FollowUpStatus::Completed) => StatusFilter::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(status) => status.label(),
        }
    }

    fn matches(self, record: &ImplantRecord) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => record.follow_up == status,
        }
    }
}

/// Records passing `filter`, ordered by `order`. Ties keep registry order.
pub fn visible_records(
    records: &'static [ImplantRecord],
    filter: StatusFilter,
    order: SortOrder,
) -> Vec<&'static ImplantRecord> {
    let mut rows: Vec<_> = records.iter().filter(|r| filter.matches(r)).collect();
    rows.sort_by(|a, b| {
        let ordering = order.key.compare(a, b);
        if order.descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
    rows
}

pub fn table_height(rows: usize) -> u16 {
    TABLE_CHROME + u16::try_from(rows.max(1)).unwrap_or(u16::MAX)
}

/// Everything the records table needs to draw itself.
pub struct RecordsTable<'a> {
    pub rows: &'a [&'static ImplantRecord],
    pub comparison: &'a ComparisonState,
    pub today: Date,
    pub focused: bool,
}

impl RecordsTable<'_> {
    pub fn render(&self, area: Rect, buf: &mut Buffer, state: &mut TableState) {
        let header = Row::new(
            [
                "", "Patient ID", "Age/Sex", "Implant", "Site", "Surgery", "Since", "Follow-up",
                "Alert", "Risk",
            ]
            .map(|h| Cell::from(h).style(Style::default().fg(theme::TITLE))),
        )
        .style(Style::default().bg(theme::RAISED).add_modifier(Modifier::BOLD))
        .bottom_margin(1);

        let rows: Vec<Row> = if self.rows.is_empty() {
            vec![Row::new(vec![
                Cell::from(""),
                Cell::from("No records match this filter.").style(Style::default().fg(theme::MUTED)),
            ])]
        } else {
            self.rows.iter().map(|record| self.row(record)).collect()
        };

        let highlight = if self.focused {
            Style::default()
                .bg(theme::SELECTED)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let border = if self.focused { theme::FOCUS } else { theme::BORDER };

        let table = Table::new(
            rows,
            [
                Constraint::Length(3),
                Constraint::Length(14),
                Constraint::Length(7),
                Constraint::Fill(2),
                Constraint::Fill(1),
                Constraint::Length(10),
                Constraint::Length(10),
                Constraint::Length(11),
                Constraint::Length(11),
                Constraint::Length(10),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .title(" Implant records ")
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border))
                .style(Style::default().bg(theme::PANEL)),
        )
        .row_highlight_style(highlight)
        .highlight_symbol(if self.focused { "► " } else { "  " })
        .column_spacing(1);

        StatefulWidget::render(table, area, buf, state);
    }

    fn row(&self, record: &ImplantRecord) -> Row<'static> {
        let marker = match self.comparison.position(record.id) {
            Some(position) => Cell::from(format!("[{position}]"))
                .style(Style::default().fg(theme::FOCUS).add_modifier(Modifier::BOLD)),
            None if self.comparison.is_enabled() => {
                Cell::from("[ ]").style(Style::default().fg(theme::MUTED))
            }
            None => Cell::from(""),
        };

        let style = if self.comparison.is_selected(record.id) {
            Style::default().fg(theme::TITLE).bg(theme::BORDER_DIM)
        } else {
            Style::default().fg(theme::TEXT)
        };

        Row::new(vec![
            marker,
            Cell::from(record.patient_id),
            Cell::from(format!("{}/{}", record.age, record.sex)),
            Cell::from(record.implant_category),
            Cell::from(record.site),
            Cell::from(record.surgery_date),
            Cell::from(time_since(record.surgery_date, self.today)),
            Cell::from(badge(BadgeKind::FollowUp(record.follow_up))),
            Cell::from(badge(BadgeKind::Alert(record.alert))),
            Cell::from(badge(BadgeKind::Risk(record.risk))),
        ])
        .style(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RiskLevel;
    use crate::registry;

    #[test]
    fn default_order_is_patient_id_ascending() {
        let rows = visible_records(registry::records(), StatusFilter::All, SortOrder::default());
        assert_eq!(rows.len(), 10);
        assert!(rows.windows(2).all(|w| w[0].patient_id <= w[1].patient_id));
    }

    #[test]
    fn filter_keeps_only_matching_status() {
        let rows = visible_records(
            registry::records(),
            StatusFilter::Only(FollowUpStatus::Overdue),
            SortOrder::default(),
        );
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.follow_up == FollowUpStatus::Overdue));
    }

    #[test]
    fn descending_risk_puts_high_first() {
        let order = SortOrder {
            key: SortKey::Risk,
            descending: true,
        };
        let rows = visible_records(registry::records(), StatusFilter::All, order);
        assert_eq!(rows[0].risk, RiskLevel::High);
        assert_eq!(rows[rows.len() - 1].risk, RiskLevel::Low);
    }

    #[test]
    fn age_sort_orders_numerically() {
        let order = SortOrder {
            key: SortKey::Age,
            descending: false,
        };
        let rows = visible_records(registry::records(), StatusFilter::All, order);
        assert_eq!(rows.first().map(|r| r.age), Some(39));
        assert_eq!(rows.last().map(|r| r.age), Some(81));
    }

    #[test]
    fn filter_and_sort_keys_cycle() {
        let mut filter = StatusFilter::All;
        for _ in 0..4 {
            filter = filter.next();
        }
        assert_eq!(filter, StatusFilter::All);

        let mut key = SortKey::PatientId;
        for _ in 0..5 {
            key = key.next();
        }
        assert_eq!(key, SortKey::PatientId);
    }

    #[test]
    fn empty_table_still_reserves_a_row() {
        assert_eq!(table_height(0), table_height(1));
        assert_eq!(table_height(10), 14);
    }
}

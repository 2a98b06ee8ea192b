//! Side-by-side comparison of the selected records.

use crate::components::theme;
use crate::models::ImplantRecord;
use crate::utils::time_since;
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Cell, Row, Table},
};
use time::Date;

const ATTRIBUTE_COUNT: usize = 15;

const LABELS: [&str; ATTRIBUTE_COUNT] = [
    "Patient ID",
    "Age / Sex",
    "Diagnosis",
    "Implant",
    "Manufacturer",
    "Model",
    "Material",
    "Fixation",
    "Site",
    "Surgery date",
    "Time since surgery",
    "Complications",
    "Follow-up",
    "Alert",
    "Risk",
];

/// Values for one record, aligned with [`LABELS`].
fn values(r: &ImplantRecord, today: Date) -> [String; ATTRIBUTE_COUNT] {
    [
        r.patient_id.to_string(),
        format!("{} / {}", r.age, r.sex),
        r.diagnosis.to_string(),
        r.implant_category.to_string(),
        r.manufacturer.to_string(),
        r.model.to_string(),
        r.material.to_string(),
        r.fixation.to_string(),
        format!("{} ({})", r.site, r.laterality),
        r.surgery_date.to_string(),
        time_since(r.surgery_date, today),
        r.complications_logged.to_string(),
        r.follow_up.label().to_string(),
        r.alert.label().to_string(),
        r.risk.label().to_string(),
    ]
}

pub fn compare_height() -> u16 {
    ATTRIBUTE_COUNT as u16 + 4
}

/// Header cells: one label column, then one column per record in the given order.
pub fn header(records: &[&ImplantRecord]) -> Vec<String> {
    std::iter::once("Attribute".to_string())
        .chain(records.iter().map(|r| r.patient_id.to_string()))
        .collect()
}

/// Body cells, one row per attribute, columns aligned with [`header`].
pub fn rows(records: &[&ImplantRecord], today: Date) -> Vec<Vec<String>> {
    let columns: Vec<_> = records.iter().map(|r| values(r, today)).collect();
    LABELS
        .iter()
        .enumerate()
        .map(|(i, label)| {
            std::iter::once(label.to_string())
                .chain(columns.iter().map(|column| column[i].clone()))
                .collect()
        })
        .collect()
}

pub fn render(records: &[&ImplantRecord], today: Date, area: Rect, buf: &mut Buffer) {
    let header = Row::new(header(records))
        .style(
            Style::default()
                .fg(theme::TITLE)
                .bg(theme::SELECTED)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let body = rows(records, today).into_iter().map(|cells| {
        let mut cells = cells.into_iter();
        let label = cells
            .next()
            .map(|l| Cell::from(l).style(Style::default().fg(theme::ACCENT)))
            .unwrap_or_default();
        Row::new(std::iter::once(label).chain(cells.map(Cell::from)))
            .style(Style::default().fg(theme::TEXT))
    });

    let mut widths = vec![Constraint::Length(20)];
    widths.extend(records.iter().map(|_| Constraint::Fill(1)));

    let table = Table::new(body, widths)
        .header(header)
        .block(
            Block::default()
                .title(format!(" Comparative review: {} records ", records.len()))
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme::ACCENT))
                .style(Style::default().bg(theme::PANEL)),
        )
        .column_spacing(2);
    Widget::render(table, area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry;
    use time::macros::date;

    #[test]
    fn columns_follow_selection_order() {
        let picked = [registry::find(7).unwrap(), registry::find(2).unwrap()];
        let header = header(&picked);
        assert_eq!(header, vec!["Attribute", "THD-2023-0264", "THD-2020-0377"]);

        for row in rows(&picked, date!(2025 - 06 - 15)) {
            assert_eq!(row.len(), 3);
        }
    }

    #[test]
    fn rows_cover_every_attribute() {
        let picked = [registry::find(1).unwrap()];
        let rows = rows(&picked, date!(2025 - 06 - 15));
        assert_eq!(rows.len(), ATTRIBUTE_COUNT);
        assert_eq!(rows[0], vec!["Patient ID", "THD-2019-0142"]);
        assert_eq!(rows[10][1], "6.3 years");
    }
}

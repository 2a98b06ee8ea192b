//! Simulated registry dashboard.
//!
//! KPI cards, a sortable and filterable records table, and the comparative
//! review workflow. With comparison mode off a row click opens the detail
//! panel; with it on, row clicks build a selection of up to three records
//! that can be shown side by side.

use crate::components::sections::{framed_height, render_framed};
use crate::components::{theme, Component, Section};
use crate::models::ImplantRecord;
use crate::observer::{RevealHandle, RevealRegistry};
use crate::registry;
use crate::selection::{ComparePhase, ComparisonState, SelectionError, Toggle, MAX_COMPARE};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, TableState},
};
use time::Date;

pub mod compare;
pub mod kpi;
pub mod table;

use kpi::{Kpis, KPI_HEIGHT};
use table::{table_height, visible_records, RecordsTable, SortOrder, StatusFilter};

const CONTROLS_HEIGHT: u16 = 3;

const INTRO: &str = "Ten simulated cases from the pilot concept. Select a row to open \
its full record, or enable comparative review to line up to three cases side by side.";

/// What the page should do after a dashboard interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    /// Show this record in the detail panel.
    Open(&'static ImplantRecord),
    /// Show a blocking notice.
    Notice(String),
    /// Hand focus back to the page.
    Leave,
}

/// The interactive dashboard section.
pub struct Dashboard {
    /// Reference date for "time since surgery".
    today: Date,
    /// Headline counts, computed once from the registry.
    kpis: Kpis,
    /// Comparative review mode and the ordered selection.
    comparison: ComparisonState,
    /// Current sort column and direction.
    order: SortOrder,
    /// Follow-up status filter.
    filter: StatusFilter,
    /// Records shown in the table, after filtering and sorting.
    rows: Vec<&'static ImplantRecord>,
    /// Row cursor of the records table.
    state: TableState,
    /// Whether the table currently takes key input.
    focused: bool,
    reveal: RevealHandle,
}

impl Dashboard {
    pub fn new(reveals: &RevealRegistry, today: Date) -> Self {
        let mut dashboard = Self {
            today,
            kpis: Kpis::from_records(registry::records()),
            comparison: ComparisonState::new(),
            order: SortOrder::default(),
            filter: StatusFilter::default(),
            rows: Vec::new(),
            state: TableState::default(),
            focused: false,
            reveal: reveals.observe("dashboard"),
        };
        dashboard.refresh_rows();
        dashboard
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    #[cfg(test)]
    pub fn comparison(&self) -> &ComparisonState {
        &self.comparison
    }

    /// Rows currently shown, after filtering and sorting.
    #[cfg(test)]
    pub fn rows(&self) -> &[&'static ImplantRecord] {
        &self.rows
    }

    /// Records in the comparison table, in selection order. Empty unless the
    /// table is showing.
    pub fn compared_records(&self) -> Vec<&'static ImplantRecord> {
        if self.comparison.phase() != ComparePhase::Comparing {
            return Vec::new();
        }
        self.comparison
            .selected()
            .iter()
            .filter_map(|id| registry::find(*id))
            .collect()
    }

    /// Recomputes the visible rows, keeping the cursor within bounds.
    fn refresh_rows(&mut self) {
        self.rows = visible_records(registry::records(), self.filter, self.order);
        if self.rows.is_empty() {
            self.state.select(None);
        } else {
            let selection = self
                .state
                .selected()
                .unwrap_or(0)
                .min(self.rows.len() - 1);
            self.state.select(Some(selection));
        }
    }

    fn select_next(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) if i >= self.rows.len() - 1 => 0,
            Some(i) => i + 1,
            None => 0,
        };
        self.state.select(Some(i));
    }

    fn select_previous(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(0) | None => self.rows.len() - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    fn cursor_record(&self) -> Option<&'static ImplantRecord> {
        self.state.selected().and_then(|i| self.rows.get(i).copied())
    }

    /// A click on the row under the cursor.
    fn click_row(&mut self) -> Option<DashboardAction> {
        let record = self.cursor_record()?;

        if !self.comparison.is_enabled() {
            tracing::info!(record = record.patient_id, "opening record");
            return Some(DashboardAction::Open(record));
        }

        match self.comparison.toggle(record.id) {
            Ok(Toggle::Added) => {
                tracing::info!(record = record.patient_id, "selected for comparison");
                None
            }
            Ok(Toggle::Removed) => {
                tracing::info!(record = record.patient_id, "removed from comparison");
                None
            }
            Err(e @ SelectionError::LimitReached { .. }) => {
                Some(DashboardAction::Notice(e.to_string()))
            }
            Err(e) => {
                tracing::debug!(error = %e, "row click ignored");
                None
            }
        }
    }

    fn compare_selected(&mut self) {
        match self.comparison.compare() {
            Ok(()) => tracing::info!(
                selected = self.comparison.selected().len(),
                "comparison shown"
            ),
            Err(e) => tracing::debug!(error = %e, "compare unavailable"),
        }
    }

    fn fixed_rows(&self) -> u16 {
        let mut rows =
            KPI_HEIGHT + 1 + CONTROLS_HEIGHT + 1 + table_height(self.rows.len());
        if self.comparison.phase() == ComparePhase::Comparing {
            rows += 1 + compare::compare_height();
        }
        rows
    }

    fn controls(&self) -> Line<'static> {
        let key = |k: &str| {
            Span::styled(
                format!("[{k}] "),
                Style::default().fg(theme::FOCUS).add_modifier(Modifier::BOLD),
            )
        };
        let label = |text: String, enabled: bool| {
            Span::styled(
                text,
                if enabled {
                    Style::default().fg(theme::TITLE)
                } else {
                    Style::default().fg(theme::MUTED).add_modifier(Modifier::DIM)
                },
            )
        };
        let gap = || Span::raw("    ");

        let phase = self.comparison.phase();
        let mut spans = Vec::new();
        if phase == ComparePhase::Inactive {
            spans.extend([
                key("c"),
                label("Enable Comparative Review Mode".into(), true),
                gap(),
            ]);
        } else {
            spans.extend([
                key("c"),
                label("Exit Comparative Review Mode".into(), true),
                gap(),
                key("v"),
                label("Compare Selected".into(), phase == ComparePhase::Ready),
                gap(),
                key("x"),
                label(
                    "Clear Selection".into(),
                    !self.comparison.selected().is_empty(),
                ),
                gap(),
                Span::styled(
                    format!("{}/{MAX_COMPARE} selected", self.comparison.selected().len()),
                    Style::default().fg(theme::ACCENT),
                ),
                gap(),
            ]);
        }
        spans.extend([
            key("s/r"),
            label(format!("Sort: {}", self.order.label()), true),
            gap(),
            key("f"),
            label(format!("Filter: {}", self.filter.label()), true),
        ]);
        Line::from(spans)
    }
}

impl Section for Dashboard {
    fn id(&self) -> &'static str {
        "dashboard"
    }

    fn height(&self, width: u16) -> u16 {
        framed_height(&Text::from(INTRO), width, self.fixed_rows())
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        let revealed = self.reveal.is_revealed();
        let title = if self.focused {
            "Registry dashboard (interactive, Esc to leave)"
        } else {
            "Registry dashboard (press d to interact)"
        };
        let body = render_framed(title, Text::from(INTRO), revealed, area, buf);

        let comparing = self.comparison.phase() == ComparePhase::Comparing;
        let [kpi_area, _, controls_area, _, table_area, _, compare_area] = Layout::vertical([
            Constraint::Length(KPI_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CONTROLS_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(table_height(self.rows.len())),
            Constraint::Length(u16::from(comparing)),
            Constraint::Length(if comparing { compare::compare_height() } else { 0 }),
        ])
        .areas(body);

        self.kpis.render(kpi_area, buf);

        let controls = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::BORDER_DIM))
            .style(Style::default().bg(theme::RAISED));
        Paragraph::new(self.controls())
            .block(controls)
            .render(controls_area, buf);

        RecordsTable {
            rows: &self.rows,
            comparison: &self.comparison,
            today: self.today,
            focused: self.focused,
        }
        .render(table_area, buf, &mut self.state.clone());

        if comparing {
            compare::render(&self.compared_records(), self.today, compare_area, buf);
        }
    }
}

impl Component for Dashboard {
    type Action = DashboardAction;

    fn handle_input(&mut self, key: KeyEvent) -> Result<Option<DashboardAction>> {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Enter | KeyCode::Char(' ') => return Ok(self.click_row()),
            KeyCode::Char('c') | KeyCode::Char('C') => {
                self.comparison.toggle_mode();
                tracing::info!(
                    enabled = self.comparison.is_enabled(),
                    "comparative review mode toggled"
                );
            }
            KeyCode::Char('v') | KeyCode::Char('V') => self.compare_selected(),
            KeyCode::Char('x') | KeyCode::Char('X') => self.comparison.clear(),
            KeyCode::Char('s') => {
                self.order.key = self.order.key.next();
                self.refresh_rows();
            }
            KeyCode::Char('r') => {
                self.order.descending = !self.order.descending;
                self.refresh_rows();
            }
            KeyCode::Char('f') => {
                self.filter = self.filter.next();
                self.refresh_rows();
            }
            KeyCode::Esc => return Ok(Some(DashboardAction::Leave)),
            _ => {}
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::sections::test_support;
    use crossterm::event::KeyModifiers;
    use time::macros::date;

    fn press(dashboard: &mut Dashboard, code: KeyCode) -> Option<DashboardAction> {
        dashboard
            .handle_input(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap()
    }

    fn dashboard() -> Dashboard {
        Dashboard::new(&RevealRegistry::new(0.15), date!(2025 - 06 - 15))
    }

    #[test]
    fn row_click_opens_record_when_not_comparing() {
        let mut dashboard = dashboard();
        press(&mut dashboard, KeyCode::Down);
        let action = press(&mut dashboard, KeyCode::Enter);
        assert_eq!(action, Some(DashboardAction::Open(dashboard.rows()[1])));
    }

    #[test]
    fn row_clicks_select_in_comparison_mode() {
        let mut dashboard = dashboard();
        press(&mut dashboard, KeyCode::Char('c'));
        assert_eq!(dashboard.comparison().phase(), ComparePhase::Collecting);

        assert_eq!(press(&mut dashboard, KeyCode::Enter), None);
        press(&mut dashboard, KeyCode::Down);
        assert_eq!(press(&mut dashboard, KeyCode::Enter), None);
        assert_eq!(dashboard.comparison().phase(), ComparePhase::Ready);

        press(&mut dashboard, KeyCode::Char('v'));
        let compared: Vec<_> = dashboard.compared_records().iter().map(|r| r.id).collect();
        let expected: Vec<_> = dashboard.rows()[..2].iter().map(|r| r.id).collect();
        assert_eq!(compared, expected);
    }

    #[test]
    fn fourth_selection_raises_notice() {
        let mut dashboard = dashboard();
        press(&mut dashboard, KeyCode::Char('c'));
        for _ in 0..3 {
            press(&mut dashboard, KeyCode::Enter);
            press(&mut dashboard, KeyCode::Down);
        }

        match press(&mut dashboard, KeyCode::Enter) {
            Some(DashboardAction::Notice(message)) => assert!(message.contains("maximum of 3")),
            other => panic!("expected a notice, got {other:?}"),
        }
        assert_eq!(dashboard.comparison().selected().len(), 3);
    }

    #[test]
    fn compare_is_ignored_until_ready() {
        let mut dashboard = dashboard();
        press(&mut dashboard, KeyCode::Char('c'));
        press(&mut dashboard, KeyCode::Enter);
        press(&mut dashboard, KeyCode::Char('v'));
        assert_eq!(dashboard.comparison().phase(), ComparePhase::Collecting);
        assert!(dashboard.compared_records().is_empty());
    }

    #[test]
    fn filter_clamps_cursor() {
        let mut dashboard = dashboard();
        for _ in 0..9 {
            press(&mut dashboard, KeyCode::Down);
        }
        press(&mut dashboard, KeyCode::Char('f'));
        let action = press(&mut dashboard, KeyCode::Enter);
        assert!(matches!(action, Some(DashboardAction::Open(_))));
        assert!(dashboard.rows().len() < 10);
    }

    #[test]
    fn cursor_wraps_around() {
        let mut dashboard = dashboard();
        press(&mut dashboard, KeyCode::Up);
        let action = press(&mut dashboard, KeyCode::Enter);
        assert_eq!(action, Some(DashboardAction::Open(dashboard.rows()[9])));
    }

    #[test]
    fn escape_leaves() {
        let mut dashboard = dashboard();
        assert_eq!(press(&mut dashboard, KeyCode::Esc), Some(DashboardAction::Leave));
    }

    #[test]
    fn comparison_grows_section_height() {
        let mut dashboard = dashboard();
        let before = dashboard.height(120);
        press(&mut dashboard, KeyCode::Char('c'));
        press(&mut dashboard, KeyCode::Enter);
        press(&mut dashboard, KeyCode::Down);
        press(&mut dashboard, KeyCode::Enter);
        press(&mut dashboard, KeyCode::Char('v'));
        assert_eq!(dashboard.height(120), before + 1 + compare::compare_height());
    }

    #[test]
    fn renders_comparison_columns() {
        let mut dashboard = dashboard();
        press(&mut dashboard, KeyCode::Char('c'));
        press(&mut dashboard, KeyCode::Enter);
        press(&mut dashboard, KeyCode::Down);
        press(&mut dashboard, KeyCode::Enter);
        press(&mut dashboard, KeyCode::Char('v'));

        let area = Rect::new(0, 0, 140, dashboard.height(140));
        let mut buf = Buffer::empty(area);
        dashboard.render(area, &mut buf);

        assert!(test_support::contains(&buf, "Comparative review: 2 records"));
        assert!(test_support::contains(&buf, "Time since surgery"));
        assert!(test_support::contains(&buf, "2/3 selected"));
    }
}

//! Record detail panel.
//!
//! Opening the panel freezes page scrolling and registers a global Escape
//! listener. Both are held by the open record's slot, so closing, replacing
//! or dropping the panel releases them.

use crate::components::badge::{badge, BadgeKind};
use crate::components::{theme, Component};
use crate::host::{Host, KeyListener, ScrollLockGuard};
use crate::models::ImplantRecord;
use crate::utils::time_since;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};
use time::Date;

const LABEL_WIDTH: usize = 22;

struct Showing {
    record: &'static ImplantRecord,
    scroll: u16,
    _scroll_lock: ScrollLockGuard,
    _escape: KeyListener,
}

pub struct DetailPanel {
    host: Host,
    today: Date,
    showing: Option<Showing>,
}

impl DetailPanel {
    pub fn new(host: Host, today: Date) -> Self {
        Self {
            host,
            today,
            showing: None,
        }
    }

    pub fn open(&mut self, record: &'static ImplantRecord) {
        // release the previous record's lock before taking a new one
        self.showing = None;
        self.showing = Some(Showing {
            record,
            scroll: 0,
            _scroll_lock: self.host.lock_scroll(),
            _escape: self.host.listen(KeyCode::Esc),
        });
        tracing::debug!(record = record.patient_id, "detail panel opened");
    }

    pub fn close(&mut self) {
        if let Some(showing) = self.showing.take() {
            tracing::debug!(record = showing.record.patient_id, "detail panel closed");
        }
    }

    pub fn current(&self) -> Option<&'static ImplantRecord> {
        self.showing.as_ref().map(|s| s.record)
    }

    pub fn is_open(&self) -> bool {
        self.showing.is_some()
    }

    /// Page-wide key hook. Returns true when the key closed the panel.
    pub fn on_global_key(&mut self, code: KeyCode) -> bool {
        if code == KeyCode::Esc && self.is_open() && self.host.is_listening(KeyCode::Esc) {
            self.close();
            return true;
        }
        false
    }

    /// Where the panel sits inside `area`: a column on the right.
    pub fn panel_area(area: Rect) -> Rect {
        let width = (area.width * 3 / 5).max(64).min(area.width);
        Rect {
            x: area.right() - width,
            width,
            ..area
        }
    }

    /// A click on the page. Clicks on the backdrop close the panel.
    pub fn handle_click(&mut self, column: u16, row: u16, area: Rect) -> bool {
        if !self.is_open() || !area.contains(Position::new(column, row)) {
            return false;
        }
        if Self::panel_area(area).contains(Position::new(column, row)) {
            return false;
        }
        self.close();
        true
    }

    fn lines(&self, record: &ImplantRecord) -> Vec<Line<'static>> {
        let field = |label: &str, value: String| {
            Line::from(vec![
                Span::styled(
                    format!("{label:<LABEL_WIDTH$}"),
                    Style::default().fg(theme::MUTED),
                ),
                Span::styled(value, Style::default().fg(theme::TEXT)),
            ])
        };
        let badge_field = |label: &str, kind: BadgeKind| {
            Line::from(vec![
                Span::styled(
                    format!("{label:<LABEL_WIDTH$}"),
                    Style::default().fg(theme::MUTED),
                ),
                badge(kind),
            ])
        };
        let heading = |title: &str| {
            Line::from(Span::styled(
                title.to_string(),
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ))
        };

        vec![
            heading("Patient"),
            field("Patient ID", record.patient_id.to_string()),
            field("Age / Sex", format!("{} / {}", record.age, record.sex)),
            field("Diagnosis", record.diagnosis.to_string()),
            field("Comorbidities", record.comorbidities.to_string()),
            field("Institution", record.institution.to_string()),
            field("Surgeon", record.surgeon.to_string()),
            Line::default(),
            heading("Device"),
            field("Category", record.implant_category.to_string()),
            field("Manufacturer", record.manufacturer.to_string()),
            field("Model", record.model.to_string()),
            field("Lot number", record.lot_number.to_string()),
            field("Material", record.material.to_string()),
            field("Fixation", record.fixation.to_string()),
            field("Site", format!("{} ({})", record.site, record.laterality)),
            Line::default(),
            heading("Lifecycle"),
            field("Surgery date", record.surgery_date.to_string()),
            field("Time since surgery", time_since(record.surgery_date, self.today)),
            field("Revision history", record.revision_history.to_string()),
            field("Complications logged", record.complications_logged.to_string()),
            field("Last review", record.last_review.to_string()),
            field("Next review", record.next_review.to_string()),
            badge_field("Follow-up", BadgeKind::FollowUp(record.follow_up)),
            badge_field("Alert", BadgeKind::Alert(record.alert)),
            badge_field("Risk", BadgeKind::Risk(record.risk)),
        ]
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let Some(showing) = &self.showing else {
            return;
        };

        buf.set_style(
            area,
            Style::default().fg(theme::MUTED).add_modifier(Modifier::DIM),
        );

        let panel = Self::panel_area(area);
        Clear.render(panel, buf);

        let block = Block::default()
            .title(format!(" Record {} ", showing.record.patient_id))
            .title_style(
                Style::default()
                    .fg(theme::TITLE)
                    .add_modifier(Modifier::BOLD),
            )
            .title_bottom(Line::from(" Esc / Enter / x close   ↑↓ scroll ").right_aligned())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::DIALOG));

        Paragraph::new(self.lines(showing.record))
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((showing.scroll, 0))
            .render(panel, buf);
    }
}

impl Component for DetailPanel {
    /// `Some(())` once the panel closed.
    type Action = ();

    /// Keys while the panel is open. Everything not handled here is
    /// swallowed so the page underneath stays put.
    fn handle_input(&mut self, key: KeyEvent) -> Result<Option<()>> {
        let Some(showing) = self.showing.as_mut() else {
            return Ok(None);
        };
        match key.code {
            KeyCode::Enter | KeyCode::Char('x') => {
                self.close();
                return Ok(Some(()));
            }
            KeyCode::Down | KeyCode::Char('j') => {
                showing.scroll = showing.scroll.saturating_add(1);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                showing.scroll = showing.scroll.saturating_sub(1);
            }
            _ => {}
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::sections::test_support;
    use crate::registry;
    use crossterm::event::KeyModifiers;
    use time::macros::date;

    fn panel(host: &Host) -> DetailPanel {
        DetailPanel::new(host.clone(), date!(2025 - 06 - 15))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn resources_held_only_while_open() {
        let host = Host::new();
        let mut panel = panel(&host);
        assert!(!host.is_scroll_locked());
        assert!(!host.is_listening(KeyCode::Esc));

        panel.open(registry::find(4).unwrap());
        assert!(host.is_scroll_locked());
        assert!(host.is_listening(KeyCode::Esc));

        panel.close();
        assert!(!host.is_scroll_locked());
        assert!(!host.is_listening(KeyCode::Esc));
    }

    #[test]
    fn reopening_does_not_stack_listeners() {
        let host = Host::new();
        let mut panel = panel(&host);
        panel.open(registry::find(4).unwrap());
        panel.open(registry::find(7).unwrap());
        assert_eq!(host.listener_count(), 1);
        assert_eq!(panel.current().map(|r| r.id), Some(7));
    }

    #[test]
    fn dropping_open_panel_releases_resources() {
        let host = Host::new();
        {
            let mut panel = panel(&host);
            panel.open(registry::find(1).unwrap());
            assert!(host.is_scroll_locked());
        }
        assert!(!host.is_scroll_locked());
        assert_eq!(host.listener_count(), 0);
    }

    #[test]
    fn escape_closes_through_global_listener() {
        let host = Host::new();
        let mut panel = panel(&host);
        assert!(!panel.on_global_key(KeyCode::Esc));

        panel.open(registry::find(4).unwrap());
        assert!(!panel.on_global_key(KeyCode::Char('q')));
        assert!(panel.on_global_key(KeyCode::Esc));
        assert!(!panel.is_open());
        assert!(!host.is_listening(KeyCode::Esc));
    }

    #[test]
    fn close_keys_and_swallowed_keys() {
        let host = Host::new();
        let mut panel = panel(&host);
        panel.open(registry::find(4).unwrap());
        assert_eq!(panel.handle_input(key(KeyCode::Char('c'))).unwrap(), None);
        assert!(panel.is_open());
        assert_eq!(panel.handle_input(key(KeyCode::Enter)).unwrap(), Some(()));
        assert!(!panel.is_open());

        panel.open(registry::find(4).unwrap());
        assert_eq!(panel.handle_input(key(KeyCode::Char('x'))).unwrap(), Some(()));
        assert!(!host.is_scroll_locked());
    }

    #[test]
    fn backdrop_click_closes() {
        let host = Host::new();
        let mut panel = panel(&host);
        let area = Rect::new(0, 3, 120, 40);
        panel.open(registry::find(4).unwrap());

        let inside = DetailPanel::panel_area(area);
        assert!(!panel.handle_click(inside.x + 2, inside.y + 2, area));
        assert!(panel.is_open());

        assert!(panel.handle_click(1, 10, area));
        assert!(!panel.is_open());
    }

    #[test]
    fn renders_grouped_fields() {
        let host = Host::new();
        let mut panel = panel(&host);
        panel.open(registry::find(1).unwrap());

        let area = Rect::new(0, 0, 120, 40);
        let mut buf = Buffer::empty(area);
        panel.render(area, &mut buf);

        assert!(test_support::contains(&buf, "Record THD-2019-0142"));
        assert!(test_support::contains(&buf, "Device"));
        assert!(test_support::contains(&buf, "Lifecycle"));
        assert!(test_support::contains(&buf, "6.3 years"));
    }
}

//! Blocking notice dialog.
//!
//! While a notice is up it takes every key and click; nothing underneath
//! reacts until it is dismissed.

use crate::components::{theme, Component};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

const DIALOG_WIDTH: u16 = 56;
const DIALOG_HEIGHT: u16 = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    message: String,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Centered dialog rectangle within `area`.
    pub fn dialog_area(area: Rect) -> Rect {
        let width = DIALOG_WIDTH.min(area.width);
        let height = DIALOG_HEIGHT.min(area.height);
        Rect::new(
            area.x + (area.width.saturating_sub(width)) / 2,
            area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        )
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let dialog_area = Self::dialog_area(area);
        Clear.render(dialog_area, buf);

        let dialog_block = Block::default()
            .title(" Notice ")
            .title_style(
                Style::default()
                    .fg(theme::TITLE)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::WARN))
            .style(Style::default().bg(theme::DIALOG));
        let inner_area = dialog_block.inner(dialog_area);
        dialog_block.render(dialog_area, buf);

        let [message_area, button_area] = Layout::vertical([
            Constraint::Min(2),
            Constraint::Length(1),
        ])
        .margin(1)
        .areas(inner_area);

        Paragraph::new(self.message.as_str())
            .style(Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(message_area, buf);

        Paragraph::new("► OK ◄")
            .style(Style::default().fg(theme::GOOD).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .render(button_area, buf);
    }
}

impl Component for Notice {
    /// `Some(())` once dismissed.
    type Action = ();

    fn handle_input(&mut self, key: KeyEvent) -> Result<Option<()>> {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Ok(Some(())),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::sections::test_support;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn dismissed_by_confirm_keys_only() {
        let mut notice = Notice::new("hello");
        assert_eq!(notice.handle_input(key(KeyCode::Char('c'))).unwrap(), None);
        assert_eq!(notice.handle_input(key(KeyCode::Down)).unwrap(), None);
        assert_eq!(notice.handle_input(key(KeyCode::Enter)).unwrap(), Some(()));
        assert_eq!(notice.handle_input(key(KeyCode::Esc)).unwrap(), Some(()));
        assert_eq!(notice.handle_input(key(KeyCode::Char(' '))).unwrap(), Some(()));
    }

    #[test]
    fn renders_centered_message() {
        let area = Rect::new(0, 0, 100, 30);
        let mut buf = Buffer::empty(area);
        let notice = Notice::new("You can compare a maximum of 3 records at a time.");
        notice.render(area, &mut buf);

        assert!(test_support::contains(&buf, "maximum of 3 records"));
        assert!(test_support::contains(&buf, "OK"));
        let dialog = Notice::dialog_area(area);
        assert_eq!(dialog, Rect::new(22, 11, 56, 8));
    }

    #[test]
    fn dialog_fits_small_terminals() {
        let dialog = Notice::dialog_area(Rect::new(0, 0, 30, 5));
        assert_eq!(dialog.width, 30);
        assert_eq!(dialog.height, 5);
    }
}

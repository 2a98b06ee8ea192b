//! Sticky navigation bar.

use crate::components::theme;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Navigation entries: label and the section they scroll to.
pub const NAV_ITEMS: [(&str, &str); 8] = [
    ("Home", "home"),
    ("Problem", "problem"),
    ("Platform", "platform"),
    ("Dashboard", "dashboard"),
    ("Insights", "insights"),
    ("Governance", "governance"),
    ("Vision", "vision"),
    ("Team", "team"),
];

pub fn section_ids() -> Vec<&'static str> {
    NAV_ITEMS.iter().map(|(_, id)| *id).collect()
}

pub fn label_for(id: &str) -> Option<&'static str> {
    NAV_ITEMS
        .iter()
        .find(|(_, target)| *target == id)
        .map(|(label, _)| *label)
}

/// Section id bound to a digit key, `'1'` being the first entry.
pub fn section_for_digit(digit: char) -> Option<&'static str> {
    let index = digit.to_digit(10)?.checked_sub(1)? as usize;
    NAV_ITEMS.get(index).map(|(_, id)| *id)
}

/// Columns taken by the brand badge and the gap after it.
const BRAND_WIDTH: u16 = 10;

fn entry_text(index: usize, label: &str) -> String {
    format!(" {} {} ", index + 1, label)
}

/// Section under `column` of the nav bar, relative to its left edge.
pub fn entry_at(column: u16) -> Option<&'static str> {
    let mut left = BRAND_WIDTH;
    for (index, (label, id)) in NAV_ITEMS.iter().enumerate() {
        let width = entry_text(index, label).len() as u16;
        if (left..left + width).contains(&column) {
            return Some(id);
        }
        left += width;
    }
    None
}

pub fn render(area: Rect, buf: &mut Buffer, active: Option<&str>) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme::BORDER))
        .style(Style::default().bg(theme::BACKGROUND));
    let inner = block.inner(area);
    block.render(area, buf);

    let mut spans = vec![
        Span::styled(
            " THODAR ",
            Style::default()
                .fg(theme::BACKGROUND)
                .bg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];

    for (index, (label, id)) in NAV_ITEMS.iter().enumerate() {
        let is_active = active == Some(*id);
        let style = if is_active {
            Style::default()
                .fg(theme::FOCUS)
                .bg(theme::SELECTED)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme::TEXT)
        };
        spans.push(Span::styled(entry_text(index, label), style));
    }

    Paragraph::new(Line::from(spans))
        .style(Style::default().bg(theme::BACKGROUND))
        .render(Rect { height: 1, ..inner }, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_nav_order() {
        assert_eq!(section_ids().first(), Some(&"home"));
        assert_eq!(section_ids().len(), NAV_ITEMS.len());
        assert_eq!(label_for("governance"), Some("Governance"));
        assert_eq!(label_for("footer"), None);
    }

    #[test]
    fn digits_map_to_sections() {
        assert_eq!(section_for_digit('1'), Some("home"));
        assert_eq!(section_for_digit('4'), Some("dashboard"));
        assert_eq!(section_for_digit('9'), None);
        assert_eq!(section_for_digit('0'), None);
        assert_eq!(section_for_digit('x'), None);
    }

    #[test]
    fn click_columns_map_to_entries() {
        assert_eq!(entry_at(0), None);
        assert_eq!(entry_at(BRAND_WIDTH), Some("home"));
        // " 1 Home " is eight columns wide
        assert_eq!(entry_at(BRAND_WIDTH + 8), Some("problem"));
        assert_eq!(entry_at(500), None);
    }

    #[test]
    fn active_entry_is_highlighted() {
        let area = Rect::new(0, 0, 140, 2);
        let mut buf = Buffer::empty(area);
        render(area, &mut buf, Some("dashboard"));

        let line: String = (0..area.width)
            .filter_map(|x| buf.cell((x, 0)).map(|c| c.symbol().to_string()))
            .collect();
        let start = line.find("Dashboard").expect("dashboard label rendered") as u16;
        let cell = buf.cell((start, 0)).unwrap();
        assert_eq!(cell.fg, theme::FOCUS);

        let home = line.find("Home").unwrap() as u16;
        assert_eq!(buf.cell((home, 0)).unwrap().fg, theme::TEXT);
    }
}

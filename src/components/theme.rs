//! Shared colours and block builders.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
};

pub const BACKGROUND: Color = Color::Rgb(16, 16, 28);
pub const PANEL: Color = Color::Rgb(22, 22, 35);
pub const RAISED: Color = Color::Rgb(26, 26, 36);
pub const DIALOG: Color = Color::Rgb(30, 30, 46);
pub const BORDER: Color = Color::Rgb(75, 75, 120);
pub const BORDER_DIM: Color = Color::Rgb(45, 45, 70);
pub const TITLE: Color = Color::Rgb(230, 230, 250);
pub const TEXT: Color = Color::Rgb(200, 200, 220);
pub const MUTED: Color = Color::Rgb(140, 140, 170);
pub const ACCENT: Color = Color::Rgb(129, 199, 245);
pub const FOCUS: Color = Color::Rgb(250, 250, 110);
pub const GOOD: Color = Color::Rgb(140, 219, 140);
pub const WARN: Color = Color::Rgb(245, 190, 100);
pub const BAD: Color = Color::Rgb(255, 100, 100);
pub const SELECTED: Color = Color::Rgb(40, 40, 65);

/// Rounded panel used for every page section. Unrevealed sections are drawn
/// with dim borders and text until they first scroll into view.
pub fn section_block(title: &str, revealed: bool) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .title_style(
            Style::default()
                .fg(if revealed { TITLE } else { MUTED })
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if revealed { BORDER } else { BORDER_DIM }))
        .style(Style::default().bg(PANEL))
        .padding(Padding::horizontal(2))
}

/// Smaller bordered card inside a section.
pub fn card_block(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .title_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER))
        .style(Style::default().bg(RAISED))
}

/// Text style for body copy, dimmed until revealed.
pub fn body_style(revealed: bool) -> Style {
    if revealed {
        Style::default().fg(TEXT)
    } else {
        Style::default().fg(MUTED).add_modifier(Modifier::DIM)
    }
}

/// Rows a wrapped paragraph of `text` takes at `width` columns.
pub fn wrapped_height(text: &Text<'_>, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let lines = Paragraph::new(text.clone())
        .wrap(Wrap { trim: true })
        .line_count(width);
    u16::try_from(lines).unwrap_or(u16::MAX)
}

/// Inner width of a [`section_block`] spanning `width` columns.
pub fn section_inner_width(width: u16) -> u16 {
    width.saturating_sub(6)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_height_counts_wrapped_lines() {
        let text = Text::from("one two three four five six");
        assert_eq!(wrapped_height(&text, 100), 1);
        assert!(wrapped_height(&text, 10) >= 3);
        assert_eq!(wrapped_height(&text, 0), 0);
    }

    #[test]
    fn inner_width_accounts_for_borders_and_padding() {
        let block = section_block("Title", true);
        let inner = block.inner(Rect::new(0, 0, 40, 10));
        assert_eq!(inner.width, section_inner_width(40));
    }
}

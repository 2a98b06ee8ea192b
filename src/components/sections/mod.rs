//! Static narrative sections of the page.
//!
//! Everything here renders constant copy. The only state a section carries is
//! its reveal handle, which dims the section until it first scrolls into view.

use crate::components::theme::{self, section_inner_width, wrapped_height};
use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

pub mod footer;
pub mod governance;
pub mod hero;
pub mod insights;
pub mod platform;
pub mod problem;
pub mod team;
pub mod vision;

pub use footer::Footer;
pub use governance::Governance;
pub use hero::Hero;
pub use insights::Insights;
pub use platform::Platform;
pub use problem::Problem;
pub use team::Team;
pub use vision::Vision;

/// Rows of chrome around a section body: borders plus a blank row above and
/// below the content.
const FRAME_ROWS: u16 = 4;

/// Height of a section made of an intro paragraph followed by `fixed` rows.
pub(crate) fn framed_height(intro: &Text<'_>, width: u16, fixed: u16) -> u16 {
    let intro_rows = wrapped_height(intro, section_inner_width(width));
    FRAME_ROWS + intro_rows + if fixed > 0 { fixed + 1 } else { 0 }
}

/// Renders the section frame and intro, returning the area left for `fixed`
/// rows of section-specific content.
pub(crate) fn render_framed(
    title: &str,
    intro: Text<'_>,
    revealed: bool,
    area: Rect,
    buf: &mut Buffer,
) -> Rect {
    let block = theme::section_block(title, revealed);
    let inner = block.inner(area);
    block.render(area, buf);

    let intro_rows = wrapped_height(&intro, inner.width);
    let [_, intro_area, _, rest] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(intro_rows),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(inner);

    Paragraph::new(intro)
        .style(theme::body_style(revealed))
        .wrap(Wrap { trim: true })
        .render(intro_area, buf);

    Rect {
        height: rest.height.saturating_sub(1),
        ..rest
    }
}

/// A titled card with a wrapped description.
pub(crate) fn render_card(title: &str, body: &str, revealed: bool, area: Rect, buf: &mut Buffer) {
    let block = theme::card_block(title);
    let inner = block.inner(area);
    block.render(area, buf);
    Paragraph::new(body)
        .style(theme::body_style(revealed))
        .wrap(Wrap { trim: true })
        .render(inner, buf);
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::buffer::Buffer;

    /// Concatenates every row of `buf` into one string per row.
    pub fn rows(buf: &Buffer) -> Vec<String> {
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()))
                    .collect()
            })
            .collect()
    }

    pub fn contains(buf: &Buffer, needle: &str) -> bool {
        rows(buf).iter().any(|row| row.contains(needle))
    }
}

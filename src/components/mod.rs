use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{buffer::Buffer, layout::Rect};

pub mod badge;
pub mod dashboard;
pub mod detail;
pub mod nav;
pub mod notice;
pub mod sections;
pub mod theme;

/// A block of the scrolling page.
pub trait Section {
    /// Identifier used for navigation and intersection tracking.
    fn id(&self) -> &'static str;
    /// Rows the section needs at `width` columns.
    fn height(&self, width: u16) -> u16;
    fn render(&self, area: Rect, buf: &mut Buffer);
}

/// Something that takes key input while it has focus.
pub trait Component {
    type Action;

    fn handle_input(&mut self, event: KeyEvent) -> Result<Option<Self::Action>>;
}

//! Page state and the main loop.
//!
//! The whole site is one tall page drawn into an off-screen buffer. Each
//! frame copies the slice under the viewport between the sticky nav bar and
//! the help line, then draws any overlay (detail panel, notice) on top.

use crate::components::dashboard::{Dashboard, DashboardAction};
use crate::components::detail::DetailPanel;
use crate::components::notice::Notice;
use crate::components::sections::{
    Footer, Governance, Hero, Insights, Platform, Problem, Team, Vision,
};
use crate::components::{nav, theme, Component, Section};
use crate::config::Config;
use crate::host::Host;
use crate::observer::{Extent, RevealRegistry, SectionTracker};
use crate::tui::{self, Frame, Tui};
use crate::utils;
use anyhow::Result;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{prelude::*, widgets::Paragraph};
use time::Date;

/// Entries row plus the rule beneath it.
const NAV_HEIGHT: u16 = 2;
const HELP_HEIGHT: u16 = 1;

/// Where key input goes when no overlay is up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Keys scroll and navigate the page.
    Page,
    /// Keys drive the records table and comparison controls.
    Dashboard,
}

/// The page root: every section, the overlays and the scroll position.
pub struct App {
    /// Settings loaded at start-up.
    config: Config,
    /// Flag indicating if the application should quit.
    pub should_quit: bool,
    /// Page-wide scroll lock and key listeners.
    host: Host,
    /// One-shot reveal observation shared by all sections.
    reveals: RevealRegistry,
    /// Active nav section, driven by the viewport.
    tracker: SectionTracker,

    hero: Hero,
    problem: Problem,
    platform: Platform,
    dashboard: Dashboard,
    insights: Insights,
    governance: Governance,
    vision: Vision,
    team: Team,
    footer: Footer,

    /// Where key input goes when no overlay is up.
    focus: Focus,
    /// Record detail overlay.
    detail: DetailPanel,
    /// Blocking notice, if one is showing.
    notice: Option<Notice>,
    /// First page row shown in the viewport.
    scroll: u16,
    /// Terminal area, updated on resize.
    size: Rect,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self::with_today(config, utils::today())
    }

    /// Builds the page with a fixed "today" for duration labels.
    pub fn with_today(config: Config, today: Date) -> Self {
        let host = Host::new();
        let reveals = RevealRegistry::new(config.reveal_threshold);
        let tracker = SectionTracker::new(&nav::section_ids(), config.section_threshold);

        Self {
            hero: Hero::new(&reveals),
            problem: Problem::new(&reveals),
            platform: Platform::new(&reveals),
            dashboard: Dashboard::new(&reveals, today),
            insights: Insights::new(&reveals),
            governance: Governance::new(&reveals),
            vision: Vision::new(&reveals),
            team: Team::new(&reveals),
            footer: Footer,

            detail: DetailPanel::new(host.clone(), today),
            config,
            should_quit: false,
            host,
            reveals,
            tracker,
            focus: Focus::Page,
            notice: None,
            scroll: 0,
            size: Rect::default(),
        }
    }

    /// Runs the main loop until the user quits.
    pub fn run(&mut self, tui: &mut Tui) -> Result<()> {
        self.resize(tui.size()?);
        tracing::info!(width = self.size.width, height = self.size.height, "page opened");

        while !self.should_quit {
            tui.draw(|frame| self.render_ui(frame))?;
            if let tui::Event::Input(event) = tui.next_event()? {
                self.handle_event(event)?;
            }
        }

        tracing::info!("page closed");
        Ok(())
    }

    /// Page blocks in display order.
    fn blocks(&self) -> [&dyn Section; 9] {
        [
            &self.hero,
            &self.problem,
            &self.platform,
            &self.dashboard,
            &self.insights,
            &self.governance,
            &self.vision,
            &self.team,
            &self.footer,
        ]
    }

    /// Offsets of every block at `width` columns.
    pub fn page_layout(&self, width: u16) -> Vec<(&'static str, Extent)> {
        let mut top = 0u16;
        self.blocks()
            .iter()
            .map(|block| {
                let height = block.height(width);
                let extent = Extent::new(top, height);
                top = top.saturating_add(height);
                (block.id(), extent)
            })
            .collect()
    }

    fn page_height(&self, width: u16) -> u16 {
        self.page_layout(width)
            .last()
            .map(|(_, extent)| extent.bottom())
            .unwrap_or(0)
    }

    fn body_area(&self) -> Rect {
        let [_, body, _] = Layout::vertical([
            Constraint::Length(NAV_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(HELP_HEIGHT),
        ])
        .areas(self.size);
        body
    }

    fn max_scroll(&self) -> u16 {
        let body = self.body_area();
        self.page_height(body.width).saturating_sub(body.height)
    }

    pub fn resize(&mut self, size: Rect) {
        self.size = size;
        self.scroll = self.scroll.min(self.max_scroll());
        self.refresh();
    }

    /// Feeds the current viewport to the section tracker and reveal observers.
    fn refresh(&mut self) {
        let body = self.body_area();
        let layout = self.page_layout(body.width);
        let viewport = Extent::new(self.scroll, body.height);
        self.tracker.update(viewport, &layout);
        let revealed = self.reveals.update(viewport, &layout);
        if revealed > 0 {
            tracing::debug!(revealed, pending = self.reveals.pending(), "sections revealed");
        }
    }

    fn scroll_to(&mut self, row: u16) {
        if self.host.is_scroll_locked() {
            return;
        }
        let row = row.min(self.max_scroll());
        if row != self.scroll {
            self.scroll = row;
            self.refresh();
        }
    }

    fn scroll_by(&mut self, delta: i32) {
        let row = (i32::from(self.scroll) + delta).clamp(0, i32::from(u16::MAX));
        self.scroll_to(row as u16);
    }

    /// Scrolls `id` to the top of the viewport and marks it active.
    fn jump_to(&mut self, id: &str) {
        if self.host.is_scroll_locked() {
            return;
        }
        let body = self.body_area();
        let Some((_, extent)) = self
            .page_layout(body.width)
            .into_iter()
            .find(|(block, _)| *block == id)
        else {
            return;
        };
        self.scroll_to(extent.top);
        self.tracker.activate(id);
        tracing::debug!(section = id, scroll = self.scroll, "navigation jump");
    }

    /// Next (or previous) nav section relative to the top of the viewport.
    ///
    /// Once the page has bottomed out, sections below the clamped scroll all
    /// share it, so stepping continues from the section last jumped to.
    fn adjacent_section(&self, forward: bool) -> Option<&'static str> {
        let sections: Vec<_> = self
            .page_layout(self.body_area().width)
            .into_iter()
            .filter(|(id, _)| nav::label_for(id).is_some())
            .collect();

        let mut anchor = self.scroll;
        if self.scroll == self.max_scroll() {
            let active_top = self
                .tracker
                .active()
                .and_then(|active| sections.iter().find(|(id, _)| *id == active))
                .map(|(_, extent)| extent.top);
            if let Some(top) = active_top.filter(|top| *top > self.scroll) {
                anchor = top;
            }
        }

        let found = if forward {
            sections.iter().find(|(_, extent)| extent.top > anchor)
        } else {
            sections.iter().rev().find(|(_, extent)| extent.top < anchor)
        };
        found.map(|(id, _)| *id)
    }

    fn set_focus(&mut self, focus: Focus) {
        if self.focus != focus {
            tracing::debug!(?focus, "focus changed");
        }
        self.focus = focus;
        self.dashboard.set_focused(focus == Focus::Dashboard);
    }

    fn focus_dashboard(&mut self) {
        self.jump_to("dashboard");
        self.set_focus(Focus::Dashboard);
    }

    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key)?,
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(width, height) => self.resize(Rect::new(0, 0, width, height)),
            _ => {}
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
        {
            self.should_quit = true;
            return Ok(());
        }

        if let Some(notice) = self.notice.as_mut() {
            if notice.handle_input(key)?.is_some() {
                self.notice = None;
            }
            return Ok(());
        }

        if self.detail.on_global_key(key.code) {
            return Ok(());
        }
        if self.detail.is_open() {
            self.detail.handle_input(key)?;
            return Ok(());
        }

        if self.focus == Focus::Dashboard
            && !matches!(key.code, KeyCode::PageUp | KeyCode::PageDown)
        {
            match self.dashboard.handle_input(key)? {
                Some(DashboardAction::Open(record)) => self.detail.open(record),
                Some(DashboardAction::Notice(message)) => {
                    tracing::info!(%message, "notice shown");
                    self.notice = Some(Notice::new(message));
                }
                Some(DashboardAction::Leave) => self.set_focus(Focus::Page),
                None => {}
            }
            // filtering and the comparison table change the dashboard's height
            self.scroll = self.scroll.min(self.max_scroll());
            self.refresh();
            return Ok(());
        }

        self.handle_page_key(key);
        Ok(())
    }

    fn handle_page_key(&mut self, key: KeyEvent) {
        let step = i32::from(self.config.scroll_step);
        let page = i32::from(self.body_area().height.saturating_sub(1).max(1));

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(step),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-step),
            KeyCode::PageDown => self.scroll_by(page),
            KeyCode::PageUp => self.scroll_by(-page),
            KeyCode::Home => self.scroll_to(0),
            KeyCode::End => self.scroll_to(u16::MAX),
            KeyCode::Tab => {
                if let Some(id) = self.adjacent_section(true) {
                    self.jump_to(id);
                }
            }
            KeyCode::BackTab => {
                if let Some(id) = self.adjacent_section(false) {
                    self.jump_to(id);
                }
            }
            KeyCode::Char('d') => self.focus_dashboard(),
            KeyCode::Enter if self.tracker.active() == Some("dashboard") => {
                self.focus_dashboard()
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(id) = nav::section_for_digit(c) {
                    self.jump_to(id);
                }
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let step = i32::from(self.config.scroll_step);
        match mouse.kind {
            MouseEventKind::ScrollDown if self.notice.is_none() => self.scroll_by(step),
            MouseEventKind::ScrollUp if self.notice.is_none() => self.scroll_by(-step),
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(mouse.column, mouse.row),
            _ => {}
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) {
        if self.notice.take().is_some() {
            return;
        }

        let body = self.body_area();
        if self.detail.is_open() {
            self.detail.handle_click(column, row, body);
            return;
        }

        if row < body.y {
            if let Some(id) = nav::entry_at(column) {
                self.jump_to(id);
            }
            return;
        }

        if body.contains(Position::new(column, row)) {
            let page_row = self.scroll.saturating_add(row - body.y);
            let on_dashboard = self
                .page_layout(body.width)
                .iter()
                .any(|(id, extent)| {
                    *id == "dashboard" && (extent.top..extent.bottom()).contains(&page_row)
                });
            let focus = if on_dashboard {
                Focus::Dashboard
            } else {
                Focus::Page
            };
            self.set_focus(focus);
        }
    }

    /// Draws every block into one buffer the height of the page.
    fn render_page(&self, width: u16) -> Buffer {
        let layout = self.page_layout(width);
        let height = layout.last().map(|(_, e)| e.bottom()).unwrap_or(0);
        let mut page = Buffer::empty(Rect::new(0, 0, width, height));
        page.set_style(page.area, Style::default().bg(theme::BACKGROUND));

        for (block, (_, extent)) in self.blocks().iter().zip(layout) {
            block.render(Rect::new(0, extent.top, width, extent.height), &mut page);
        }
        page
    }

    fn help_line(&self) -> Line<'static> {
        let text = if self.notice.is_some() {
            " Enter / Esc  dismiss".to_string()
        } else if let Some(record) = self.detail.current() {
            format!(
                " {}   Esc / Enter / x  close panel   ↑↓  scroll panel   click outside to close",
                record.patient_id
            )
        } else if self.focus == Focus::Dashboard {
            " ↑↓ row   Enter open/select   c review mode   v compare   x clear   s/r sort   f filter   Esc leave"
                .to_string()
        } else {
            " ↑↓ scroll   PgUp/PgDn page   Tab next section   1-8 jump   d dashboard   q quit"
                .to_string()
        };
        Line::from(Span::styled(text, Style::default().fg(theme::MUTED)))
    }

    pub fn render_ui(&self, frame: &mut Frame) {
        let area = frame.area();
        let [nav_area, body, help_area] = Layout::vertical([
            Constraint::Length(NAV_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(HELP_HEIGHT),
        ])
        .areas(area);
        let buf = frame.buffer_mut();

        buf.set_style(area, Style::default().bg(theme::BACKGROUND));
        nav::render(nav_area, buf, self.tracker.active());

        let page = self.render_page(body.width);
        for y in 0..body.height {
            for x in 0..body.width {
                let Some(source) = page.cell((x, self.scroll.saturating_add(y))) else {
                    continue;
                };
                if let Some(target) = buf.cell_mut((body.x + x, body.y + y)) {
                    *target = source.clone();
                }
            }
        }

        Paragraph::new(self.help_line())
            .style(Style::default().bg(theme::PANEL))
            .render(help_area, buf);

        self.detail.render(body, buf);
        if let Some(notice) = &self.notice {
            notice.render(area, buf);
        }
    }
}

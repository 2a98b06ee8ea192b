//! Status, alert and risk badges.
//!
//! Each badge kind maps through one closed lookup to its colours. Labels
//! that come in as free text (illustrative tables, or a future data source)
//! go through [`badge_for_label`], which falls back to the "Scheduled"
//! treatment instead of rendering blank.

use crate::components::theme;
use crate::models::{AlertLevel, FollowUpStatus, RiskLevel};
use ratatui::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeKind {
    FollowUp(FollowUpStatus),
    Alert(AlertLevel),
    Risk(RiskLevel),
}

/// Which family a free-text label belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeFamily {
    FollowUp,
    Alert,
    Risk,
}

/// Treatment for anything that doesn't map to a known variant.
pub const DEFAULT_KIND: BadgeKind = BadgeKind::FollowUp(FollowUpStatus::Scheduled);

impl BadgeKind {
    pub fn label(self) -> &'static str {
        match self {
            BadgeKind::FollowUp(s) => s.label(),
            BadgeKind::Alert(a) => a.label(),
            BadgeKind::Risk(r) => r.label(),
        }
    }

    pub fn style(self) -> Style {
        let (fg, bg) = match self {
            BadgeKind::FollowUp(FollowUpStatus::Scheduled) => (theme::ACCENT, Color::Rgb(28, 44, 66)),
            BadgeKind::FollowUp(FollowUpStatus::Overdue) => (theme::BAD, Color::Rgb(66, 26, 30)),
            BadgeKind::FollowUp(FollowUpStatus::Completed) => (theme::GOOD, Color::Rgb(26, 56, 34)),
            BadgeKind::Alert(AlertLevel::Stable) => (theme::GOOD, Color::Rgb(26, 56, 34)),
            BadgeKind::Alert(AlertLevel::Review) => (theme::WARN, Color::Rgb(64, 48, 22)),
            BadgeKind::Alert(AlertLevel::Attention) => (theme::BAD, Color::Rgb(66, 26, 30)),
            BadgeKind::Risk(RiskLevel::Low) => (theme::GOOD, theme::RAISED),
            BadgeKind::Risk(RiskLevel::Moderate) => (theme::WARN, theme::RAISED),
            BadgeKind::Risk(RiskLevel::High) => (theme::BAD, theme::RAISED),
        };
        Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
    }

    pub fn from_label(family: BadgeFamily, label: &str) -> Option<Self> {
        match family {
            BadgeFamily::FollowUp => FollowUpStatus::from_label(label).map(BadgeKind::FollowUp),
            BadgeFamily::Alert => AlertLevel::from_label(label).map(BadgeKind::Alert),
            BadgeFamily::Risk => RiskLevel::from_label(label).map(BadgeKind::Risk),
        }
    }
}

pub fn badge(kind: BadgeKind) -> Span<'static> {
    Span::styled(format!(" {} ", kind.label()), kind.style())
}

/// Renders a free-text label as a badge, keeping the text but using the
/// default treatment when the label is not a known variant.
pub fn badge_for_label(family: BadgeFamily, label: &str) -> Span<'static> {
    let kind = BadgeKind::from_label(family, label).unwrap_or(DEFAULT_KIND);
    let text = if label.trim().is_empty() {
        kind.label()
    } else {
        label.trim()
    };
    Span::styled(format!(" {text} "), kind.style())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_use_their_own_style() {
        let span = badge_for_label(BadgeFamily::FollowUp, "Overdue");
        assert_eq!(span.style, BadgeKind::FollowUp(FollowUpStatus::Overdue).style());
        assert_eq!(span.content, " Overdue ");
    }

    #[test]
    fn unknown_labels_fall_back_to_scheduled() {
        let span = badge_for_label(BadgeFamily::FollowUp, "Awaiting sign-off");
        assert_eq!(span.style, DEFAULT_KIND.style());
        assert_eq!(span.content, " Awaiting sign-off ");

        let span = badge_for_label(BadgeFamily::Risk, "Severe");
        assert_eq!(span.style, DEFAULT_KIND.style());
    }

    #[test]
    fn empty_label_still_renders_text() {
        let span = badge_for_label(BadgeFamily::Alert, "  ");
        assert_eq!(span.content, " Scheduled ");
    }

    #[test]
    fn every_variant_has_distinct_text() {
        for status in FollowUpStatus::ALL {
            assert_eq!(badge(BadgeKind::FollowUp(status)).content, format!(" {} ", status.label()));
        }
    }
}

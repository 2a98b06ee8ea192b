//! Data models for Thodar.
//!
//! One entity: an implant case as tracked by the registry. Everything in a
//! record is static text or small closed enumerations; records are defined
//! once in [`crate::registry`] and never mutated.

use std::fmt;

/// Patient sex as recorded at surgery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Female,
    Male,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Sex::Female => "F",
            Sex::Male => "M",
        })
    }
}

/// Side of the body the device was implanted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Laterality {
    Left,
    Right,
    Midline,
}

impl fmt::Display for Laterality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Laterality::Left => "Left",
            Laterality::Right => "Right",
            Laterality::Midline => "Midline",
        })
    }
}

/// Follow-up state of a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FollowUpStatus {
    Overdue,
    Scheduled,
    Completed,
}

impl FollowUpStatus {
    pub const ALL: [FollowUpStatus; 3] = [
        FollowUpStatus::Scheduled,
        FollowUpStatus::Overdue,
        FollowUpStatus::Completed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FollowUpStatus::Scheduled => "Scheduled",
            FollowUpStatus::Overdue => "Overdue",
            FollowUpStatus::Completed => "Completed",
        }
    }

    /// Parses a display label, case-insensitively. Unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.label().eq_ignore_ascii_case(label.trim()))
    }
}

/// Surveillance alert attached to a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AlertLevel {
    Stable,
    Review,
    Attention,
}

impl AlertLevel {
    pub const ALL: [AlertLevel; 3] = [AlertLevel::Stable, AlertLevel::Review, AlertLevel::Attention];

    pub fn label(self) -> &'static str {
        match self {
            AlertLevel::Stable => "stable",
            AlertLevel::Review => "review",
            AlertLevel::Attention => "attention",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|a| a.label().eq_ignore_ascii_case(label.trim()))
    }
}

/// Clinical risk grading of a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Moderate, RiskLevel::High];

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|r| r.label().eq_ignore_ascii_case(label.trim()))
    }
}

/// A simulated implant case with clinical, device and lifecycle attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct ImplantRecord {
    /// Unique key within the registry.
    pub id: u32,
    /// Display identifier shown to users.
    pub patient_id: &'static str,
    pub age: u8,
    pub sex: Sex,
    pub diagnosis: &'static str,
    pub comorbidities: &'static str,
    pub institution: &'static str,
    pub surgeon: &'static str,

    pub implant_category: &'static str,
    pub manufacturer: &'static str,
    pub model: &'static str,
    pub lot_number: &'static str,
    pub material: &'static str,
    pub fixation: &'static str,
    pub site: &'static str,
    pub laterality: Laterality,

    /// Calendar date, `YYYY-MM-DD`.
    pub surgery_date: &'static str,
    pub revision_history: &'static str,
    pub complications_logged: u8,
    pub last_review: &'static str,
    pub next_review: &'static str,
    pub follow_up: FollowUpStatus,
    pub alert: AlertLevel,
    pub risk: RiskLevel,
}

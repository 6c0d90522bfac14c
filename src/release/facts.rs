//! Extracted fact types and the release classification enum.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification of a release, driving the subject line and routing
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseType {
    Major,
    Minor,
    Bugfix,
    Documentation,
    #[default]
    Update,
}

impl ReleaseType {
    /// All recognized release types
    pub const ALL: &'static [ReleaseType] = &[
        ReleaseType::Major,
        ReleaseType::Minor,
        ReleaseType::Bugfix,
        ReleaseType::Documentation,
        ReleaseType::Update,
    ];

    /// Type name as used in the labeled output map and config files
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Bugfix => "bugfix",
            Self::Documentation => "documentation",
            Self::Update => "update",
        }
    }

    /// Emoji prefix for the email subject line
    pub const fn subject_emoji(&self) -> &'static str {
        match self {
            Self::Major => "🚀",
            Self::Minor => "📦",
            Self::Bugfix => "🐛",
            Self::Documentation => "📚",
            Self::Update => "📋",
        }
    }

    /// Human-readable label for the email subject line
    pub const fn subject_label(&self) -> &'static str {
        match self {
            Self::Major => "Major Release",
            Self::Minor => "Minor Update",
            Self::Bugfix => "Bug Fix",
            Self::Documentation => "Documentation Update",
            Self::Update => "Update",
        }
    }

    /// Get all type names as strings
    pub fn all_names() -> Vec<&'static str> {
        Self::ALL.iter().map(Self::name).collect()
    }
}

impl FromStr for ReleaseType {
    type Err = ReleaseTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .find(|t| t.name() == lower)
            .copied()
            .ok_or_else(|| ReleaseTypeError::Unknown(s.to_string()))
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Release classification error
#[derive(Debug, thiserror::Error)]
pub enum ReleaseTypeError {
    #[error("unknown release type: {0}. Supported: major, minor, bugfix, documentation, update")]
    Unknown(String),
}

/// Structured facts extracted from one release record.
///
/// Produced fresh per invocation and never mutated afterwards.
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct ExtractedFacts {
    /// Comma-joined list of validated customer email addresses
    pub customer_emails: String,
    /// Space-joined, de-duplicated list of validated ticket IDs
    pub jira_tickets: String,
    /// Release classification, string form of [`ReleaseType`]
    pub release_type: String,
    /// Business impact snippet, possibly empty
    pub business_impact: String,
    /// Technical changes snippet, possibly empty
    pub technical_changes: String,
    /// Whether the body advertises file attachments
    pub has_file_attachments: bool,
}

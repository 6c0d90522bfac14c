//! Fact extraction from raw release text.

use crate::config::Config;
use crate::log_debug;
use crate::release::facts::{ExtractedFacts, ReleaseType};
use crate::release::files;
use crate::release::record::RawRelease;
use crate::release::sections::{self, SectionFormat, SectionKind};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

// Labeled email fields, tried in priority order; the first match wins
static EMAIL_LABEL_RES: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        r"(?im)^[ \t]*Customer Email\(s\):[ \t]*(.+)$",
        r"(?im)^[ \t]*Customer Emails:[ \t]*(.+)$",
        r"(?im)^[ \t]*Emails:[ \t]*(.+)$",
        r"(?im)^[ \t]*To:[ \t]*(.+)$",
    ]
    .map(|pattern| Regex::new(pattern).expect("Should compile: EMAIL_LABEL_RES"))
});

// Labeled ticket fields, tried in priority order
static TICKET_LABEL_RES: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        r"(?im)^[ \t]*Jira Tickets:[ \t]*(.+)$",
        r"(?im)^[ \t]*Related Jira Tickets:[ \t]*(.+)$",
        r"(?im)^[ \t]*Related Work:[ \t]*(.+)$",
        r"(?im)^[ \t]*Tickets:[ \t]*(.+)$",
    ]
    .map(|pattern| Regex::new(pattern).expect("Should compile: TICKET_LABEL_RES"))
});

static EMAIL_FORMAT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("Should compile: EMAIL_FORMAT_RE")
});

// Classification keywords in precedence order; the first category with a
// matching keyword wins and later categories are not checked
const TYPE_KEYWORDS: &[(ReleaseType, &[&str])] = &[
    (ReleaseType::Major, &["major"]),
    (ReleaseType::Minor, &["minor"]),
    (ReleaseType::Bugfix, &["bug", "fix"]),
    (ReleaseType::Documentation, &["doc"]),
];

/// Syntactic email-format check (`local@domain.tld` shape).
pub(crate) fn is_valid_email(candidate: &str) -> bool {
    EMAIL_FORMAT_RE.is_match(candidate)
}

/// Maps `(title, body)` to [`ExtractedFacts`].
///
/// Never fails; absent or malformed data degrades to empty or default
/// values, and it is the validator's job to flag the resulting gaps.
pub struct ReleaseParser {
    ticket_token_re: Regex,
    ticket_scan_re: Regex,
}

impl ReleaseParser {
    pub fn new(config: &Config) -> Self {
        Self {
            ticket_token_re: config.ticket_token_regex(),
            ticket_scan_re: config.ticket_scan_regex(),
        }
    }

    /// Extracts the full fact set from one release record.
    pub fn parse(&self, record: &RawRelease) -> ExtractedFacts {
        let facts = ExtractedFacts {
            customer_emails: self.extract_customer_emails(&record.body),
            jira_tickets: self.extract_jira_tickets(&record.body),
            release_type: Self::determine_release_type(&record.title, &record.body)
                .name()
                .to_string(),
            business_impact: sections::extract(
                &record.body,
                SectionKind::BusinessImpact,
                SectionFormat::Raw,
            ),
            technical_changes: sections::extract(
                &record.body,
                SectionKind::TechnicalChanges,
                SectionFormat::Raw,
            ),
            has_file_attachments: files::has_attachments(&record.body),
        };
        log_debug!("Extracted facts for '{}': {:?}", record.title, facts);
        facts
    }

    /// Comma-joined valid addresses from the first matching email label.
    ///
    /// Invalid entries are filtered out rather than failing the field; no
    /// matching label across all patterns yields `""`.
    pub fn extract_customer_emails(&self, body: &str) -> String {
        let Some(field) = first_capture(body, &*EMAIL_LABEL_RES) else {
            return String::new();
        };

        field
            .split(|c: char| c == ',' || c.is_whitespace())
            .map(str::trim)
            .filter(|entry| !entry.is_empty() && is_valid_email(entry))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Space-joined, de-duplicated ticket IDs.
    ///
    /// Labeled fields win; with no labeled match the whole body is scanned
    /// for inline ticket tokens, preserving first-occurrence order.
    pub fn extract_jira_tickets(&self, body: &str) -> String {
        if let Some(field) = first_capture(body, &*TICKET_LABEL_RES) {
            let tickets = dedup_preserving_order(
                field
                    .split_whitespace()
                    .filter(|token| self.ticket_token_re.is_match(token)),
            );
            return tickets.join(" ");
        }

        let tickets =
            dedup_preserving_order(self.ticket_scan_re.find_iter(body).map(|m| m.as_str()));
        tickets.join(" ")
    }

    /// Case-insensitive keyword classification with fixed precedence:
    /// major > minor > bugfix > documentation > update.
    pub fn determine_release_type(title: &str, body: &str) -> ReleaseType {
        let haystack = format!("{} {}", title.to_lowercase(), body.to_lowercase());
        TYPE_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| haystack.contains(k)))
            .map_or(ReleaseType::Update, |(release_type, _)| *release_type)
    }

    /// Business impact snippet in raw-text form.
    pub fn extract_business_impact(&self, body: &str) -> String {
        sections::extract(body, SectionKind::BusinessImpact, SectionFormat::Raw)
    }

    /// Technical changes snippet in raw-text form.
    pub fn extract_technical_changes(&self, body: &str) -> String {
        sections::extract(body, SectionKind::TechnicalChanges, SectionFormat::Raw)
    }

    /// Whether the body advertises file attachments.
    pub fn has_file_attachments(&self, body: &str) -> bool {
        files::has_attachments(body)
    }
}

/// Runs ordered patterns until the first one matches and returns its first
/// capture group; later patterns are never consulted once one wins.
fn first_capture<'t>(text: &'t str, patterns: &[Regex]) -> Option<&'t str> {
    patterns
        .iter()
        .find_map(|re| re.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn dedup_preserving_order<'a>(tokens: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    tokens.filter(|token| seen.insert(*token)).collect()
}

//! Acceptance gating for extracted release facts.
//!
//! Four independent checks ANDed into one verdict. Findings surface as
//! descriptive strings; the validator never fails and performs no I/O.
//! Rendering still proceeds for rejected facts, so the caller gates
//! delivery on the verdict alone.

use crate::config::Config;
use crate::log_debug;
use crate::release::facts::{ExtractedFacts, ReleaseType};
use crate::release::{parser, sections};
use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Outcome of validating one set of extracted facts
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct ValidationResult {
    /// Overall verdict; true only when no check recorded an error
    pub is_valid: bool,
    /// Blocking findings, in check order
    pub errors: Vec<String>,
    /// Non-blocking findings, in check order
    pub warnings: Vec<String>,
}

/// Individual validation findings, rendered to strings in the result.
///
/// Missing-data, format and classification findings are kept as one enum
/// so every message is phrased in one place.
#[derive(Debug, thiserror::Error)]
pub enum ValidationIssue {
    #[error("no customer emails specified for this release")]
    MissingEmails,
    #[error("invalid email address(es): {0}")]
    MalformedEmails(String),
    #[error("invalid Jira ticket reference(s): {offenders} (expected {prefix}-<number>)")]
    MalformedTickets { offenders: String, prefix: String },
    #[error("no tickets referenced in this release")]
    NoTicketsReferenced,
    #[error("invalid release type '{value}' (expected one of: {allowed})")]
    InvalidReleaseType { value: String, allowed: String },
    #[error("release body is empty")]
    EmptyBody,
    #[error("release body contains no Business Impact or Technical Changes section")]
    MissingContentSections,
}

/// Decides whether extracted facts are publishable.
pub struct ReleaseValidator {
    ticket_prefix: String,
    ticket_token_re: Regex,
}

impl ReleaseValidator {
    pub fn new(config: &Config) -> Self {
        Self {
            ticket_prefix: config.ticket_prefix.clone(),
            ticket_token_re: config.ticket_token_regex(),
        }
    }

    /// Runs the four acceptance checks over facts and the raw body.
    pub fn validate(&self, facts: &ExtractedFacts, body: &str) -> ValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        self.check_emails(&facts.customer_emails, &mut errors);
        self.check_tickets(&facts.jira_tickets, &mut errors, &mut warnings);
        Self::check_release_type(&facts.release_type, &mut errors);
        Self::check_content(body, &mut errors);

        let result = ValidationResult {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        };
        log_debug!(
            "Validation verdict: valid={} errors={} warnings={}",
            result.is_valid,
            result.errors.len(),
            result.warnings.len()
        );
        result
    }

    // Unlike the parser's filter-and-keep extraction, a single bad entry
    // here invalidates the whole check
    fn check_emails(&self, emails: &str, errors: &mut Vec<String>) {
        if emails.trim().is_empty() {
            errors.push(ValidationIssue::MissingEmails.to_string());
            return;
        }

        let offenders: Vec<&str> = emails
            .split(',')
            .map(str::trim)
            .filter(|entry| !parser::is_valid_email(entry))
            .collect();
        if !offenders.is_empty() {
            errors.push(ValidationIssue::MalformedEmails(offenders.join(", ")).to_string());
        }
    }

    fn check_tickets(&self, tickets: &str, errors: &mut Vec<String>, warnings: &mut Vec<String>) {
        if tickets.trim().is_empty() {
            warnings.push(ValidationIssue::NoTicketsReferenced.to_string());
            return;
        }

        let offenders: Vec<&str> = tickets
            .split_whitespace()
            .filter(|token| !self.ticket_token_re.is_match(token))
            .collect();
        if !offenders.is_empty() {
            errors.push(
                ValidationIssue::MalformedTickets {
                    offenders: offenders.join(", "),
                    prefix: self.ticket_prefix.clone(),
                }
                .to_string(),
            );
        }
    }

    fn check_release_type(release_type: &str, errors: &mut Vec<String>) {
        if ReleaseType::from_str(release_type).is_err() {
            errors.push(
                ValidationIssue::InvalidReleaseType {
                    value: release_type.to_string(),
                    allowed: ReleaseType::all_names().join(", "),
                }
                .to_string(),
            );
        }
    }

    fn check_content(body: &str, errors: &mut Vec<String>) {
        if body.trim().is_empty() {
            errors.push(ValidationIssue::EmptyBody.to_string());
        } else if !sections::has_content_sections(body) {
            errors.push(ValidationIssue::MissingContentSections.to_string());
        }
    }
}

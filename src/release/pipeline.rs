//! End-to-end release content pipeline.

use crate::config::Config;
use crate::log_debug;
use crate::release::parser::ReleaseParser;
use crate::release::record::RawRelease;
use crate::release::renderer::ReleaseRenderer;
use crate::release::validator::ReleaseValidator;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Labeled output map handed to the orchestrator.
///
/// Key names are load-bearing: the delivery collaborators and their tests
/// key off these literal names, so they must not change.
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct PipelineOutput {
    /// Comma-joined validated customer addresses
    pub customer_emails: String,
    /// Space-joined, de-duplicated ticket IDs
    pub jira_tickets: String,
    /// Release classification name
    pub release_type: String,
    /// Business impact snippet (raw text)
    pub business_impact: String,
    /// Technical changes snippet (raw text)
    pub technical_changes: String,
    /// Whether the body advertises file attachments
    pub has_files: bool,
    /// Validation verdict gating delivery
    pub is_valid: bool,
    /// Blocking validation findings
    pub validation_errors: Vec<String>,
    /// Non-blocking validation findings
    pub validation_warnings: Vec<String>,
    /// Customer email subject line
    pub email_subject: String,
    /// Customer email body (HTML)
    pub email_body: String,
    /// Internal tracking comment (plain text)
    pub jira_comment: String,
}

/// Runs Parser, Validator and Renderer in strict sequence over one record.
///
/// Stateless across invocations: each call is a pure transformation of the
/// input record.
pub struct Pipeline {
    parser: ReleaseParser,
    validator: ReleaseValidator,
    renderer: ReleaseRenderer,
}

impl Pipeline {
    pub fn new(config: &Config) -> Self {
        Self {
            parser: ReleaseParser::new(config),
            validator: ReleaseValidator::new(config),
            renderer: ReleaseRenderer::new(config),
        }
    }

    /// Transforms one release record into the labeled output map.
    ///
    /// Rendering runs unconditionally so that a draft exists even for a
    /// rejected record; the caller gates delivery on `is_valid`.
    pub fn process(&self, record: &RawRelease) -> PipelineOutput {
        log_debug!("Processing release '{}' (tag '{}')", record.title, record.tag);

        let facts = self.parser.parse(record);
        let verdict = self.validator.validate(&facts, &record.body);
        let content = self
            .renderer
            .render(record, &facts.release_type, &facts.customer_emails);

        tracing::debug!(
            is_valid = verdict.is_valid,
            errors = verdict.errors.len(),
            warnings = verdict.warnings.len(),
            release_type = %facts.release_type,
            "pipeline finished"
        );

        PipelineOutput {
            customer_emails: facts.customer_emails,
            jira_tickets: facts.jira_tickets,
            release_type: facts.release_type,
            business_impact: facts.business_impact,
            technical_changes: facts.technical_changes,
            has_files: facts.has_file_attachments,
            is_valid: verdict.is_valid,
            validation_errors: verdict.errors,
            validation_warnings: verdict.warnings,
            email_subject: content.email_subject,
            email_body: content.email_body_html,
            jira_comment: content.jira_comment,
        }
    }
}

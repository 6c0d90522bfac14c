//! Rendering of the customer email and the internal tracking comment.
//!
//! Everything here is best-effort: rendering proceeds even for facts that
//! failed validation, degrading to safe defaults instead of failing, and
//! the caller decides whether the artifacts are ever delivered.

use crate::config::Config;
use crate::log_debug;
use crate::release::facts::ReleaseType;
use crate::release::record::RawRelease;
use crate::release::sections::{self, SectionFormat, SectionKind};
use crate::release::{files, markup};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::Write as FmtWrite;
use std::str::FromStr;

/// Subject-line titles longer than this are truncated
const SUBJECT_TITLE_LIMIT: usize = 50;
const SUBJECT_TITLE_KEPT: usize = 47;

/// Title used when the record carries none
const FALLBACK_TITLE: &str = "New Release";

/// Artifacts rendered from one release record
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct RenderedContent {
    /// Emoji-labeled subject line for the customer email
    pub email_subject: String,
    /// HTML email body with template class hooks
    pub email_body_html: String,
    /// Plain-text form of the email body
    pub email_body_text: String,
    /// Plain-text comment for the ticket system
    pub jira_comment: String,
    /// Business impact snippet reused by callers
    pub business_impact: String,
    /// Technical changes snippet reused by callers
    pub technical_changes: String,
}

/// Produces audience-specific artifacts from a release record.
pub struct ReleaseRenderer {
    team_signature: String,
}

impl ReleaseRenderer {
    pub fn new(config: &Config) -> Self {
        Self {
            team_signature: config.team_signature.clone(),
        }
    }

    /// Renders all artifacts for one release record.
    ///
    /// An unrecognized `release_type` falls back to the default
    /// classification instead of failing.
    pub fn render(
        &self,
        record: &RawRelease,
        release_type: &str,
        customer_emails: &str,
    ) -> RenderedContent {
        let release_type = ReleaseType::from_str(release_type).unwrap_or_default();

        let email_subject = Self::email_subject(release_type, &record.title);
        let email_body_html = self.email_body(record, release_type);
        let email_body_text = markup::strip_html(&email_body_html);
        let jira_comment = Self::jira_comment(record, customer_emails);

        log_debug!(
            "Rendered artifacts for '{}': subject='{}'",
            record.title,
            email_subject
        );

        RenderedContent {
            email_subject,
            email_body_html,
            email_body_text,
            jira_comment,
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
        }
    }

    /// `"{emoji} {label}: {title}"` with the title bounded at 50 characters.
    pub fn email_subject(release_type: ReleaseType, title: &str) -> String {
        format!(
            "{} {}: {}",
            release_type.subject_emoji(),
            release_type.subject_label(),
            truncate_title(title)
        )
    }

    /// Business impact snippet rendered as HTML for email embedding.
    pub fn business_impact_html(body: &str) -> String {
        sections::extract(body, SectionKind::BusinessImpact, SectionFormat::Html)
    }

    /// Technical changes snippet rendered as HTML for email embedding.
    pub fn technical_changes_html(body: &str) -> String {
        sections::extract(body, SectionKind::TechnicalChanges, SectionFormat::Html)
    }

    /// Bullet list of checked attachment labels, or the no-files sentence.
    pub fn file_list_html(body: &str) -> String {
        let labels = files::checked_labels(body);
        if labels.is_empty() {
            return "<p class=\"email-paragraph\">No specific files included in this release.</p>"
                .to_string();
        }

        let mut list = String::from("<ul class=\"email-list\">");
        for label in labels {
            write!(list, "<li class=\"email-list-item\">{label}</li>")
                .expect("writing to string should never fail");
        }
        list.push_str("</ul>");
        list
    }

    /// Assembles the HTML email body in fixed section order.
    ///
    /// "What's New" and "Technical Changes" are omitted entirely when their
    /// snippets are empty; "Release Files" and "Complete Details" always
    /// render.
    fn email_body(&self, record: &RawRelease, release_type: ReleaseType) -> String {
        let title = if record.title.trim().is_empty() {
            FALLBACK_TITLE
        } else {
            record.title.as_str()
        };
        let title = markup::escape_html(title);

        let mut body = String::new();

        // Title and greeting block
        write!(
            body,
            "<h1 class=\"email-heading\">{} {title}</h1>\n\
             <p class=\"email-paragraph\">Hello,</p>\n\
             <p class=\"email-paragraph\">We have just published <strong>{title}</strong> \
             and wanted to share what it means for you.</p>\n",
            release_type.subject_emoji()
        )
        .expect("writing to string should never fail");

        let impact = Self::business_impact_html(&record.body);
        if !impact.is_empty() {
            body.push_str("<h2 class=\"email-heading\">What's New</h2>\n");
            body.push_str(&impact);
        }

        let changes = Self::technical_changes_html(&record.body);
        if !changes.is_empty() {
            body.push_str("<h2 class=\"email-heading\">Technical Changes</h2>\n");
            body.push_str(&changes);
        }

        body.push_str("<h2 class=\"email-heading\">Release Files</h2>\n");
        body.push_str(&Self::file_list_html(&record.body));
        body.push('\n');

        body.push_str("<h2 class=\"email-heading\">Complete Details</h2>\n");
        write!(
            body,
            "<p class=\"email-paragraph\"><a href=\"{}\">View the full release record</a></p>\n",
            markup::escape_html(&record.url)
        )
        .expect("writing to string should never fail");

        write!(
            body,
            "<p class=\"email-paragraph\">{}</p>\n",
            markup::escape_html(&self.team_signature)
        )
        .expect("writing to string should never fail");

        body
    }

    /// Plain-text tracking comment with fixed emoji-labeled lines.
    pub fn jira_comment(record: &RawRelease, customer_emails: &str) -> String {
        let impact = single_line(&sections::extract(
            &record.body,
            SectionKind::BusinessImpact,
            SectionFormat::Plain,
        ));
        let changes = single_line(&sections::extract(
            &record.body,
            SectionKind::TechnicalChanges,
            SectionFormat::Plain,
        ));
        let labels = files::checked_labels(&record.body);

        let mut comment = String::new();
        writeln!(
            comment,
            "🚀 Released to Customer: {}",
            record.title
        )
        .expect("writing to string should never fail");
        comment.push('\n');
        writeln!(
            comment,
            "📈 Business Impact: {}",
            or_not_specified(&impact)
        )
        .expect("writing to string should never fail");
        writeln!(
            comment,
            "🔧 Technical Changes: {}",
            or_not_specified(&changes)
        )
        .expect("writing to string should never fail");

        let files_line = if labels.is_empty() {
            "No specific files".to_string()
        } else {
            labels.join(", ")
        };
        writeln!(comment, "📦 Files: {files_line}")
            .expect("writing to string should never fail");
        writeln!(comment, "🔗 Release: {}", record.url)
            .expect("writing to string should never fail");

        if customer_emails.trim().is_empty() {
            comment.push_str("📧 No emails specified\n");
        } else {
            writeln!(comment, "📧 Sent to {customer_emails}")
                .expect("writing to string should never fail");
        }

        comment
    }
}

fn truncate_title(title: &str) -> String {
    if title.chars().count() > SUBJECT_TITLE_LIMIT {
        let kept: String = title.chars().take(SUBJECT_TITLE_KEPT).collect();
        format!("{kept}...")
    } else {
        title.to_string()
    }
}

fn or_not_specified(text: &str) -> &str {
    if text.is_empty() { "Not specified" } else { text }
}

fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

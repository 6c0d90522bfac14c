#![allow(clippy::unwrap_used)]

use release_herald::{Config, RawRelease, ReleaseRenderer, ReleaseType};

fn renderer() -> ReleaseRenderer {
    ReleaseRenderer::new(&Config::default())
}

fn full_record() -> RawRelease {
    RawRelease {
        title: "Major Release v2.0".to_string(),
        body: "## Business Impact\nCuts setup time in half.\n\n## Technical Changes\nReworked provisioning.\n\nCustomer Email(s): a@example.com\n\n- [x] Drawings (PDF)\n- [x] Test Results\n".to_string(),
        tag: "v2.0.0".to_string(),
        url: "https://releases.example.com/v2.0.0".to_string(),
    }
}

#[test]
fn test_subject_uses_type_emoji_and_label() {
    assert_eq!(
        ReleaseRenderer::email_subject(ReleaseType::Major, "Big v2"),
        "🚀 Major Release: Big v2"
    );
    assert_eq!(
        ReleaseRenderer::email_subject(ReleaseType::Bugfix, "Patch"),
        "🐛 Bug Fix: Patch"
    );
    assert_eq!(
        ReleaseRenderer::email_subject(ReleaseType::Update, "Weekly"),
        "📋 Update: Weekly"
    );
}

#[test]
fn test_subject_title_is_bounded() {
    let long_title = "t".repeat(200);
    let subject = ReleaseRenderer::email_subject(ReleaseType::Minor, &long_title);

    assert!(subject.ends_with("..."), "Long titles must be truncated");
    let title_part = subject.split(": ").nth(1).unwrap();
    assert_eq!(
        title_part.chars().count(),
        50,
        "Truncated title is 47 chars plus the ellipsis"
    );
}

#[test]
fn test_short_titles_are_not_truncated() {
    let subject = ReleaseRenderer::email_subject(ReleaseType::Minor, "Small fixups");
    assert!(subject.ends_with("Small fixups"));
}

#[test]
fn test_email_body_has_fixed_section_order() {
    let content = renderer().render(&full_record(), "major", "a@example.com");
    let html = &content.email_body_html;

    let whats_new = html.find("What's New").expect("What's New section");
    let technical = html.find("Technical Changes").expect("Technical Changes section");
    let files = html.find("Release Files").expect("Release Files section");
    let details = html.find("Complete Details").expect("Complete Details section");
    assert!(
        whats_new < technical && technical < files && files < details,
        "Sections must render in fixed order"
    );

    assert!(html.contains("Cuts setup time in half."));
    assert!(html.contains("Reworked provisioning."));
    assert!(html.contains("https://releases.example.com/v2.0.0"));
}

#[test]
fn test_empty_sections_are_omitted_entirely() {
    let record = RawRelease {
        title: "Routine release".to_string(),
        body: "nothing structured here".to_string(),
        tag: String::new(),
        url: String::new(),
    };
    let content = renderer().render(&record, "update", "");
    let html = &content.email_body_html;

    assert!(
        !html.contains("What's New"),
        "Empty business impact must not leave an empty heading"
    );
    assert!(!html.contains("Technical Changes"));
    assert!(html.contains("Release Files"), "Files block always renders");
    assert!(html.contains("Complete Details"), "Details block always renders");
}

#[test]
fn test_file_list_renders_checked_labels() {
    let html = ReleaseRenderer::file_list_html("- [x] Drawings (PDF)\n- [x] Test Results\n");
    assert!(html.contains("<ul class=\"email-list\">"));
    assert!(html.contains("<li class=\"email-list-item\">Drawings (PDF)</li>"));
    assert!(html.contains("<li class=\"email-list-item\">Test Results</li>"));
}

#[test]
fn test_file_list_falls_back_to_no_files_sentence() {
    let html = ReleaseRenderer::file_list_html("no markers at all");
    assert!(html.contains("No specific files included in this release."));
}

#[test]
fn test_section_html_helpers_render_markup() {
    let body = "## Business Impact\nShips **faster** builds.\n";
    let html = ReleaseRenderer::business_impact_html(body);
    assert!(html.contains("<strong>faster</strong>"));
    assert!(html.contains("email-paragraph"));

    assert_eq!(ReleaseRenderer::technical_changes_html(body), "");
}

#[test]
fn test_jira_comment_fixed_lines() {
    let comment = ReleaseRenderer::jira_comment(&full_record(), "a@example.com");

    assert!(comment.contains("Released to Customer: Major Release v2.0"));
    assert!(comment.contains("Business Impact: Cuts setup time in half."));
    assert!(comment.contains("Technical Changes: Reworked provisioning."));
    assert!(comment.contains("Drawings (PDF), Test Results"));
    assert!(comment.contains("https://releases.example.com/v2.0.0"));
    assert!(comment.contains("Sent to a@example.com"));
}

#[test]
fn test_jira_comment_defaults_for_empty_record() {
    let comment = ReleaseRenderer::jira_comment(&RawRelease::default(), "");

    assert!(comment.contains("Released to Customer"));
    assert!(comment.contains("Business Impact: Not specified"));
    assert!(comment.contains("Technical Changes: Not specified"));
    assert!(comment.contains("No specific files"));
    assert!(comment.contains("No emails specified"));
}

#[test]
fn test_jira_comment_has_no_release_date_line() {
    let comment = ReleaseRenderer::jira_comment(&full_record(), "a@example.com");
    assert!(
        !comment.contains("Release Date"),
        "The canonical comment format carries no date line"
    );
}

#[test]
fn test_jira_comment_impact_is_plain_text() {
    let record = RawRelease {
        title: "Formatting check".to_string(),
        body: "## Business Impact\nShips **faster** `builds`.\n".to_string(),
        tag: String::new(),
        url: String::new(),
    };
    let comment = ReleaseRenderer::jira_comment(&record, "");
    assert!(
        comment.contains("Business Impact: Ships faster builds."),
        "Markup must be stripped from comment text, got: {comment}"
    );
}

#[test]
fn test_render_never_panics_on_empty_inputs() {
    let content = renderer().render(&RawRelease::default(), "", "");

    assert!(
        content.email_subject.starts_with("📋 Update:"),
        "Unknown type falls back to the default classification"
    );
    assert!(content.email_body_html.contains("New Release"));
    assert!(!content.email_body_text.is_empty());
    assert!(content.jira_comment.contains("Released to Customer"));
    assert_eq!(content.business_impact, "");
    assert_eq!(content.technical_changes, "");
}

#[test]
fn test_body_text_is_stripped_form_of_html() {
    let content = renderer().render(&full_record(), "major", "a@example.com");
    assert!(!content.email_body_text.contains('<'));
    assert!(content.email_body_text.contains("Cuts setup time in half."));
}

#[test]
fn test_html_special_characters_in_title_are_escaped() {
    let record = RawRelease {
        title: "Ops <alert> & co".to_string(),
        body: "## Business Impact\nSafer dashboards.\n".to_string(),
        tag: String::new(),
        url: String::new(),
    };
    let content = renderer().render(&record, "update", "");
    assert!(content.email_body_html.contains("Ops &lt;alert&gt; &amp; co"));
    assert!(!content.email_body_html.contains("<alert>"));
}

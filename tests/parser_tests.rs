#![allow(clippy::unwrap_used)]

use release_herald::{Config, RawRelease, ReleaseParser, ReleaseType};

fn parser() -> ReleaseParser {
    ReleaseParser::new(&Config::default())
}

#[test]
fn test_customer_emails_preserve_order() {
    let body = "Customer Email(s): a@b.com, c@d.com\n";
    assert_eq!(
        parser().extract_customer_emails(body),
        "a@b.com,c@d.com",
        "Should keep addresses in field order"
    );
}

#[test]
fn test_first_email_pattern_wins() {
    // "To:" appears earlier in the body, but "Customer Emails:" is higher
    // priority and later patterns are never consulted once one matches
    let body = "To: other@example.com\nCustomer Emails: first@example.com\n";
    assert_eq!(parser().extract_customer_emails(body), "first@example.com");
}

#[test]
fn test_invalid_emails_are_filtered_not_fatal() {
    let body = "Emails: good@example.com, not-an-email, also@fine.org\n";
    assert_eq!(
        parser().extract_customer_emails(body),
        "good@example.com,also@fine.org",
        "Invalid entries should be dropped without failing the field"
    );
}

#[test]
fn test_no_email_label_yields_empty() {
    assert_eq!(parser().extract_customer_emails("no recipients here"), "");
    assert_eq!(parser().extract_customer_emails(""), "");
}

#[test]
fn test_to_label_is_the_last_fallback() {
    let body = "To: someone@example.com\n";
    assert_eq!(parser().extract_customer_emails(body), "someone@example.com");
}

#[test]
fn test_labeled_tickets_win_over_inline_scan() {
    let body = "Mentions PDE-1 inline.\nJira Tickets: PDE-2 PDE-3\n";
    assert_eq!(
        parser().extract_jira_tickets(body),
        "PDE-2 PDE-3",
        "Labeled field should suppress the inline fallback"
    );
}

#[test]
fn test_labeled_tickets_drop_foreign_tokens() {
    let body = "Tickets: PDE-5 ABC-9 not-a-ticket PDE-6\n";
    assert_eq!(parser().extract_jira_tickets(body), "PDE-5 PDE-6");
}

#[test]
fn test_inline_fallback_dedups_preserving_order() {
    let body = "Touches PDE-10 and PDE-11, then revisits PDE-10.";
    assert_eq!(parser().extract_jira_tickets(body), "PDE-10 PDE-11");
}

#[test]
fn test_no_tickets_yields_empty() {
    assert_eq!(parser().extract_jira_tickets("nothing relevant"), "");
}

#[test]
fn test_ticket_prefix_is_configuration_driven() {
    let mut config = Config::default();
    config.ticket_prefix = "OPS".to_string();
    let parser = ReleaseParser::new(&config);

    let body = "Related Work: OPS-7 PDE-8\n";
    assert_eq!(
        parser.extract_jira_tickets(body),
        "OPS-7",
        "Only the configured prefix should be recognized"
    );
}

#[test]
fn test_release_type_major_beats_bug() {
    assert_eq!(
        ReleaseParser::determine_release_type("Major overhaul", "also squashes a bug"),
        ReleaseType::Major,
        "major must win over bugfix keywords"
    );
}

#[test]
fn test_release_type_minor_beats_doc() {
    assert_eq!(
        ReleaseParser::determine_release_type("Minor polish", "updated docs too"),
        ReleaseType::Minor
    );
}

#[test]
fn test_release_type_keywords_are_case_insensitive() {
    assert_eq!(
        ReleaseParser::determine_release_type("HOTPATCH", "FIXES a crash"),
        ReleaseType::Bugfix
    );
}

#[test]
fn test_release_type_doc_keyword() {
    assert_eq!(
        ReleaseParser::determine_release_type("Manual refresh", "regenerated the doc site"),
        ReleaseType::Documentation
    );
}

#[test]
fn test_release_type_defaults_to_update() {
    assert_eq!(
        ReleaseParser::determine_release_type("Routine release", "small internal cleanup"),
        ReleaseType::Update
    );
    assert_eq!(
        ReleaseParser::determine_release_type("", ""),
        ReleaseType::Update
    );
}

#[test]
fn test_section_snippets_are_raw_text() {
    let parser = parser();
    let body = "## Business Impact\nShips **faster** onboarding.\n\n## Technical Changes\nNew queue backend.\n";
    assert_eq!(
        parser.extract_business_impact(body),
        "Ships **faster** onboarding.",
        "Parser keeps the snippet unrendered"
    );
    assert_eq!(parser.extract_technical_changes(body), "New queue backend.");
}

#[test]
fn test_missing_sections_yield_empty_snippets() {
    let parser = parser();
    assert_eq!(parser.extract_business_impact("plain words"), "");
    assert_eq!(parser.extract_technical_changes(""), "");
}

#[test]
fn test_checked_file_markers_are_detected() {
    let parser = parser();
    assert!(parser.has_file_attachments("- [x] Drawings (PDF)\n- [ ] Test Results\n"));
    assert!(parser.has_file_attachments("Attachments: build.zip\n"));
    assert!(!parser.has_file_attachments("- [ ] Drawings (PDF)\n"));
    assert!(!parser.has_file_attachments(""));
}

#[test]
fn test_parse_full_record() {
    let record = RawRelease {
        title: "Major Release v2.0".to_string(),
        body: "## Business Impact\nCuts setup time in half.\n\n## Technical Changes\nReworked provisioning.\n\nCustomer Email(s): a@example.com, b@example.com\nJira Tickets: PDE-789 PDE-790\n\n- [x] Test Results\n".to_string(),
        tag: "v2.0.0".to_string(),
        url: "https://releases.example.com/v2.0.0".to_string(),
    };

    let facts = parser().parse(&record);
    assert_eq!(facts.customer_emails, "a@example.com,b@example.com");
    assert_eq!(facts.jira_tickets, "PDE-789 PDE-790");
    assert_eq!(facts.release_type, "major");
    assert_eq!(facts.business_impact, "Cuts setup time in half.");
    assert_eq!(facts.technical_changes, "Reworked provisioning.");
    assert!(facts.has_file_attachments);
}

#[test]
fn test_parse_never_fails_on_empty_record() {
    let facts = parser().parse(&RawRelease::default());
    assert_eq!(facts.customer_emails, "");
    assert_eq!(facts.jira_tickets, "");
    assert_eq!(facts.release_type, "update");
    assert_eq!(facts.business_impact, "");
    assert_eq!(facts.technical_changes, "");
    assert!(!facts.has_file_attachments);
}

//! Attachment checklist detection shared by the parser and renderer.

use regex::Regex;
use std::sync::LazyLock;

/// The four fixed checklist markers and their display labels
const FILE_CHECKLIST: &[(&str, &str)] = &[
    (r"(?im)^[ \t]*[-*][ \t]*\[x\][ \t]*Drawings", "Drawings (PDF)"),
    (r"(?im)^[ \t]*[-*][ \t]*\[x\][ \t]*3D Models", "3D Models"),
    (
        r"(?im)^[ \t]*[-*][ \t]*\[x\][ \t]*Documentation Updates",
        "Documentation Updates",
    ),
    (r"(?im)^[ \t]*[-*][ \t]*\[x\][ \t]*Test Results", "Test Results"),
];

static FILE_MARKER_RES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    FILE_CHECKLIST
        .iter()
        .map(|(pattern, label)| {
            (
                Regex::new(pattern).expect("Should compile: FILE_CHECKLIST"),
                *label,
            )
        })
        .collect()
});

// Generic labels that signal attachments without an itemized checklist
static GENERIC_FILES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[ \t]*(?:Files Included|Attachments):").expect("Should compile: GENERIC_FILES_RE")
});

/// Labels of the checklist entries marked `[x]`, in fixed checklist order.
pub fn checked_labels(body: &str) -> Vec<&'static str> {
    FILE_MARKER_RES
        .iter()
        .filter(|(re, _)| re.is_match(body))
        .map(|(_, label)| *label)
        .collect()
}

/// True when any checklist marker is checked or a generic files label is present.
pub fn has_attachments(body: &str) -> bool {
    !checked_labels(body).is_empty() || GENERIC_FILES_RE.is_match(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_markers_are_collected_in_checklist_order() {
        let body = "- [x] Test Results\n- [x] Drawings (PDF)\n- [ ] 3D Models\n";
        assert_eq!(checked_labels(body), vec!["Drawings (PDF)", "Test Results"]);
    }

    #[test]
    fn unchecked_markers_do_not_count() {
        let body = "- [ ] Drawings (PDF)\n- [ ] Test Results\n";
        assert!(checked_labels(body).is_empty());
        assert!(!has_attachments(body));
    }

    #[test]
    fn generic_label_counts_as_attachments() {
        assert!(has_attachments("Files Included: drawing.pdf, model.step\n"));
        assert!(has_attachments("attachments: build.zip\n"));
    }

    #[test]
    fn empty_body_has_no_attachments() {
        assert!(!has_attachments(""));
    }
}

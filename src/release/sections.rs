//! Section-boundary extraction shared by the parser and the renderer.
//!
//! Both components need the same Business-Impact and Technical-Changes
//! snippets, one as raw text and one as rendered HTML. A single extractor
//! parameterized by output format keeps the two from diverging.

use crate::release::markup;
use regex::Regex;
use std::sync::LazyLock;

/// Output form for an extracted section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionFormat {
    /// Raw trimmed text as written in the release body
    Raw,
    /// HTML rendered for email embedding
    Html,
    /// Plain text with all markup stripped, for ticket comments
    Plain,
}

/// The labeled sections the pipeline recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    BusinessImpact,
    TechnicalChanges,
}

static BUSINESS_HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^#{1,6}[ \t]*Business Impact[ \t]*$")
        .expect("Should compile: BUSINESS_HEADING_RE")
});
static BUSINESS_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^Business Impact:[ \t]*").expect("Should compile: BUSINESS_LABEL_RE")
});
static BUSINESS_ALT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^Customer Impact:[ \t]*").expect("Should compile: BUSINESS_ALT_RE")
});

static TECHNICAL_HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^#{1,6}[ \t]*Technical Changes[ \t]*$")
        .expect("Should compile: TECHNICAL_HEADING_RE")
});
static TECHNICAL_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^Technical Changes:[ \t]*").expect("Should compile: TECHNICAL_LABEL_RE")
});
static TECHNICAL_ALT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^Technical Details:[ \t]*").expect("Should compile: TECHNICAL_ALT_RE")
});

// Boundaries that terminate a captured section
static NEXT_HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#{1,6}[ \t]").expect("Should compile: NEXT_HEADING_RE"));
static NEXT_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[A-Z][A-Za-z0-9 ()/-]{0,60}:").expect("Should compile: NEXT_LABEL_RE")
});
static DOUBLE_BLANK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]*\n[ \t]*\n").expect("Should compile: DOUBLE_BLANK_RE"));

impl SectionKind {
    /// Start patterns in priority order: heading, colon label, alternate label
    fn start_patterns(self) -> [&'static Regex; 3] {
        match self {
            Self::BusinessImpact => [&BUSINESS_HEADING_RE, &BUSINESS_LABEL_RE, &BUSINESS_ALT_RE],
            Self::TechnicalChanges => {
                [&TECHNICAL_HEADING_RE, &TECHNICAL_LABEL_RE, &TECHNICAL_ALT_RE]
            }
        }
    }
}

/// Extracts a labeled section from the body in the requested format.
///
/// Start patterns are tried in fixed order and the first match wins; later
/// patterns are never consulted. The captured region ends at the next
/// heading, the next colon-label line, or a double blank line, whichever
/// comes first. Returns `""` when no pattern matches.
pub fn extract(body: &str, kind: SectionKind, format: SectionFormat) -> String {
    let raw = extract_raw(body, kind);
    if raw.is_empty() {
        return raw;
    }
    match format {
        SectionFormat::Raw => raw,
        SectionFormat::Html => markup::markdown_to_html(&raw),
        SectionFormat::Plain => markup::strip_html(&markup::markdown_to_html(&raw)),
    }
}

/// True when the body carries any recognizable section marker.
pub fn has_content_sections(body: &str) -> bool {
    SectionKind::BusinessImpact
        .start_patterns()
        .iter()
        .chain(SectionKind::TechnicalChanges.start_patterns().iter())
        .any(|re| re.is_match(body))
}

fn extract_raw(body: &str, kind: SectionKind) -> String {
    let Some(start) = first_match(body, &kind.start_patterns()) else {
        return String::new();
    };
    let rest = &body[start..];
    rest[..section_end(rest)].trim().to_string()
}

/// First-match-wins over an ordered pattern list; returns the offset just
/// past the winning marker.
fn first_match(text: &str, patterns: &[&'static Regex; 3]) -> Option<usize> {
    patterns.iter().find_map(|re| re.find(text)).map(|m| m.end())
}

fn section_end(rest: &str) -> usize {
    [&*NEXT_HEADING_RE, &*NEXT_LABEL_RE, &*DOUBLE_BLANK_RE]
        .into_iter()
        .filter_map(|re| re.find(rest).map(|m| m.start()))
        .min()
        .unwrap_or(rest.len())
}

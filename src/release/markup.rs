//! Markdown-to-HTML conversion with email-template class hooks.
//!
//! The email template styles against semantic classes rather than bare
//! tags, so the generic conversion is followed by a post-processing pass
//! that injects those hooks and rewrites code markup into wrapper elements.

use pulldown_cmark::{Options, Parser, html};
use regex::Regex;
use std::sync::LazyLock;

// Fenced code blocks are rewritten before the inline pass so the inline
// rewrite cannot touch them
static FENCED_CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<pre><code[^>]*>(.*?)</code></pre>").expect("Should compile: FENCED_CODE_RE")
});

static INLINE_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<code>(.*?)</code>").expect("Should compile: INLINE_CODE_RE"));

// Closing tags of block-level elements become line breaks when stripping
static BLOCK_BREAK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"</(?:p|h[1-6]|li|div|pre|ul|ol|blockquote)>|<br[ \t]*/?>")
        .expect("Should compile: BLOCK_BREAK_RE")
});

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("Should compile: TAG_RE"));

static SPACE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]{2,}").expect("Should compile: SPACE_RUN_RE"));

static BLANK_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("Should compile: BLANK_RUN_RE"));

/// Converts markdown text to HTML carrying the email template's class hooks.
///
/// Plain text with no markdown syntax degrades to a single class-hooked
/// paragraph; non-empty input never yields empty output.
pub fn markdown_to_html(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    let parser = Parser::new_ext(text, options);

    let mut converted = String::new();
    html::push_html(&mut converted, parser);

    inject_class_hooks(&converted)
}

/// Injects the semantic classes the email template styles against.
fn inject_class_hooks(converted: &str) -> String {
    let converted = FENCED_CODE_RE.replace_all(converted, |caps: &regex::Captures| {
        format!("<div class=\"email-code-block\"><pre>{}</pre></div>", &caps[1])
    });
    let converted =
        INLINE_CODE_RE.replace_all(&converted, "<span class=\"email-inline-code\">$1</span>");

    converted
        .replace("<h1>", "<h1 class=\"email-heading\">")
        .replace("<h2>", "<h2 class=\"email-heading\">")
        .replace("<h3>", "<h3 class=\"email-heading\">")
        .replace("<h4>", "<h4 class=\"email-heading\">")
        .replace("<h5>", "<h5 class=\"email-heading\">")
        .replace("<h6>", "<h6 class=\"email-heading\">")
        .replace("<p>", "<p class=\"email-paragraph\">")
        .replace("<ul>", "<ul class=\"email-list\">")
        .replace("<ol>", "<ol class=\"email-list\">")
        .replace("<li>", "<li class=\"email-list-item\">")
}

/// Strips tags from rendered HTML, yielding readable plain text.
pub fn strip_html(fragment: &str) -> String {
    let text = BLOCK_BREAK_RE.replace_all(fragment, "\n");
    let text = TAG_RE.replace_all(&text, "");
    let text = decode_entities(&text);
    let text = SPACE_RUN_RE.replace_all(&text, " ");
    let text = BLANK_RUN_RE.replace_all(&text, "\n\n");
    text.trim().to_string()
}

/// Escapes text for embedding into an HTML attribute or element body.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

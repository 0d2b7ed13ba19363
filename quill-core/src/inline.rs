use std::sync::LazyLock;

use regex::Regex;

// The character classes stop at the nearest closing bracket/paren, so
// matching is non-greedy by construction.
static IMAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^()]*)\)").unwrap());
static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^()]*)\)").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanStyle {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// One inline run of text. `url` is present only for links and images,
/// where `text` carries the label / alt text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub text: String,
    pub style: SpanStyle,
    pub url: Option<String>,
}

impl TextSpan {
    pub fn new<S: Into<String>>(text: S, style: SpanStyle) -> Self {
        TextSpan {
            text: text.into(),
            style,
            url: None,
        }
    }

    pub fn plain<S: Into<String>>(text: S) -> Self {
        TextSpan::new(text, SpanStyle::Plain)
    }

    pub fn with_url<S: Into<String>, U: Into<String>>(text: S, style: SpanStyle, url: U) -> Self {
        TextSpan {
            text: text.into(),
            style,
            url: Some(url.into()),
        }
    }
}

/// Split a text run into styled spans.
///
/// Images and links are extracted first, then the remaining plain
/// segments are split for bold (`**`), italic (`*` or `_`) and inline
/// code. Unmatched or malformed delimiters stay behind as literal
/// text rather than failing. Styles do not nest: inner markers inside
/// an already-matched span are kept verbatim.
pub fn tokenize(text: &str) -> Vec<TextSpan> {
    let mut spans = vec![TextSpan::plain(text)];
    spans = split_pattern(spans, &IMAGE_PATTERN, SpanStyle::Image);
    spans = split_pattern(spans, &LINK_PATTERN, SpanStyle::Link);
    spans = split_delimiter(spans, "**", SpanStyle::Bold);
    spans = split_delimiter(spans, "*", SpanStyle::Italic);
    spans = split_delimiter(spans, "_", SpanStyle::Italic);
    spans = split_delimiter(spans, "`", SpanStyle::Code);
    spans
}

fn split_pattern(spans: Vec<TextSpan>, pattern: &Regex, style: SpanStyle) -> Vec<TextSpan> {
    let mut out = Vec::new();
    for span in spans {
        if span.style != SpanStyle::Plain {
            out.push(span);
            continue;
        }
        let mut last = 0;
        for captures in pattern.captures_iter(&span.text) {
            let matched = captures.get(0).unwrap();
            if matched.start() > last {
                out.push(TextSpan::plain(&span.text[last..matched.start()]));
            }
            out.push(TextSpan::with_url(&captures[1], style, &captures[2]));
            last = matched.end();
        }
        if last < span.text.len() {
            out.push(TextSpan::plain(&span.text[last..]));
        }
    }
    out
}

fn split_delimiter(spans: Vec<TextSpan>, delimiter: &str, style: SpanStyle) -> Vec<TextSpan> {
    let mut out = Vec::new();
    for span in spans {
        if span.style != SpanStyle::Plain {
            out.push(span);
            continue;
        }
        let mut literal = String::new();
        let mut rest = span.text.as_str();
        while let Some(open) = rest.find(delimiter) {
            let after = &rest[open + delimiter.len()..];
            let Some(close) = after.find(delimiter) else {
                // No closing counterpart: the opener stays literal.
                break;
            };
            if close == 0 {
                // Adjacent pair with nothing between, keep it literal.
                literal.push_str(&rest[..open + 2 * delimiter.len()]);
                rest = &after[delimiter.len()..];
                continue;
            }
            literal.push_str(&rest[..open]);
            if !literal.is_empty() {
                out.push(TextSpan::plain(std::mem::take(&mut literal)));
            }
            out.push(TextSpan::new(&after[..close], style));
            rest = &after[close + delimiter.len()..];
        }
        literal.push_str(rest);
        if !literal.is_empty() {
            out.push(TextSpan::plain(literal));
        }
    }
    out
}

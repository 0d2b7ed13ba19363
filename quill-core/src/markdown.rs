use std::fmt;

use crate::block::{BlockType, classify, split_blocks};
use crate::html::HtmlNode;
use crate::inline::{SpanStyle, TextSpan, tokenize};

/// The document has no `# ` heading anywhere. There is no fallback
/// title; generation of that page fails.
#[derive(Debug, PartialEq, Eq)]
pub struct MissingTitleError;

impl fmt::Display for MissingTitleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no h1 heading found in document")
    }
}

impl std::error::Error for MissingTitleError {}

/// Title of a document: the trimmed text of its first `# ` line.
pub fn extract_title(markdown: &str) -> Result<String, MissingTitleError> {
    for line in markdown.lines() {
        if let Some(title) = line.trim().strip_prefix("# ") {
            return Ok(title.trim().to_string());
        }
    }
    Err(MissingTitleError)
}

/// Convert a whole markdown document into an element tree rooted at a
/// `div`. Bold spans render as `b`, italic as `i`.
pub fn markdown_to_html_node(document: &str) -> HtmlNode {
    let children = split_blocks(document)
        .iter()
        .map(|block| block_to_node(block))
        .collect();
    HtmlNode::container("div", children)
}

fn block_to_node(block: &str) -> HtmlNode {
    match classify(block) {
        BlockType::Paragraph => paragraph_node(block),
        BlockType::Heading(level) => heading_node(block, level),
        BlockType::Code => code_node(block),
        BlockType::Quote => quote_node(block),
        BlockType::UnorderedList => list_node(block, "ul"),
        BlockType::OrderedList => list_node(block, "ol"),
    }
}

fn paragraph_node(block: &str) -> HtmlNode {
    let text = block.lines().collect::<Vec<_>>().join(" ");
    HtmlNode::container("p", span_children(&text))
}

fn heading_node(block: &str, level: u8) -> HtmlNode {
    // The prefix is ASCII (`#` marks plus one space), safe to slice.
    let text = &block[level as usize + 1..];
    HtmlNode::container(format!("h{level}"), span_children(text))
}

fn code_node(block: &str) -> HtmlNode {
    let lines: Vec<&str> = block.lines().collect();
    let mut content = lines[1..lines.len() - 1].join("\n");
    if !content.is_empty() {
        content.push('\n');
    }
    // Code bodies stay verbatim, no inline pass.
    let code = HtmlNode::container("code", vec![HtmlNode::text(content)]);
    HtmlNode::container("pre", vec![code])
}

fn quote_node(block: &str) -> HtmlNode {
    let text = block
        .lines()
        .map(|line| {
            let line = line.strip_prefix('>').unwrap_or(line);
            line.strip_prefix(' ').unwrap_or(line)
        })
        .collect::<Vec<_>>()
        .join(" ");
    HtmlNode::container("blockquote", span_children(&text))
}

fn list_node(block: &str, tag: &str) -> HtmlNode {
    let items = block
        .lines()
        .map(str::trim)
        .map(|line| HtmlNode::container("li", span_children(strip_marker(line))))
        .collect();
    HtmlNode::container(tag, items)
}

fn strip_marker(line: &str) -> &str {
    if let Some(rest) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
        return rest;
    }
    match line.find(". ") {
        Some(dot) if line[..dot].bytes().all(|byte| byte.is_ascii_digit()) => &line[dot + 2..],
        _ => line,
    }
}

fn span_children(text: &str) -> Vec<HtmlNode> {
    let spans = tokenize(text);
    if spans.is_empty() {
        // An empty run still needs a leaf so the parent serializes.
        return vec![HtmlNode::text("")];
    }
    spans.iter().map(span_to_node).collect()
}

fn span_to_node(span: &TextSpan) -> HtmlNode {
    let url = span.url.as_deref().unwrap_or_default();
    match span.style {
        SpanStyle::Plain => HtmlNode::text(&span.text),
        SpanStyle::Bold => HtmlNode::leaf("b", &span.text),
        SpanStyle::Italic => HtmlNode::leaf("i", &span.text),
        SpanStyle::Code => HtmlNode::leaf("code", &span.text),
        SpanStyle::Link => HtmlNode::leaf("a", &span.text).with_attribute("href", url),
        SpanStyle::Image => HtmlNode::leaf("img", "")
            .with_attribute("src", url)
            .with_attribute("alt", &span.text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(document: &str) -> String {
        markdown_to_html_node(document).to_html().unwrap()
    }

    #[test]
    fn converts_heading_and_paragraph() {
        assert_eq!(
            render("# Hi\n\nThis is **bold**."),
            "<div><h1>Hi</h1><p>This is <b>bold</b>.</p></div>"
        );
    }

    #[test]
    fn paragraph_lines_join_with_spaces() {
        assert_eq!(render("# T\n\na\nb"), "<div><h1>T</h1><p>a b</p></div>");
    }

    #[test]
    fn converts_code_block_verbatim() {
        assert_eq!(
            render("```\nfn main() {}\n```"),
            "<div><pre><code>fn main() {}\n</code></pre></div>"
        );
    }

    #[test]
    fn code_block_skips_inline_styling() {
        assert_eq!(
            render("```\n**not bold**\n```"),
            "<div><pre><code>**not bold**\n</code></pre></div>"
        );
    }

    #[test]
    fn converts_quote() {
        assert_eq!(
            render("> first\n> second"),
            "<div><blockquote>first second</blockquote></div>"
        );
    }

    #[test]
    fn converts_unordered_list() {
        assert_eq!(
            render("- one\n* two"),
            "<div><ul><li>one</li><li>two</li></ul></div>"
        );
    }

    #[test]
    fn converts_ordered_list() {
        assert_eq!(
            render("1. one\n2. two"),
            "<div><ol><li>one</li><li>two</li></ol></div>"
        );
    }

    #[test]
    fn bad_numbering_renders_as_paragraph() {
        assert_eq!(render("1. a\n3. b"), "<div><p>1. a 3. b</p></div>");
    }

    #[test]
    fn converts_links_and_images() {
        assert_eq!(
            render("See [docs](http://a.com) and ![pic](x.png)"),
            "<div><p>See <a href=\"http://a.com\">docs</a> and <img src=\"x.png\" alt=\"pic\"></img></p></div>"
        );
    }

    #[test]
    fn list_items_tokenize_inline() {
        assert_eq!(
            render("- plain\n- **bold** item"),
            "<div><ul><li>plain</li><li><b>bold</b> item</li></ul></div>"
        );
    }

    #[test]
    fn extracts_first_h1_title() {
        assert_eq!(extract_title("# Hello"), Ok("Hello".to_string()));
        assert_eq!(
            extract_title("## Sub\n\nsome text\n\n# Real Title"),
            Ok("Real Title".to_string())
        );
    }

    #[test]
    fn title_is_trimmed() {
        assert_eq!(extract_title("   #  Spaced Out  "), Ok("Spaced Out".to_string()));
    }

    #[test]
    fn missing_title_is_an_error() {
        assert_eq!(extract_title("## only subheadings"), Err(MissingTitleError));
        assert_eq!(extract_title(""), Err(MissingTitleError));
    }
}

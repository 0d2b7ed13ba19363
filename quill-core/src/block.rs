/// Kind of a top-level markdown block, derived purely from its raw
/// text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    Paragraph,
    Heading(u8),
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

/// Cut a document into blocks on runs of blank lines. Whitespace-only
/// lines count as blank. Each block is trimmed as a whole and empty
/// chunks are dropped.
pub fn split_blocks(document: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in document.lines() {
        if line.trim().is_empty() {
            push_block(&mut blocks, &mut current);
        } else {
            current.push(line);
        }
    }
    push_block(&mut blocks, &mut current);
    blocks
}

fn push_block(blocks: &mut Vec<String>, lines: &mut Vec<&str>) {
    if lines.is_empty() {
        return;
    }
    blocks.push(lines.join("\n").trim().to_string());
    lines.clear();
}

/// Assign a block its type by leading syntax, most specific first.
pub fn classify(block: &str) -> BlockType {
    let lines: Vec<&str> = block.lines().collect();
    let Some(first) = lines.first() else {
        return BlockType::Paragraph;
    };
    if let Some(level) = heading_level(first) {
        return BlockType::Heading(level);
    }
    if lines.len() >= 2 && first.starts_with("```") && lines[lines.len() - 1].ends_with("```") {
        return BlockType::Code;
    }
    if lines.iter().all(|line| line.starts_with('>')) {
        return BlockType::Quote;
    }
    if lines
        .iter()
        .all(|line| line.starts_with("- ") || line.starts_with("* "))
    {
        return BlockType::UnorderedList;
    }
    // Ordered items must count up from 1 with no gaps; anything else
    // reads as prose.
    if lines
        .iter()
        .enumerate()
        .all(|(i, line)| line.starts_with(&format!("{}. ", i + 1)))
    {
        return BlockType::OrderedList;
    }
    BlockType::Paragraph
}

fn heading_level(line: &str) -> Option<u8> {
    let hashes = line.bytes().take_while(|byte| *byte == b'#').count();
    if (1..=6).contains(&hashes) && line.as_bytes().get(hashes) == Some(&b' ') {
        return Some(hashes as u8);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_blank_lines() {
        assert_eq!(split_blocks("a\n\nb"), vec!["a", "b"]);
    }

    #[test]
    fn collapses_blank_line_runs() {
        assert_eq!(split_blocks("a\n\n\nb"), vec!["a", "b"]);
    }

    #[test]
    fn whitespace_only_lines_separate() {
        assert_eq!(split_blocks("a\n   \nb"), vec!["a", "b"]);
    }

    #[test]
    fn trims_each_block_as_a_whole() {
        assert_eq!(split_blocks("  hello  \n\n  world"), vec!["hello", "world"]);
    }

    #[test]
    fn keeps_lines_within_a_block() {
        assert_eq!(split_blocks("- a\n- b\n\npara"), vec!["- a\n- b", "para"]);
    }

    #[test]
    fn drops_leading_and_trailing_blanks() {
        assert_eq!(split_blocks("\n\na\n\n"), vec!["a"]);
        assert_eq!(split_blocks(""), Vec::<String>::new());
    }

    #[test]
    fn classifies_headings_by_level() {
        assert_eq!(classify("# Title"), BlockType::Heading(1));
        assert_eq!(classify("### Sub"), BlockType::Heading(3));
        assert_eq!(classify("###### Deep"), BlockType::Heading(6));
    }

    #[test]
    fn too_many_hashes_is_a_paragraph() {
        assert_eq!(classify("####### nope"), BlockType::Paragraph);
    }

    #[test]
    fn hash_without_space_is_a_paragraph() {
        assert_eq!(classify("#nope"), BlockType::Paragraph);
    }

    #[test]
    fn classifies_fenced_code() {
        assert_eq!(classify("```\ncode\n```"), BlockType::Code);
        assert_eq!(classify("```\n```"), BlockType::Code);
    }

    #[test]
    fn lone_fence_is_a_paragraph() {
        assert_eq!(classify("```"), BlockType::Paragraph);
    }

    #[test]
    fn classifies_quotes() {
        assert_eq!(classify("> a\n> b"), BlockType::Quote);
        assert_eq!(classify("> a\nb"), BlockType::Paragraph);
    }

    #[test]
    fn classifies_unordered_lists() {
        assert_eq!(classify("- a\n- b"), BlockType::UnorderedList);
        assert_eq!(classify("* a\n- b"), BlockType::UnorderedList);
        assert_eq!(classify("- a\nb"), BlockType::Paragraph);
    }

    #[test]
    fn classifies_ordered_lists() {
        assert_eq!(classify("1. a\n2. b"), BlockType::OrderedList);
        assert_eq!(classify("1. only"), BlockType::OrderedList);
    }

    #[test]
    fn non_sequential_numbering_is_a_paragraph() {
        assert_eq!(classify("1. a\n3. b"), BlockType::Paragraph);
        assert_eq!(classify("2. a\n3. b"), BlockType::Paragraph);
    }

    #[test]
    fn plain_text_is_a_paragraph() {
        assert_eq!(classify("just some text\nacross lines"), BlockType::Paragraph);
    }
}

//! Block segmentation and classification.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::service::QuoteCheck;

static HEADING_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#{1,6}) .+").expect("valid heading pattern"));

// Dot matches newline so fenced blocks may span lines
static CODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^```.+```$").expect("valid code pattern"));

static QUOTE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^> .+").expect("valid quote pattern"));

static UNORDERED_ITEM_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\*|-) .+").expect("valid unordered list pattern"));

static ORDERED_ITEM_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)\. .+").expect("valid ordered list pattern"));

/// Structural type of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
    Paragraph,
}

impl BlockType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::Heading => "heading",
            BlockType::Code => "code",
            BlockType::Quote => "quote",
            BlockType::UnorderedList => "unordered_list",
            BlockType::OrderedList => "ordered_list",
            BlockType::Paragraph => "paragraph",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Split a document on blank lines into trimmed, non-empty blocks
pub fn segment_blocks(markdown: &str) -> Vec<&str> {
    markdown
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classify a block with the default (first line) quote check
pub fn classify(block: &str) -> BlockType {
    classify_with(block, QuoteCheck::default())
}

/// Classify a block; the first matching type wins
pub fn classify_with(block: &str, quote_check: QuoteCheck) -> BlockType {
    if HEADING_PATTERN.is_match(block) {
        BlockType::Heading
    } else if CODE_PATTERN.is_match(block) {
        BlockType::Code
    } else if is_quote(block, quote_check) {
        BlockType::Quote
    } else if is_unordered_list(block) {
        BlockType::UnorderedList
    } else if is_ordered_list(block) {
        BlockType::OrderedList
    } else {
        BlockType::Paragraph
    }
}

/// Number of leading `#` characters of a heading block
pub(crate) fn heading_level(block: &str) -> usize {
    HEADING_PATTERN
        .captures(block)
        .and_then(|caps| caps.get(1))
        .map_or(0, |hashes| hashes.len())
}

/// Non-blank lines of a block
pub(crate) fn block_lines(block: &str) -> impl Iterator<Item = &str> {
    block.lines().filter(|line| !line.trim().is_empty())
}

fn is_quote(block: &str, quote_check: QuoteCheck) -> bool {
    match quote_check {
        QuoteCheck::FirstLine => QUOTE_PATTERN.is_match(block),
        QuoteCheck::EveryLine => all_lines_match(block, |line| QUOTE_PATTERN.is_match(line)),
    }
}

fn is_unordered_list(block: &str) -> bool {
    all_lines_match(block, |line| UNORDERED_ITEM_PATTERN.is_match(line))
}

fn is_ordered_list(block: &str) -> bool {
    let mut count = 0;
    for (i, line) in block_lines(block).enumerate() {
        let numbered = ORDERED_ITEM_PATTERN
            .captures(line)
            .is_some_and(|caps| caps[1] == (i + 1).to_string());
        if !numbered {
            return false;
        }
        count += 1;
    }
    count > 0
}

fn all_lines_match(block: &str, matches: impl Fn(&str) -> bool) -> bool {
    let mut count = 0;
    for line in block_lines(block) {
        if !matches(line) {
            return false;
        }
        count += 1;
    }
    count > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_blocks() {
        let markdown = "# This is a heading\n\nThis is a paragraph of text. It has some **bold** and *italic* words inside of it.\n\n* This is the first list item in a list block\n* This is a list item\n* This is another list item";
        assert_eq!(
            segment_blocks(markdown),
            vec![
                "# This is a heading",
                "This is a paragraph of text. It has some **bold** and *italic* words inside of it.",
                "* This is the first list item in a list block\n* This is a list item\n* This is another list item",
            ]
        );
    }

    #[test]
    fn test_segment_blocks_trims_and_drops_empty() {
        assert_eq!(segment_blocks("a\n\nb\n\n\n  c  "), vec!["a", "b", "c"]);
        assert_eq!(segment_blocks("  # This is a heading "), vec!["# This is a heading"]);
        assert_eq!(
            segment_blocks("  # This is a heading\n\n        \n          \n        "),
            vec!["# This is a heading"]
        );
    }

    #[test]
    fn test_segment_blocks_empty() {
        assert!(segment_blocks("").is_empty());
        assert!(segment_blocks(" \n\n        \n          \n        ").is_empty());
    }

    #[test]
    fn test_heading() {
        assert_eq!(classify("# Title"), BlockType::Heading);
        assert_eq!(classify("## This is a heading."), BlockType::Heading);
        assert_eq!(classify("###### Six"), BlockType::Heading);
        assert_eq!(classify("####### Seven"), BlockType::Paragraph);
        assert_eq!(classify("#Title"), BlockType::Paragraph);
        assert_eq!(classify("-# This is a heading."), BlockType::Paragraph);
    }

    #[test]
    fn test_heading_level() {
        assert_eq!(heading_level("# One"), 1);
        assert_eq!(heading_level("### Three"), 3);
        assert_eq!(heading_level("plain"), 0);
    }

    #[test]
    fn test_code() {
        assert_eq!(classify("```This is a code block```"), BlockType::Code);
        assert_eq!(classify("```\nfn main() {}\n```"), BlockType::Code);
        assert_eq!(classify("``This is an invalid code block```"), BlockType::Paragraph);
        assert_eq!(classify("``````"), BlockType::Paragraph);
    }

    #[test]
    fn test_quote() {
        assert_eq!(classify("> This is a quote"), BlockType::Quote);
        assert_eq!(classify(">This is an invalid quote"), BlockType::Paragraph);
    }

    #[test]
    fn test_quote_first_line_only() {
        let block = "> first\nsecond";
        assert_eq!(classify(block), BlockType::Quote);
        assert_eq!(classify_with(block, QuoteCheck::EveryLine), BlockType::Paragraph);
        assert_eq!(
            classify_with("> first\n> second", QuoteCheck::EveryLine),
            BlockType::Quote
        );
    }

    #[test]
    fn test_unordered_list() {
        let block = "\n* This is a list item\n* Another item\n- Yet another item\n* Some other text\n- And one more item\n";
        assert_eq!(classify(block), BlockType::UnorderedList);

        let invalid = "\n* This is a list item\n* Another item\n-Yet another item\n* Some other text\n- And one more item\n";
        assert_eq!(classify(invalid), BlockType::Paragraph);
    }

    #[test]
    fn test_ordered_list() {
        let block = "\n1. This is a list item\n2. Another item\n3. Yet another item\n4. Some other text\n5. And one more item\n";
        assert_eq!(classify(block), BlockType::OrderedList);
        assert_eq!(classify("1. a\n2. b"), BlockType::OrderedList);

        let invalid = "\n1. This is a list item\n2 Another item\n3. Yet another item\n";
        assert_eq!(classify(invalid), BlockType::Paragraph);
    }

    #[test]
    fn test_ordered_list_numbering() {
        assert_eq!(classify("1. a\n3. b"), BlockType::Paragraph);
        assert_eq!(classify("2. a\n3. b"), BlockType::Paragraph);
        assert_eq!(classify("01. a"), BlockType::Paragraph);

        let ten: Vec<String> = (1..=10).map(|n| format!("{n}. item")).collect();
        assert_eq!(classify(&ten.join("\n")), BlockType::OrderedList);
    }

    #[test]
    fn test_paragraph() {
        assert_eq!(classify("This is a paragraph."), BlockType::Paragraph);
    }

    #[test]
    fn test_display() {
        assert_eq!(BlockType::UnorderedList.to_string(), "unordered_list");
        assert_eq!(BlockType::Heading.to_string(), "heading");
    }
}

//! Inline tokenizer.
//!
//! Turns a run of text into typed spans. Formatting never nests: the stages
//! run bold, italic, code, image, link, and each stage only splits spans that
//! are still plain.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{MarkdownError, Result};

static IMAGE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").expect("valid image pattern"));

static LINK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("valid link pattern"));

/// Kind of inline span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl SpanKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpanKind::Plain => "text",
            SpanKind::Bold => "bold",
            SpanKind::Italic => "italic",
            SpanKind::Code => "code",
            SpanKind::Link => "link",
            SpanKind::Image => "image",
        }
    }
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpanKind {
    type Err = MarkdownError;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "text" => Ok(SpanKind::Plain),
            "bold" => Ok(SpanKind::Bold),
            "italic" => Ok(SpanKind::Italic),
            "code" => Ok(SpanKind::Code),
            "link" => Ok(SpanKind::Link),
            "image" => Ok(SpanKind::Image),
            other => Err(MarkdownError::UnknownSpanKind(other.to_string())),
        }
    }
}

/// A typed fragment of inline text.
///
/// `url` is set for links and images only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub content: String,
    pub kind: SpanKind,
    pub url: Option<String>,
}

impl TextSpan {
    pub fn new(content: &str, kind: SpanKind) -> Self {
        Self {
            content: content.to_string(),
            kind,
            url: None,
        }
    }

    pub fn plain(content: &str) -> Self {
        Self::new(content, SpanKind::Plain)
    }

    pub fn link(content: &str, url: &str) -> Self {
        Self {
            content: content.to_string(),
            kind: SpanKind::Link,
            url: Some(url.to_string()),
        }
    }

    pub fn image(alt: &str, url: &str) -> Self {
        Self {
            content: alt.to_string(),
            kind: SpanKind::Image,
            url: Some(url.to_string()),
        }
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }
}

/// Tokenize a text run into spans
pub fn text_to_spans(text: &str) -> Result<Vec<TextSpan>> {
    let spans = vec![TextSpan::plain(text)];
    let spans = split_delimiter(spans, "**", SpanKind::Bold)?;
    let spans = split_delimiter(spans, "*", SpanKind::Italic)?;
    let spans = split_delimiter(spans, "`", SpanKind::Code)?;
    let spans = split_images(spans);
    let spans = split_links(spans);

    tracing::trace!(spans = spans.len(), "tokenized text run");
    Ok(spans)
}

/// Split plain spans on `delimiter`, marking enclosed text as `kind`.
///
/// Segments alternate plain/`kind` starting with plain; empty segments are
/// dropped. An odd number of delimiters fails with `MalformedInline`.
pub fn split_delimiter(spans: Vec<TextSpan>, delimiter: &str, kind: SpanKind) -> Result<Vec<TextSpan>> {
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            result.push(span);
            continue;
        }

        let segments: Vec<&str> = span.content.split(delimiter).collect();
        if segments.len() % 2 == 0 {
            return Err(MarkdownError::MalformedInline {
                delimiter: delimiter.to_string(),
                text: span.content.clone(),
            });
        }

        for (i, segment) in segments.into_iter().enumerate() {
            if segment.is_empty() {
                continue;
            }
            let segment_kind = if i % 2 == 0 { SpanKind::Plain } else { kind };
            result.push(TextSpan::new(segment, segment_kind));
        }
    }

    Ok(result)
}

/// All `![alt](url)` occurrences, left to right
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    extract(&IMAGE_PATTERN, text)
}

/// All `[label](url)` occurrences, left to right
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    extract(&LINK_PATTERN, text)
}

/// Split image syntax out of plain spans
pub fn split_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_pattern(spans, &IMAGE_PATTERN, TextSpan::image)
}

/// Split link syntax out of plain spans
pub fn split_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_pattern(spans, &LINK_PATTERN, TextSpan::link)
}

fn extract(pattern: &Regex, text: &str) -> Vec<(String, String)> {
    pattern
        .captures_iter(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

fn split_pattern(
    spans: Vec<TextSpan>,
    pattern: &Regex,
    make: fn(&str, &str) -> TextSpan,
) -> Vec<TextSpan> {
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() || !pattern.is_match(&span.content) {
            result.push(span);
            continue;
        }

        let text = span.content.as_str();
        let mut last = 0;
        for caps in pattern.captures_iter(text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            if whole.start() > last {
                result.push(TextSpan::plain(&text[last..whole.start()]));
            }
            result.push(make(&caps[1], &caps[2]));
            last = whole.end();
        }
        if last < text.len() {
            result.push(TextSpan::plain(&text[last..]));
        }
    }

    result
}

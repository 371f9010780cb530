//! Deduplicated URI generation.
//!
//! A [`UriGenerator`] turns text (or a node's text content) into a readable
//! URI below a base URI. Every call issues a new numeric suffix for the
//! composed candidate, so repeated calls never return the same URI.
//!
//! ```rust
//! use wikitree_uri::UriGenerator;
//!
//! let mut generator = UriGenerator::new();
//! assert_eq!(
//!     generator.generate("http://x/Page", "Hello, World!"),
//!     "http://x/Page__Hello_World__1"
//! );
//! assert_eq!(
//!     generator.generate("http://x/Page", "Hello, World!"),
//!     "http://x/Page__Hello_World__2"
//! );
//! ```

use std::collections::HashMap;
use std::ops::ControlFlow;

use tracing::debug;
use wikitree_ast::visitor::{VisitResult, Visitor, walk_node};
use wikitree_ast::WikiNode;

use crate::UriConfig;
use crate::normalize::normalize_text;

const SEPARATOR: &str = "__";

/// Mints URIs and remembers the last suffix issued per candidate.
#[derive(Debug, Clone)]
pub struct UriGenerator {
    max_text_chars: usize,
    issued: HashMap<String, u32>,
}

impl Default for UriGenerator {
    fn default() -> Self {
        Self::from_config(&UriConfig::default())
    }
}

impl UriGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &UriConfig) -> Self {
        Self {
            max_text_chars: config.max_text_chars,
            issued: HashMap::new(),
        }
    }

    /// Mints a URI from the text content of `node`.
    ///
    /// Templates and tables contribute no text. `None` mints from the base
    /// URI alone.
    pub fn generate_for_node(&mut self, base_uri: &str, node: Option<WikiNode<'_>>) -> String {
        let text = node.map(contributed_text).unwrap_or_default();
        self.generate(base_uri, &text)
    }

    /// Mints a URI from `text`.
    pub fn generate(&mut self, base_uri: &str, text: &str) -> String {
        let candidate = if text.is_empty() {
            base_uri.to_string()
        } else {
            let normalized = normalize_text(text, self.max_text_chars);
            let suffix = trim_overlap(base_uri, &normalized);
            let suffix = suffix.strip_prefix('_').unwrap_or(suffix);
            format!("{base_uri}{SEPARATOR}{suffix}")
        };

        let issued = self.issued.entry(candidate.clone()).or_insert(0);
        *issued += 1;

        let uri = format!("{candidate}{SEPARATOR}{issued}");
        debug!("Minted {}", uri);
        uri
    }

    /// Number of distinct candidates seen so far.
    pub fn candidate_count(&self) -> usize {
        self.issued.len()
    }
}

/// Drops the start of `text` that repeats the tail of `base_uri`.
///
/// Candidate tails start right after the last `_` or `/` of the base and grow
/// leftwards one character at a time while shorter than `text`. The first
/// tail that equals the start of `text`, ignoring case, is removed.
fn trim_overlap<'t>(base_uri: &str, text: &'t str) -> &'t str {
    let base: Vec<char> = base_uri.chars().collect();
    let text_len = text.chars().count();
    let Some(separator) = base.iter().rposition(|&c| c == '_' || c == '/') else {
        return text;
    };

    let mut start = separator + 1;
    while start > 0 && base.len() - start < text_len {
        let tail = &base[start..];
        if tail
            .iter()
            .zip(text.chars())
            .all(|(&a, b)| eq_ignore_case(a, b))
        {
            let cut = text
                .char_indices()
                .nth(tail.len())
                .map_or(text.len(), |(offset, _)| offset);
            return &text[cut..];
        }
        start -= 1;
    }
    text
}

fn eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Concatenated text of `node`, skipping template and table subtrees.
pub fn contributed_text(node: WikiNode<'_>) -> String {
    let mut collector = TextCollector::default();
    let _ = walk_node(&mut collector, node);
    collector.text
}

#[derive(Default)]
struct TextCollector {
    text: String,
}

impl<'a> Visitor<'a> for TextCollector {
    fn visit_text(&mut self, node: WikiNode<'a>) -> VisitResult {
        if let Some(text) = node.text() {
            self.text.push_str(text);
        }
        ControlFlow::Continue(())
    }

    fn visit_template(&mut self, _node: WikiNode<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    fn visit_table(&mut self, _node: WikiNode<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }
}

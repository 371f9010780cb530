//! Markup reconstruction and plain-text rendering.

use crate::{NodeKind, WikiNode};

impl<'a> WikiNode<'a> {
    /// Reconstructs wiki markup for this subtree.
    ///
    /// The result is equivalent to the source span, not necessarily
    /// byte-identical to it.
    pub fn to_wiki_text(&self) -> String {
        let mut out = String::new();
        self.write_wiki_text(&mut out);
        out
    }

    /// Renders this subtree as plain text. Templates and parser functions
    /// are not expanded and render as nothing.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        self.write_plain_text(&mut out);
        out
    }

    fn write_children_wiki_text(&self, out: &mut String) {
        for child in self.children() {
            child.write_wiki_text(out);
        }
    }

    fn write_children_plain_text(&self, out: &mut String) {
        for child in self.children() {
            child.write_plain_text(out);
        }
    }

    fn write_wiki_text(&self, out: &mut String) {
        match self.kind() {
            NodeKind::Page(_) => self.write_children_wiki_text(out),
            NodeKind::Section { level, .. } => {
                let marker = "=".repeat(usize::from(*level));
                out.push_str(&marker);
                self.write_children_wiki_text(out);
                out.push_str(&marker);
            }
            NodeKind::Template { title } => {
                out.push_str("{{");
                out.push_str(title.decoded());
                for child in self.children() {
                    out.push('|');
                    child.write_wiki_text(out);
                }
                out.push_str("}}");
            }
            NodeKind::ParserFunction { name } => {
                out.push_str("{{#");
                out.push_str(name);
                out.push(':');
                for (i, child) in self.children().enumerate() {
                    if i > 0 {
                        out.push('|');
                    }
                    child.write_wiki_text(out);
                }
                out.push_str("}}");
            }
            NodeKind::Property { key } => {
                if key.parse::<u32>().is_err() {
                    out.push_str(key);
                    out.push('=');
                }
                self.write_children_wiki_text(out);
            }
            NodeKind::Text(text) => out.push_str(text),
            NodeKind::InternalLink { destination } => {
                out.push_str("[[");
                out.push_str(&destination.to_string());
                if self.has_children() {
                    out.push('|');
                    self.write_children_wiki_text(out);
                }
                out.push_str("]]");
            }
            NodeKind::ExternalLink { destination } => {
                out.push('[');
                out.push_str(destination);
                if self.has_children() {
                    out.push(' ');
                    self.write_children_wiki_text(out);
                }
                out.push(']');
            }
            NodeKind::Table { caption } => {
                out.push_str("{|\n");
                if let Some(caption) = caption {
                    out.push_str("|+ ");
                    out.push_str(caption);
                    out.push('\n');
                }
                self.write_children_wiki_text(out);
                out.push_str("|}");
            }
            NodeKind::TableRow => {
                out.push_str("|-\n");
                self.write_children_wiki_text(out);
            }
            NodeKind::TableCell => {
                out.push_str("| ");
                self.write_children_wiki_text(out);
                out.push('\n');
            }
        }
    }

    fn write_plain_text(&self, out: &mut String) {
        match self.kind() {
            NodeKind::Template { .. } | NodeKind::ParserFunction { .. } => {}
            NodeKind::Text(text) => out.push_str(text),
            NodeKind::InternalLink { destination } if !self.has_children() => {
                out.push_str(destination.decoded());
            }
            NodeKind::ExternalLink { destination } if !self.has_children() => {
                out.push_str(destination);
            }
            NodeKind::Table { .. } => {
                for row in self.children() {
                    row.write_plain_text(out);
                    out.push('\n');
                }
            }
            NodeKind::TableRow => {
                for (i, cell) in self.children().enumerate() {
                    if i > 0 {
                        out.push('\t');
                    }
                    cell.write_plain_text(out);
                }
            }
            _ => self.write_children_plain_text(out),
        }
    }
}

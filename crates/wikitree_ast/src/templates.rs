//! Template usage queries.

use std::ops::ControlFlow;

use crate::visitor::{VisitResult, Visitor, walk_children, walk_node};
use crate::{NodeKind, WikiNode};

/// Collects template nodes in document order.
struct TemplateCollector<'n, 'a> {
    names: &'n [&'n str],
    stop_at_first: bool,
    found: Vec<WikiNode<'a>>,
}

impl TemplateCollector<'_, '_> {
    fn matches(&self, node: &WikiNode<'_>) -> bool {
        match node.kind() {
            NodeKind::Template { title } => {
                self.names.is_empty() || self.names.iter().any(|name| *name == title.decoded())
            }
            _ => false,
        }
    }
}

impl<'a> Visitor<'a> for TemplateCollector<'_, 'a> {
    fn visit_template(&mut self, node: WikiNode<'a>) -> VisitResult {
        if self.matches(&node) {
            self.found.push(node);
            if self.stop_at_first {
                return ControlFlow::Break(());
            }
        }
        walk_children(self, node)
    }
}

/// Returns `node` and its descendants that are templates named in `names`,
/// in pre-order. An empty `names` matches every template.
///
/// Matching templates do not stop the descent: templates nested in
/// arguments are found too.
pub fn collect_templates<'a>(node: WikiNode<'a>, names: &[&str]) -> Vec<WikiNode<'a>> {
    let mut collector = TemplateCollector {
        names,
        stop_at_first: false,
        found: Vec::new(),
    };
    let _ = walk_node(&mut collector, node);
    collector.found
}

impl<'a> WikiNode<'a> {
    /// Decoded titles of the templates [`collect_templates`] finds.
    pub fn contained_template_names(&self, names: &[&str]) -> Vec<&'a str> {
        collect_templates(*self, names)
            .into_iter()
            .filter_map(|node| match node.kind() {
                NodeKind::Template { title } => Some(title.decoded()),
                _ => None,
            })
            .collect()
    }

    pub fn contained_template_nodes(&self, names: &[&str]) -> Vec<WikiNode<'a>> {
        collect_templates(*self, names)
    }

    /// Returns true if this subtree uses any template named in `names`, or any
    /// template at all when `names` is empty.
    pub fn has_template(&self, names: &[&str]) -> bool {
        let mut collector = TemplateCollector {
            names,
            stop_at_first: true,
            found: Vec::new(),
        };
        walk_node(&mut collector, *self).is_break()
    }

    /// The argument of a template or parser function with the given key.
    pub fn property(&self, key: &str) -> Option<WikiNode<'a>> {
        if !matches!(
            self.kind(),
            NodeKind::Template { .. } | NodeKind::ParserFunction { .. }
        ) {
            return None;
        }
        self.children().find(|child| match child.kind() {
            NodeKind::Property { key: k } => k == key,
            _ => false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NodeArena, NodeId, PageData, WikiTitle};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    struct Sample {
        arena: NodeArena,
        page: NodeId,
        infobox: NodeId,
        flag: NodeId,
        cite: NodeId,
    }

    /// Page -> [Infobox(country = Flag), Text, Cite]
    fn sample() -> Sample {
        let mut arena = NodeArena::new();
        let flag = arena.alloc_leaf(NodeKind::template(WikiTitle::template("Flag")), 2);
        let country = arena
            .alloc_parent(NodeKind::property("country"), 2, &[flag])
            .unwrap();
        let name = arena.alloc_text(2, "Ann");
        let name = arena.alloc_parent(NodeKind::property("name"), 2, &[name]).unwrap();
        let infobox = arena
            .alloc_parent(
                NodeKind::template(WikiTitle::template("Infobox")),
                2,
                &[name, country],
            )
            .unwrap();
        let text = arena.alloc_text(3, "Some text");
        let cite = arena.alloc_leaf(NodeKind::template(WikiTitle::template("Cite web")), 3);
        let page = arena
            .alloc_page(
                PageData::new(WikiTitle::main("Ann"), 1, 1),
                &[infobox, text, cite],
            )
            .unwrap();
        Sample {
            arena,
            page,
            infobox,
            flag,
            cite,
        }
    }

    fn ids(nodes: Vec<WikiNode<'_>>) -> Vec<NodeId> {
        nodes.into_iter().map(|n| n.node_id()).collect()
    }

    #[test]
    fn test_collect_all_in_pre_order() {
        let s = sample();
        let found = collect_templates(s.arena.node(s.page), &[]);
        assert_eq!(ids(found), vec![s.infobox, s.flag, s.cite]);
    }

    #[test]
    fn test_collect_by_name_descends_into_non_matching() {
        let s = sample();
        let found = collect_templates(s.arena.node(s.page), &["Flag"]);
        assert_eq!(ids(found), vec![s.flag]);
    }

    #[test]
    fn test_collect_includes_start_node() {
        let s = sample();
        let found = collect_templates(s.arena.node(s.infobox), &[]);
        assert_eq!(ids(found), vec![s.infobox, s.flag]);
    }

    #[test]
    fn test_contained_template_names() {
        let s = sample();
        let page = s.arena.node(s.page);
        assert_eq!(
            page.contained_template_names(&[]),
            vec!["Infobox", "Flag", "Cite web"]
        );
        assert_eq!(
            page.contained_template_names(&["Cite web", "Infobox"]),
            vec!["Infobox", "Cite web"]
        );
        assert_eq!(
            ids(page.contained_template_nodes(&["Infobox"])),
            vec![s.infobox]
        );
    }

    #[rstest]
    #[case::any(&[], true)]
    #[case::nested(&["Flag"], true)]
    #[case::missing(&["Coord"], false)]
    fn test_has_template(#[case] names: &[&str], #[case] expected: bool) {
        let s = sample();
        assert_eq!(s.arena.node(s.page).has_template(names), expected);
    }

    #[test]
    fn test_has_template_without_templates() {
        let mut arena = NodeArena::new();
        let text = arena.alloc_text(1, "plain");
        assert!(!arena.node(text).has_template(&[]));
    }

    #[test]
    fn test_property_lookup() {
        let s = sample();
        let infobox = s.arena.node(s.infobox);

        assert_eq!(
            infobox.property("name").and_then(|p| p.retrieve_text()),
            Some("Ann")
        );
        assert!(infobox.property("missing").is_none());
        assert!(s.arena.node(s.page).property("name").is_none());
    }
}

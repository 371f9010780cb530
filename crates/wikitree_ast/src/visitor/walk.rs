//! Walk functions for tree traversal.

use std::ops::ControlFlow;

use crate::{NodeType, WikiNode};

use super::visit::{VisitResult, Visitor};

/// Walks a node: `enter_node`, the type-specific `visit_*` method, then
/// `exit_node`.
pub fn walk_node<'a, V>(visitor: &mut V, node: WikiNode<'a>) -> VisitResult
where
    V: Visitor<'a>,
{
    visitor.enter_node(node)?;

    match node.node_type() {
        NodeType::Page => visitor.visit_page(node),
        NodeType::Section => visitor.visit_section(node),
        NodeType::Template => visitor.visit_template(node),
        NodeType::Property => visitor.visit_property(node),
        NodeType::Text => visitor.visit_text(node),
        NodeType::InternalLink => visitor.visit_internal_link(node),
        NodeType::ExternalLink => visitor.visit_external_link(node),
        NodeType::Table => visitor.visit_table(node),
        NodeType::TableRow => visitor.visit_table_row(node),
        NodeType::TableCell => visitor.visit_table_cell(node),
        NodeType::ParserFunction => visitor.visit_parser_function(node),
    }?;

    visitor.exit_node(node)
}

/// Walks all children of a node in document order, stopping early on
/// `ControlFlow::Break`.
#[inline]
pub fn walk_children<'a, V>(visitor: &mut V, node: WikiNode<'a>) -> VisitResult
where
    V: Visitor<'a>,
{
    for child in node.children() {
        walk_node(visitor, child)?;
    }
    ControlFlow::Continue(())
}

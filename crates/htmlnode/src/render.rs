//! Node tree rendering
//!
//! Walks the tree depth first and appends markup to a single buffer.

use tracing::debug;

use crate::node::{LeafNode, Node, ParentNode};
use crate::props::Props;
use crate::{HtmlError, Result};

/// Render a node tree to an HTML string.
///
/// Fails if any node in the tree is missing a required part; nothing is
/// returned for the parts that did render.
pub fn render(node: &Node) -> Result<String> {
    let mut output = String::with_capacity(256);
    render_node(node, &mut output)?;
    Ok(output)
}

fn render_node(node: &Node, out: &mut String) -> Result<()> {
    match node {
        Node::Leaf(leaf) => render_leaf(leaf, out),
        Node::Parent(parent) => render_parent(parent, out),
    }
}

pub(crate) fn render_leaf(leaf: &LeafNode, out: &mut String) -> Result<()> {
    let Some(value) = leaf.value() else {
        debug!(tag = ?leaf.tag(), "leaf node has no value");
        return Err(HtmlError::InvalidValue(
            "leaf node requires a value".to_string(),
        ));
    };

    match leaf.tag() {
        None => out.push_str(value),
        Some(tag) => {
            open_tag(tag, leaf.props(), out);
            out.push_str(value);
            close_tag(tag, out);
        }
    }
    Ok(())
}

pub(crate) fn render_parent(parent: &ParentNode, out: &mut String) -> Result<()> {
    let Some(tag) = parent.tag() else {
        debug!("parent node has no tag");
        return Err(HtmlError::InvalidValue(
            "parent node requires a tag".to_string(),
        ));
    };
    let Some(children) = parent.children() else {
        debug!(tag, "parent node has no children");
        return Err(HtmlError::InvalidValue(
            "parent node requires children".to_string(),
        ));
    };

    open_tag(tag, parent.props(), out);
    for child in children {
        render_node(child, out)?;
    }
    close_tag(tag, out);
    Ok(())
}

fn open_tag(tag: &str, props: Option<&Props>, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    if let Some(props) = props {
        props.write_html(out);
    }
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

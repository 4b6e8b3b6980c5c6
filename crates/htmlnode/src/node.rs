//! HTML node tree.
//!
//! Nodes are built once and never mutated. Validation waits until a node
//! is turned into HTML, so construction never fails.

use std::fmt;

use crate::props::Props;
use crate::render;
use crate::Result;

/// Plain node record: optional tag, value, children and attributes.
///
/// This is the shape every node variant shares. It does not render by
/// itself; build a [`LeafNode`] or [`ParentNode`] for that, or convert one
/// into an `HtmlNode` to inspect it uniformly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlNode {
    tag: Option<String>,
    value: Option<String>,
    children: Option<Vec<HtmlNode>>,
    props: Option<Props>,
}

impl HtmlNode {
    pub fn new(
        tag: Option<&str>,
        value: Option<&str>,
        children: Option<Vec<HtmlNode>>,
        props: Option<Props>,
    ) -> Self {
        Self {
            tag: tag.map(str::to_string),
            value: value.map(str::to_string),
            children,
            props,
        }
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn children(&self) -> Option<&[HtmlNode]> {
        self.children.as_deref()
    }

    pub fn props(&self) -> Option<&Props> {
        self.props.as_ref()
    }

    pub fn props_to_html(&self) -> String {
        props_to_html(self.props.as_ref())
    }
}

/// `HTMLNode(tag,value,children,props)`
impl fmt::Display for HtmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HTMLNode({},{},{},{})",
            OrNone(self.tag()),
            OrNone(self.value()),
            OrNone(self.children().map(NodeList)),
            OrNone(self.props())
        )
    }
}

/// A node without children that renders its own value.
///
/// A leaf with no tag renders as bare text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeafNode {
    tag: Option<String>,
    value: Option<String>,
    props: Option<Props>,
}

impl LeafNode {
    pub fn new(tag: Option<&str>, value: Option<&str>) -> Self {
        Self {
            tag: tag.map(str::to_string),
            value: value.map(str::to_string),
            props: None,
        }
    }

    /// Create a tagged leaf, e.g. `<b>value</b>`
    pub fn element(tag: &str, value: &str) -> Self {
        Self::new(Some(tag), Some(value))
    }

    /// Create a tagless leaf that renders as plain text
    pub fn text(value: &str) -> Self {
        Self::new(None, Some(value))
    }

    pub fn with_props(mut self, props: Props) -> Self {
        self.props = Some(props);
        self
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Always `None`
    pub fn children(&self) -> Option<&[Node]> {
        None
    }

    pub fn props(&self) -> Option<&Props> {
        self.props.as_ref()
    }

    pub fn props_to_html(&self) -> String {
        props_to_html(self.props.as_ref())
    }

    pub fn to_html(&self) -> Result<String> {
        let mut out = String::new();
        render::render_leaf(self, &mut out)?;
        Ok(out)
    }
}

/// `LeafNode(tag, value, props)`
impl fmt::Display for LeafNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LeafNode({}, {}, {})",
            OrNone(self.tag()),
            OrNone(self.value()),
            OrNone(self.props())
        )
    }
}

/// A tagged node that renders its children in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParentNode {
    tag: Option<String>,
    children: Option<Vec<Node>>,
    props: Option<Props>,
}

impl ParentNode {
    pub fn new(tag: Option<&str>, children: Option<Vec<Node>>) -> Self {
        Self {
            tag: tag.map(str::to_string),
            children,
            props: None,
        }
    }

    /// Create a parent with a tag and children, e.g. `<div>...</div>`
    pub fn element(tag: &str, children: Vec<Node>) -> Self {
        Self::new(Some(tag), Some(children))
    }

    pub fn with_props(mut self, props: Props) -> Self {
        self.props = Some(props);
        self
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Always `None`
    pub fn value(&self) -> Option<&str> {
        None
    }

    pub fn children(&self) -> Option<&[Node]> {
        self.children.as_deref()
    }

    pub fn props(&self) -> Option<&Props> {
        self.props.as_ref()
    }

    pub fn props_to_html(&self) -> String {
        props_to_html(self.props.as_ref())
    }

    pub fn to_html(&self) -> Result<String> {
        let mut out = String::with_capacity(256);
        render::render_parent(self, &mut out)?;
        Ok(out)
    }
}

/// `ParentNode(tag, children, props)`
impl fmt::Display for ParentNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ParentNode({}, {}, {})",
            OrNone(self.tag()),
            OrNone(self.children().map(NodeList)),
            OrNone(self.props())
        )
    }
}

/// Any renderable node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl Node {
    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Leaf(leaf) => leaf.tag(),
            Node::Parent(parent) => parent.tag(),
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Node::Leaf(leaf) => leaf.value(),
            Node::Parent(parent) => parent.value(),
        }
    }

    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Leaf(leaf) => leaf.children(),
            Node::Parent(parent) => parent.children(),
        }
    }

    pub fn props(&self) -> Option<&Props> {
        match self {
            Node::Leaf(leaf) => leaf.props(),
            Node::Parent(parent) => parent.props(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    pub fn props_to_html(&self) -> String {
        props_to_html(self.props())
    }

    pub fn to_html(&self) -> Result<String> {
        render::render(self)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Leaf(leaf) => fmt::Display::fmt(leaf, f),
            Node::Parent(parent) => fmt::Display::fmt(parent, f),
        }
    }
}

impl From<LeafNode> for Node {
    fn from(leaf: LeafNode) -> Self {
        Node::Leaf(leaf)
    }
}

impl From<ParentNode> for Node {
    fn from(parent: ParentNode) -> Self {
        Node::Parent(parent)
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        Self {
            tag: leaf.tag,
            value: leaf.value,
            children: None,
            props: leaf.props,
        }
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        Self {
            tag: parent.tag,
            value: None,
            children: parent
                .children
                .map(|children| children.into_iter().map(HtmlNode::from).collect()),
            props: parent.props,
        }
    }
}

impl From<Node> for HtmlNode {
    fn from(node: Node) -> Self {
        match node {
            Node::Leaf(leaf) => leaf.into(),
            Node::Parent(parent) => parent.into(),
        }
    }
}

fn props_to_html(props: Option<&Props>) -> String {
    props.map(Props::to_html).unwrap_or_default()
}

/// Displays the inner value, or `None` when absent
struct OrNone<T>(Option<T>);

impl<T: fmt::Display> fmt::Display for OrNone<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => fmt::Display::fmt(value, f),
            None => f.write_str("None"),
        }
    }
}

/// Displays a slice as `[a, b, c]`
struct NodeList<'a, T>(&'a [T]);

impl<T: fmt::Display> fmt::Display for NodeList<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(item, f)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::AttrValue;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_html_node_all_fields() {
        let child = HtmlNode::new(Some("span"), Some("child"), None, None);
        let node = HtmlNode::new(
            Some("div"),
            Some("parent"),
            Some(vec![child]),
            Some(Props::from([("class", "container")])),
        );

        assert_eq!(node.tag(), Some("div"));
        assert_eq!(node.value(), Some("parent"));
        assert_eq!(node.children().map(<[_]>::len), Some(1));
        assert_eq!(
            node.props().and_then(|p| p.get("class")),
            Some(&AttrValue::from("container"))
        );
    }

    #[test]
    fn test_html_node_nested_children() {
        let grandchild = HtmlNode::new(Some("b"), Some("bold"), None, None);
        let child = HtmlNode::new(Some("p"), None, Some(vec![grandchild]), None);
        let parent = HtmlNode::new(Some("div"), None, Some(vec![child]), None);

        let value = parent.children().unwrap()[0].children().unwrap()[0].value();
        assert_eq!(value, Some("bold"));
    }

    #[test]
    fn test_html_node_default_is_empty() {
        let node = HtmlNode::default();
        assert_eq!(node.tag(), None);
        assert_eq!(node.children(), None);
        assert_eq!(node.props_to_html(), "");
    }

    #[test]
    fn test_html_node_props_to_html() {
        let node = HtmlNode::new(None, None, None, Some(Props::from([("data-test", "test&<>")])));
        assert_eq!(node.props_to_html(), " data-test=\"test&<>\"");
    }

    #[test]
    fn test_html_node_display() {
        let node = HtmlNode::new(Some("div"), Some("hello"), None, Some(Props::from([("class", "btn")])));
        assert_eq!(node.to_string(), "HTMLNode(div,hello,None,{'class': 'btn'})");

        let node = HtmlNode::new(Some("div"), Some("hello"), None, None);
        assert_eq!(node.to_string(), "HTMLNode(div,hello,None,None)");
    }

    #[test]
    fn test_html_node_display_with_children() {
        let child = HtmlNode::new(Some("span"), Some("child"), None, None);
        let node = HtmlNode::new(
            Some("div"),
            Some("parent"),
            Some(vec![child]),
            Some(Props::from([("class", "container")])),
        );
        assert_eq!(
            node.to_string(),
            "HTMLNode(div,parent,[HTMLNode(span,child,None,None)],{'class': 'container'})"
        );
    }

    #[test]
    fn test_leaf_has_no_children() {
        let leaf = LeafNode::element("span", "Hello Leaf");
        assert_eq!(leaf.children(), None);
        assert_eq!(Node::from(leaf).children(), None);
    }

    #[test]
    fn test_leaf_display() {
        let leaf = LeafNode::new(Some("img"), None).with_props(Props::from([("src", "image.png")]));
        assert_eq!(leaf.to_string(), "LeafNode(img, None, {'src': 'image.png'})");
        assert_eq!(LeafNode::text("hi").to_string(), "LeafNode(None, hi, None)");
    }

    #[test]
    fn test_parent_display() {
        let parent = ParentNode::element("div", vec![LeafNode::element("span", "child").into()])
            .with_props(Props::from([("id", "main")]));
        assert_eq!(
            parent.to_string(),
            "ParentNode(div, [LeafNode(span, child, None)], {'id': 'main'})"
        );
        assert_eq!(ParentNode::new(None, None).to_string(), "ParentNode(None, None, None)");
        assert_eq!(ParentNode::element("ul", vec![]).to_string(), "ParentNode(ul, [], None)");
    }

    #[test]
    fn test_node_accessors_dispatch() {
        let node: Node = ParentNode::element("ul", vec![LeafNode::element("li", "one").into()]).into();
        assert!(!node.is_leaf());
        assert_eq!(node.tag(), Some("ul"));
        assert_eq!(node.value(), None);

        let children = node.children().unwrap();
        assert!(children[0].is_leaf());
        assert_eq!(children[0].value(), Some("one"));
    }

    #[test]
    fn test_into_html_node_keeps_fields() {
        let tree: Node = ParentNode::element(
            "div",
            vec![LeafNode::element("span", "child").into(), LeafNode::text("tail").into()],
        )
        .with_props(Props::from([("class", "container")]))
        .into();

        let record = HtmlNode::from(tree);
        assert_eq!(
            record.to_string(),
            "HTMLNode(div,None,[HTMLNode(span,child,None,None), HTMLNode(None,tail,None,None)],{'class': 'container'})"
        );
    }

    #[test]
    fn test_node_props_to_html() {
        let mut props = Props::new();
        props.insert("type", "checkbox");
        props.insert("checked", true);
        let node: Node = LeafNode::new(Some("input"), None).with_props(props).into();

        assert_eq!(node.props_to_html(), " type=\"checkbox\" checked=\"true\"");
    }
}

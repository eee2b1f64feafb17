//! A minimal in-memory document tree.

use std::fmt;

use log::debug;

use crate::{
    canvas::Canvas,
    error::{Error, Result},
    host::Host,
    screen,
};

/// Handle to a node of a [`Document`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node #{}", self.0)
    }
}

#[derive(Debug)]
pub enum Content {
    Element { tag: String },
    Canvas(Canvas),
    Text(String),
}

#[derive(Debug)]
struct Node {
    id: Option<String>,
    content: Content,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena of nodes rooted at a `body` element with id `"body"`.
#[derive(Debug)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    pub const BODY_ID: &'static str = "body";

    pub fn new() -> Self {
        let mut document = Self { nodes: Vec::new() };
        document.create_element("body", Some(Self::BODY_ID));
        document
    }

    pub fn body(&self) -> NodeId {
        NodeId(0)
    }

    pub fn create_element(&mut self, tag: &str, id: Option<&str>) -> NodeId {
        self.push(
            id,
            Content::Element {
                tag: tag.to_owned(),
            },
        )
    }

    fn push(&mut self, id: Option<&str>, content: Content) -> NodeId {
        let node = NodeId(self.nodes.len());
        self.nodes.push(Node {
            id: id.map(str::to_owned),
            content,
            parent: None,
            children: Vec::new(),
        });
        node
    }

    fn node(&self, node: NodeId) -> Result<&Node> {
        self.nodes.get(node.0).ok_or(Error::UnknownNode(node))
    }

    fn node_mut(&mut self, node: NodeId) -> Result<&mut Node> {
        self.nodes.get_mut(node.0).ok_or(Error::UnknownNode(node))
    }

    pub fn content(&self, node: NodeId) -> Result<&Content> {
        Ok(&self.node(node)?.content)
    }

    pub fn parent(&self, node: NodeId) -> Result<Option<NodeId>> {
        Ok(self.node(node)?.parent)
    }

    pub fn children(&self, node: NodeId) -> Result<&[NodeId]> {
        Ok(&self.node(node)?.children)
    }

    pub fn canvas(&self, node: NodeId) -> Result<&Canvas> {
        match self.content(node)? {
            Content::Canvas(canvas) => Ok(canvas),
            _ => Err(Error::NotACanvas(node)),
        }
    }

    /// Concatenated text of `node` and its descendants, in document order.
    pub fn text_content(&self, node: NodeId) -> Result<String> {
        let mut text = String::new();
        self.collect_text(node, &mut text)?;
        Ok(text)
    }

    fn collect_text(&self, node: NodeId, text: &mut String) -> Result<()> {
        let node = self.node(node)?;
        if let Content::Text(value) = &node.content {
            text.push_str(value);
        }
        for child in &node.children {
            self.collect_text(*child, text)?;
        }
        Ok(())
    }

    /// Whether `node` is `ancestor` or lies beneath it.
    fn is_inclusive_descendant(&self, node: NodeId, ancestor: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.nodes.get(id.0).and_then(|node| node.parent);
        }
        false
    }

    fn is_connected(&self, node: NodeId) -> bool {
        self.is_inclusive_descendant(node, self.body())
    }

    fn detach(&mut self, node: NodeId) -> Result<()> {
        if let Some(parent) = self.node_mut(node)?.parent.take() {
            self.node_mut(parent)?.children.retain(|child| *child != node);
        }
        Ok(())
    }

    fn check_insertion(&self, child: NodeId, parent: NodeId) -> Result<()> {
        self.node(child)?;
        let hierarchy_request = Error::HierarchyRequest { child, parent };
        if matches!(self.node(parent)?.content, Content::Text(_)) {
            return Err(hierarchy_request);
        }
        if self.is_inclusive_descendant(parent, child) {
            return Err(hierarchy_request);
        }
        Ok(())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for Document {
    type Surface = Canvas;

    fn lookup_element(&self, id: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId(index), node))
            .find(|(node_id, node)| node.id.as_deref() == Some(id) && self.is_connected(*node_id))
            .map(|(node_id, _)| node_id)
    }

    fn create_canvas(&mut self, id: &str, size: screen::Size) -> NodeId {
        debug!("creating canvas {:?} of {:?}", id, size);
        self.push(Some(id), Content::Canvas(Canvas::new(size)))
    }

    fn create_text(&mut self, text: &str) -> NodeId {
        self.push(None, Content::Text(text.to_owned()))
    }

    fn append_child(&mut self, child: NodeId, parent: NodeId) -> Result<()> {
        self.check_insertion(child, parent)?;
        self.detach(child)?;
        self.node_mut(parent)?.children.push(child);
        self.node_mut(child)?.parent = Some(parent);
        Ok(())
    }

    fn insert_before(&mut self, node: NodeId, reference: NodeId) -> Result<()> {
        let parent = self.node(reference)?.parent.ok_or(Error::Detached(reference))?;
        self.check_insertion(node, parent)?;
        if node == reference {
            return Ok(());
        }
        self.detach(node)?;

        let siblings = &mut self.node_mut(parent)?.children;
        let position = siblings
            .iter()
            .position(|sibling| *sibling == reference)
            .unwrap_or(siblings.len());
        siblings.insert(position, node);
        self.node_mut(node)?.parent = Some(parent);
        Ok(())
    }

    fn drawing_context(&mut self, element: NodeId) -> Result<&mut Canvas> {
        match &mut self.node_mut(element)?.content {
            Content::Canvas(canvas) => Ok(canvas),
            _ => Err(Error::NotACanvas(element)),
        }
    }
}

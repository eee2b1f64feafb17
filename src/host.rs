//! Capabilities the benchmark needs from its hosting environment.

use crate::{document::NodeId, error::Result, screen, surface::Surface};

pub trait Host {
    type Surface: Surface;

    /// Resolve a connected element by id.
    fn lookup_element(&self, id: &str) -> Option<NodeId>;

    /// Create a detached canvas element.
    fn create_canvas(&mut self, id: &str, size: screen::Size) -> NodeId;

    /// Create a detached text node.
    fn create_text(&mut self, text: &str) -> NodeId;

    fn append_child(&mut self, child: NodeId, parent: NodeId) -> Result<()>;

    /// Insert `node` into `reference`'s parent, just before `reference`.
    fn insert_before(&mut self, node: NodeId, reference: NodeId) -> Result<()>;

    /// The 2D drawing context of a canvas element.
    fn drawing_context(&mut self, element: NodeId) -> Result<&mut Self::Surface>;
}

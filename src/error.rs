use std::fmt;

use crate::document::NodeId;

pub type Result<T> = std::result::Result<T, Error>;

/// Faults reported by the host collaborators or a bad grid configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No connected element has this id.
    ElementNotFound(String),
    /// The node handle doesn't belong to this document.
    UnknownNode(NodeId),
    /// A drawing context was requested from something that isn't a canvas.
    NotACanvas(NodeId),
    /// The reference node of an insertion has no parent.
    Detached(NodeId),
    /// The insertion would put `child` under itself or under a text node.
    HierarchyRequest { child: NodeId, parent: NodeId },
    /// Logical grids need at least 2 cells per side.
    InvalidGrid { width: u32, height: u32 },
    ZeroScale,
    /// The scaled grid doesn't fit in `i32` device coordinates.
    GridTooLarge { width: u32, height: u32, scale: u32 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ElementNotFound(id) => write!(f, "no element with id {:?}", id),
            Error::UnknownNode(node) => write!(f, "{} is not part of this document", node),
            Error::NotACanvas(node) => write!(f, "{} has no 2d drawing context", node),
            Error::Detached(node) => write!(f, "{} has no parent", node),
            Error::HierarchyRequest { child, parent } => {
                write!(f, "{} cannot be inserted under {}", child, parent)
            }
            Error::InvalidGrid { width, height } => {
                write!(f, "grid {}x{} is too small", width, height)
            }
            Error::ZeroScale => write!(f, "device scale must be at least 1"),
            Error::GridTooLarge {
                width,
                height,
                scale,
            } => write!(f, "grid {}x{} at scale {} is too large", width, height, scale),
        }
    }
}

impl std::error::Error for Error {}

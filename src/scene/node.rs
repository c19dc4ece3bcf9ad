use crate::scene::NodeHandle;
use crate::scene::transform::Transform;
use glam::Affine3A;

/// A scene node: hierarchy links plus a transform.
///
/// Nodes form a tree through parent/child handles. Everything a motion
/// segment touches lives here; renderer-side components are some other
/// crate's business.
#[derive(Debug, Clone)]
pub struct Node {
    /// Display name, used in diagnostics.
    pub name: String,

    /// Parent node handle (None for root nodes)
    pub(crate) parent: Option<NodeHandle>,
    /// Child node handles
    pub(crate) children: Vec<NodeHandle>,

    /// Transform component (hot data accessed every frame)
    pub transform: Transform,
}

impl Node {
    /// Creates a detached node with an identity transform.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            parent: None,
            children: Vec::new(),
            transform: Transform::new(),
        }
    }

    /// Returns the parent node handle, if any.
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeHandle> {
        self.parent
    }

    /// Returns a read-only slice of child node handles.
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeHandle] {
        &self.children
    }

    /// Returns a reference to the world transformation matrix.
    ///
    /// Valid after the owning [`SceneGraph`](crate::scene::SceneGraph) has
    /// refreshed this node (`update_world` or `refresh_world`).
    #[inline]
    #[must_use]
    pub fn world_matrix(&self) -> &Affine3A {
        &self.transform.world_matrix
    }
}

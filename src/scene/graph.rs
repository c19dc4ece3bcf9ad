use glam::Affine3A;
use slotmap::SlotMap;
use smallvec::SmallVec;

use crate::errors::{Result, SlewError};
use crate::scene::node::Node;
use crate::scene::pose::Pose;
use crate::scene::NodeHandle;

/// Node storage plus the hierarchy operations the motion engine needs:
/// world-matrix propagation, world-pose capture, and parent-relative
/// world-pose writes.
///
/// # Hierarchy updates
///
/// `update_world` walks the whole graph with an explicit stack (deep chains
/// must not overflow). `refresh_world` recomputes just one ancestor chain,
/// which is what per-frame motion writes use: a target's parent world matrix
/// is refreshed immediately before converting a world pose into the parent's
/// local space.
pub struct SceneGraph {
    nodes: SlotMap<NodeHandle, Node>,
    root_nodes: Vec<NodeHandle>,
}

impl SceneGraph {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root_nodes: Vec::new(),
        }
    }

    /// Adds a node at the root level.
    pub fn add_node(&mut self, node: Node) -> NodeHandle {
        let handle = self.nodes.insert(node);
        self.root_nodes.push(handle);
        handle
    }

    /// Adds a node as a child of `parent`.
    pub fn add_to_parent(&mut self, child: Node, parent: NodeHandle) -> NodeHandle {
        let handle = self.nodes.insert(child);

        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(handle);
        }
        if let Some(c) = self.nodes.get_mut(handle) {
            c.parent = Some(parent);
        }

        handle
    }

    /// Re-parents `child` under `parent`, detaching it from its old parent
    /// (or the root list) first.
    pub fn attach(&mut self, child: NodeHandle, parent: NodeHandle) {
        if child == parent {
            log::warn!("Cannot attach node to itself!");
            return;
        }

        // 1. Detach from old
        let old_parent = self.nodes.get(child).and_then(|n| n.parent);
        if let Some(p) = old_parent {
            if let Some(n) = self.nodes.get_mut(p)
                && let Some(i) = n.children.iter().position(|&x| x == child)
            {
                n.children.remove(i);
            }
        } else if let Some(i) = self.root_nodes.iter().position(|&x| x == child) {
            self.root_nodes.remove(i);
        }

        // 2. Attach to new
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(child);
        } else {
            log::warn!("Parent node not found during attach!");
            self.root_nodes.push(child);
            return;
        }

        // 3. Update child
        if let Some(c) = self.nodes.get_mut(child) {
            c.parent = Some(parent);
            c.transform.mark_dirty();
        }
    }

    #[must_use]
    pub fn get_node(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle)
    }

    #[must_use]
    pub fn get_node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.nodes.get_mut(handle)
    }

    /// Updates the world matrices of every node, parents before children.
    pub fn update_world(&mut self) {
        let mut stack: Vec<(NodeHandle, Affine3A, bool)> = Vec::with_capacity(64);

        for &root in self.root_nodes.iter().rev() {
            stack.push((root, Affine3A::IDENTITY, false));
        }

        while let Some((handle, parent_world, parent_changed)) = stack.pop() {
            let Some(node) = self.nodes.get_mut(handle) else {
                continue;
            };

            let local_changed = node.transform.update_local_matrix();
            let needs_update = local_changed || parent_changed;

            if needs_update {
                let world = parent_world * *node.transform.local_matrix();
                node.transform.set_world_matrix(world);
            }

            let world = *node.transform.world_matrix();
            for i in (0..node.children.len()).rev() {
                stack.push((node.children[i], world, needs_update));
            }
        }
    }

    /// Recomputes the world matrices along the ancestor chain of `handle`
    /// (root first) and returns the node's fresh world matrix.
    pub fn refresh_world(&mut self, handle: NodeHandle) -> Result<Affine3A> {
        let mut chain: SmallVec<[NodeHandle; 8]> = SmallVec::new();
        let mut cursor = Some(handle);
        while let Some(h) = cursor {
            let node = self.nodes.get(h).ok_or(SlewError::NodeNotFound {
                context: "refresh_world",
            })?;
            chain.push(h);
            cursor = node.parent;
        }

        let mut world = Affine3A::IDENTITY;
        for &h in chain.iter().rev() {
            let Some(node) = self.nodes.get_mut(h) else {
                return Err(SlewError::NodeNotFound {
                    context: "refresh_world",
                });
            };
            node.transform.update_local_matrix();
            world = world * *node.transform.local_matrix();
            node.transform.set_world_matrix(world);
        }

        Ok(world)
    }

    /// Captures the current world pose of a node as a detached snapshot.
    pub fn world_pose(&mut self, handle: NodeHandle) -> Result<Pose> {
        let world = self.refresh_world(handle)?;
        Ok(Pose::from_matrix(&world))
    }

    /// Writes a world-space pose onto `target`, expressed in the target's
    /// parent space.
    ///
    /// The world transform is composed from the pose and the target's own
    /// scale (scale passes through untouched), then converted by the inverse
    /// of the parent's freshly refreshed world matrix. A parentless target
    /// takes the world transform as its local transform.
    pub fn set_world_pose(&mut self, target: NodeHandle, pose: &Pose) -> Result<()> {
        let parent = self
            .nodes
            .get(target)
            .ok_or(SlewError::NodeNotFound {
                context: "set_world_pose target",
            })?
            .parent;

        let parent_world = match parent {
            Some(p) => Some(self.refresh_world(p)?),
            None => None,
        };

        let Some(node) = self.nodes.get_mut(target) else {
            return Err(SlewError::NodeNotFound {
                context: "set_world_pose target",
            });
        };

        let world = Affine3A::from_scale_rotation_translation(
            node.transform.scale,
            pose.rotation,
            pose.position,
        );
        let local = match parent_world {
            Some(parent_world) => parent_world.inverse() * world,
            None => world,
        };

        node.transform.apply_local_matrix(local);
        Ok(())
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

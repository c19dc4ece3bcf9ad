//! Scene-graph host for the motion engine.
//!
//! - [`Node`]: hierarchy node (parent/children + transform)
//! - [`Transform`]: TRS component with cached local/world matrices
//! - [`Pose`]: detached world-space position + orientation snapshot
//! - [`SceneGraph`]: node storage, hierarchy updates, world-pose capture
//!   and parent-relative world-pose writes

pub mod graph;
pub mod node;
pub mod pose;
pub mod transform;

pub use graph::SceneGraph;
pub use node::Node;
pub use pose::Pose;
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    pub struct NodeHandle;
}

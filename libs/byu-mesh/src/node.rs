//! # Scene Nodes
//!
//! Root container handed to downstream geometry stages.

use crate::mesh::Mesh;
use serde::{Deserialize, Serialize};

/// A child of a scene node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeContent {
    /// A finished mesh.
    Mesh(Mesh),
    /// A nested node.
    Node(RootNode),
}

/// Scene-graph root produced by an import.
///
/// # Example
///
/// ```rust
/// use byu_mesh::{Mesh, RootNode};
///
/// let mut root = RootNode::new("scene");
/// root.add_child(Mesh::new());
/// assert_eq!(root.meshes().count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RootNode {
    name: String,
    children: Vec<NodeContent>,
}

impl RootNode {
    /// Creates an empty named node.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Returns the node name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends a child.
    pub fn add_child(&mut self, child: impl Into<NodeContent>) {
        self.children.push(child.into());
    }

    /// Returns the direct children.
    pub fn children(&self) -> &[NodeContent] {
        &self.children
    }

    /// Iterates the meshes directly under this node.
    pub fn meshes(&self) -> impl Iterator<Item = &Mesh> {
        self.children.iter().filter_map(|child| match child {
            NodeContent::Mesh(mesh) => Some(mesh),
            NodeContent::Node(_) => None,
        })
    }

    /// Takes the mesh out of a node whose only child is a mesh.
    ///
    /// Returns the node unchanged otherwise.
    pub fn into_single_mesh(mut self) -> Result<Mesh, Self> {
        if self.children.len() != 1 {
            return Err(self);
        }
        match self.children.pop() {
            Some(NodeContent::Mesh(mesh)) => Ok(mesh),
            Some(other) => {
                self.children.push(other);
                Err(self)
            }
            None => Err(self),
        }
    }
}

impl From<Mesh> for NodeContent {
    fn from(mesh: Mesh) -> Self {
        NodeContent::Mesh(mesh)
    }
}

impl From<RootNode> for NodeContent {
    fn from(node: RootNode) -> Self {
        NodeContent::Node(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_root_node_children() {
        let mut root = RootNode::new("root");
        root.add_child(Mesh::new());
        root.add_child(RootNode::new("group"));
        assert_eq!(root.name(), "root");
        assert_eq!(root.children().len(), 2);
        assert_eq!(root.meshes().count(), 1);
    }

    #[test]
    fn test_into_single_mesh() {
        let mut mesh = Mesh::new();
        mesh.add_position(Vec3::X);
        let mut root = RootNode::new("root");
        root.add_child(mesh.clone());
        assert_eq!(root.into_single_mesh().unwrap(), mesh);
    }

    #[test]
    fn test_into_single_mesh_rejects_nested() {
        let mut root = RootNode::new("root");
        root.add_child(RootNode::new("group"));
        let root = root.into_single_mesh().unwrap_err();
        assert_eq!(root.children().len(), 1);
    }
}

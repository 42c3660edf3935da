//! Scene graph
//!
//! A flat slotmap of nodes linked into a tree by parent/child handles. Node
//! handles stay valid for the life of the graph; nothing in the frame loop
//! removes nodes.

use crate::error::{Result, SceneError};
use crate::transform::Transform;
use cue_animation::{Channel, TweenTarget};
use cue_core::Vec3;
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to a node in the scene graph
    pub struct NodeId;
}

/// Geometry descriptor for a drawable node (dimensions only)
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Box { width: f32, height: f32, depth: f32 },
    Cylinder { top: f32, bottom: f32, height: f32 },
    Sphere { radius: f32 },
    Plane { width: f32, height: f32 },
}

/// What a node is
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NodeKind {
    /// Transform-only container
    Group,
    /// Drawable with the given geometry
    Mesh(Shape),
}

/// A node in the scene graph
#[derive(Clone, Debug)]
pub struct Node {
    pub name: String,
    pub kind: NodeKind,
    pub transform: Transform,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Retained-mode scene graph
#[derive(Debug, Default)]
pub struct SceneGraph {
    nodes: SlotMap<NodeId, Node>,
    by_name: FxHashMap<String, NodeId>,
    roots: Vec<NodeId>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node at the root of the scene
    pub fn add(&mut self, name: &str, kind: NodeKind, transform: Transform) -> Result<NodeId> {
        let id = self.insert(name, kind, transform, None)?;
        self.roots.push(id);
        Ok(id)
    }

    /// Add a node under `parent`
    pub fn add_child(
        &mut self,
        parent: NodeId,
        name: &str,
        kind: NodeKind,
        transform: Transform,
    ) -> Result<NodeId> {
        if !self.nodes.contains_key(parent) {
            return Err(SceneError::MissingNode("parent"));
        }
        let id = self.insert(name, kind, transform, Some(parent))?;
        self.nodes[parent].children.push(id);
        Ok(id)
    }

    fn insert(
        &mut self,
        name: &str,
        kind: NodeKind,
        transform: Transform,
        parent: Option<NodeId>,
    ) -> Result<NodeId> {
        if self.by_name.contains_key(name) {
            return Err(SceneError::DuplicateName(name.to_string()));
        }
        let id = self.nodes.insert(Node {
            name: name.to_string(),
            kind,
            transform,
            parent,
            children: Vec::new(),
        });
        self.by_name.insert(name.to_string(), id);
        tracing::trace!(name, ?kind, "scene node added");
        Ok(id)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// Look a node up by name
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    pub fn transform(&self, id: NodeId) -> Option<&Transform> {
        self.nodes.get(id).map(|node| &node.transform)
    }

    pub fn transform_mut(&mut self, id: NodeId) -> Option<&mut Transform> {
        self.nodes.get_mut(id).map(|node| &mut node.transform)
    }

    /// Position of a node's origin in scene space
    pub fn world_position(&self, id: NodeId) -> Option<Vec3> {
        let mut point = Vec3::ZERO;
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.nodes.get(node_id)?;
            point = node.transform.apply(point);
            current = node.parent;
        }
        Some(point)
    }

    /// Top-level nodes in insertion order
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Number of drawable nodes
    pub fn mesh_count(&self) -> usize {
        self.nodes
            .values()
            .filter(|node| matches!(node.kind, NodeKind::Mesh(_)))
            .count()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl TweenTarget<NodeId> for SceneGraph {
    fn read(&self, key: NodeId, channel: Channel) -> Option<f32> {
        self.transform(key).map(|t| t.channel(channel))
    }

    fn write(&mut self, key: NodeId, channel: Channel, value: f32) -> bool {
        match self.transform_mut(key) {
            Some(transform) => {
                transform.set_channel(channel, value);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_find() {
        let mut graph = SceneGraph::new();
        let group = graph
            .add("balls", NodeKind::Group, Transform::default())
            .unwrap();
        let ball = graph
            .add_child(
                group,
                "ball-1",
                NodeKind::Mesh(Shape::Sphere { radius: 0.2 }),
                Transform::from_position(Vec3::new(3.0, 2.2, 0.0)),
            )
            .unwrap();

        assert_eq!(graph.find("balls"), Some(group));
        assert_eq!(graph.get(ball).unwrap().parent(), Some(group));
        assert_eq!(graph.get(group).unwrap().children(), &[ball]);
        assert_eq!(graph.roots(), &[group]);
        assert_eq!(graph.mesh_count(), 1);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut graph = SceneGraph::new();
        graph.add("stick", NodeKind::Group, Transform::default()).unwrap();
        assert_eq!(
            graph
                .add("stick", NodeKind::Group, Transform::default())
                .unwrap_err(),
            SceneError::DuplicateName("stick".to_string())
        );
    }

    #[test]
    fn test_world_position_follows_group() {
        let mut graph = SceneGraph::new();
        let group = graph
            .add("balls", NodeKind::Group, Transform::default())
            .unwrap();
        let ball = graph
            .add_child(
                group,
                "ball-1",
                NodeKind::Mesh(Shape::Sphere { radius: 0.2 }),
                Transform::from_position(Vec3::new(3.0, 2.2, 0.0)),
            )
            .unwrap();

        graph.write(group, Channel::PositionX, -8.0);
        let world = graph.world_position(ball).unwrap();
        assert!(world.distance(Vec3::new(-5.0, 2.2, 0.0)) < 1e-5);
    }

    #[test]
    fn test_tween_target_unknown_key() {
        let mut graph = SceneGraph::new();
        let id = graph.add("a", NodeKind::Group, Transform::default()).unwrap();
        let mut other = SceneGraph::new();
        assert_eq!(other.read(id, Channel::PositionX), None);
        assert!(!other.write(id, Channel::PositionX, 1.0));
        assert_eq!(graph.read(id, Channel::ScaleY), Some(1.0));
    }
}

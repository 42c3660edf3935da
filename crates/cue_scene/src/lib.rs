//! Cue Scene
//!
//! The scene-construction collaborator. Only transforms are modelled: nodes
//! carry a name, a shape descriptor and a local transform, and the graph
//! exposes them to the tween engine as animatable channels.
//!
//! Geometry, materials, textures and lights belong to whatever renderer draws
//! the graph and are not represented here.

pub mod camera;
pub mod error;
pub mod graph;
pub mod table;
pub mod transform;

pub use camera::{Camera, CameraControls, OrbitControls};
pub use error::{Result, SceneError};
pub use graph::{Node, NodeId, NodeKind, SceneGraph, Shape};
pub use table::{build_table, TableHandles};
pub use transform::Transform;

//! Billiards table layout
//!
//! Builds the static table, its pockets, the cue stick and the ball group and
//! returns handles to everything the frame loop or a renderer may need.

use crate::error::Result;
use crate::graph::{NodeId, NodeKind, SceneGraph, Shape};
use crate::transform::Transform;
use cue_core::Vec3;
use std::f32::consts::FRAC_PI_2;

/// Where the cue stick sits before the frame loop moves it
pub const STICK_POSITION: Vec3 = Vec3::new(-3.0, 2.5, 12.0);

/// Stick orientation, in radians
pub const STICK_ROTATION: Vec3 = Vec3::new(30.0, 15.0, 0.0);

/// Ball positions inside the ball group
pub const BALL_POSITIONS: [Vec3; 2] = [Vec3::new(3.0, 2.2, 0.0), Vec3::new(3.0, 2.2, 1.0)];

/// Pocket centres, corners first then the two side pockets
pub const POCKET_POSITIONS: [Vec3; 6] = [
    Vec3::new(5.7, 2.0, 3.4),
    Vec3::new(-5.7, 2.0, -3.4),
    Vec3::new(5.7, 2.0, -3.4),
    Vec3::new(-5.7, 2.0, 3.4),
    Vec3::new(0.0, 2.0, -3.4),
    Vec3::new(0.0, 2.0, 3.4),
];

const BALL_RADIUS: f32 = 0.2;

/// Handles to the nodes created by [`build_table`]
#[derive(Clone, Debug)]
pub struct TableHandles {
    pub ground: NodeId,
    pub pool: NodeId,
    /// Four rails followed by the table top
    pub walls: Vec<NodeId>,
    pub water: NodeId,
    pub pockets: NodeId,
    pub pocket_nodes: Vec<NodeId>,
    pub stick: NodeId,
    pub balls: NodeId,
    pub ball_nodes: Vec<NodeId>,
}

/// Populate `graph` with the billiards scene
pub fn build_table(graph: &mut SceneGraph) -> Result<TableHandles> {
    let ground = graph.add(
        "ground",
        NodeKind::Mesh(Shape::Plane {
            width: 40.0,
            height: 40.0,
        }),
        Transform::default().with_rotation(Vec3::new(-FRAC_PI_2, 0.0, 0.0)),
    )?;

    let pool = graph.add("pool", NodeKind::Group, Transform::default())?;
    let wall_specs = [
        ("wall-east", Vec3::new(0.1, 2.0, 6.0), Vec3::new(5.0, 1.0, 0.0)),
        ("wall-west", Vec3::new(0.1, 2.0, 6.0), Vec3::new(-5.0, 1.0, 0.0)),
        ("wall-north", Vec3::new(10.0, 2.0, 0.1), Vec3::new(0.0, 1.0, -3.0)),
        ("wall-south", Vec3::new(10.0, 2.0, 0.1), Vec3::new(0.0, 1.0, 3.0)),
        ("table-top", Vec3::new(12.0, 0.1, 7.0), Vec3::new(0.0, 2.0, 0.0)),
    ];
    let mut walls = Vec::with_capacity(wall_specs.len());
    for (name, size, position) in wall_specs {
        walls.push(graph.add_child(
            pool,
            name,
            NodeKind::Mesh(Shape::Box {
                width: size.x,
                height: size.y,
                depth: size.z,
            }),
            Transform::from_position(position),
        )?);
    }
    let water = graph.add_child(
        pool,
        "water",
        NodeKind::Mesh(Shape::Plane {
            width: 10.0,
            height: 6.0,
        }),
        Transform::from_position(Vec3::new(0.0, 1.5, 0.0))
            .with_rotation(Vec3::new(-FRAC_PI_2, 0.0, 0.0)),
    )?;

    let pockets = graph.add("pockets", NodeKind::Group, Transform::default())?;
    let mut pocket_nodes = Vec::with_capacity(POCKET_POSITIONS.len());
    for (i, position) in POCKET_POSITIONS.iter().enumerate() {
        pocket_nodes.push(graph.add_child(
            pockets,
            &format!("pocket-{}", i + 1),
            NodeKind::Mesh(Shape::Cylinder {
                top: 0.1,
                bottom: 0.1,
                height: 0.3,
            }),
            Transform::from_position(*position),
        )?);
    }

    let stick = graph.add(
        "stick",
        NodeKind::Mesh(Shape::Cylinder {
            top: 0.1,
            bottom: 0.0,
            height: 5.0,
        }),
        Transform::from_position(STICK_POSITION).with_rotation(STICK_ROTATION),
    )?;

    let balls = graph.add("balls", NodeKind::Group, Transform::default())?;
    let mut ball_nodes = Vec::with_capacity(BALL_POSITIONS.len());
    for (i, position) in BALL_POSITIONS.iter().enumerate() {
        ball_nodes.push(graph.add_child(
            balls,
            &format!("ball-{}", i + 1),
            NodeKind::Mesh(Shape::Sphere {
                radius: BALL_RADIUS,
            }),
            Transform::from_position(*position),
        )?);
    }

    tracing::info!(
        nodes = graph.len(),
        meshes = graph.mesh_count(),
        "billiards table built"
    );

    Ok(TableHandles {
        ground,
        pool,
        walls,
        water,
        pockets,
        pocket_nodes,
        stick,
        balls,
        ball_nodes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_layout() {
        let mut graph = SceneGraph::new();
        let table = build_table(&mut graph).unwrap();

        assert_eq!(table.walls.len(), 5);
        assert_eq!(table.pocket_nodes.len(), 6);
        assert_eq!(table.ball_nodes.len(), 2);
        // ground + 5 walls + water + 6 pockets + stick + 2 balls
        assert_eq!(graph.mesh_count(), 16);
        assert_eq!(graph.roots().len(), 5);

        let stick = graph.transform(table.stick).unwrap();
        assert_eq!(stick.position, STICK_POSITION);
        assert_eq!(stick.rotation, STICK_ROTATION);

        let group = graph.get(table.balls).unwrap();
        assert_eq!(group.children(), table.ball_nodes.as_slice());
        assert_eq!(graph.transform(table.balls).unwrap().position, Vec3::ZERO);
    }

    #[test]
    fn test_building_twice_fails_on_names() {
        let mut graph = SceneGraph::new();
        build_table(&mut graph).unwrap();
        assert!(build_table(&mut graph).is_err());
    }

    #[test]
    fn test_pockets_sit_on_the_rails() {
        let mut graph = SceneGraph::new();
        let table = build_table(&mut graph).unwrap();
        for pocket in &table.pocket_nodes {
            let world = graph.world_position(*pocket).unwrap();
            assert_eq!(world.y, 2.0);
            assert_eq!(world.z.abs(), 3.4);
        }
    }
}

//! Renderer seam
//!
//! The frame loop hands the scene graph and camera to a [`Renderer`] after
//! every step. Drawing is out of scope here; [`HeadlessRenderer`] records what
//! a real renderer would have drawn.

use anyhow::Result;
use cue_core::Vec3;
use cue_scene::{Camera, SceneGraph};

/// Draws one frame of the scene
pub trait Renderer {
    fn render(&mut self, scene: &SceneGraph, camera: &Camera) -> Result<()>;
}

/// What the last rendered frame looked like
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameSnapshot {
    pub meshes: usize,
    pub stick: Option<Vec3>,
    pub balls: Option<Vec3>,
    pub camera: Vec3,
}

/// Renderer that draws nothing and keeps the latest snapshot
#[derive(Clone, Debug, Default)]
pub struct HeadlessRenderer {
    frames: u64,
    last: Option<FrameSnapshot>,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last_frame(&self) -> Option<&FrameSnapshot> {
        self.last.as_ref()
    }
}

impl Renderer for HeadlessRenderer {
    fn render(&mut self, scene: &SceneGraph, camera: &Camera) -> Result<()> {
        let position = |name: &str| {
            scene
                .find(name)
                .and_then(|id| scene.transform(id))
                .map(|t| t.position)
        };

        let snapshot = FrameSnapshot {
            meshes: scene.mesh_count(),
            stick: position("stick"),
            balls: position("balls"),
            camera: camera.position,
        };
        tracing::trace!(frame = self.frames, ?snapshot, "headless render");

        self.frames += 1;
        self.last = Some(snapshot);
        Ok(())
    }
}

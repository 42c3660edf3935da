//! Scene context
//!
//! Everything the frame loop and the panel callbacks share lives here and is
//! owned by the app. There is no ambient global state.

use cue_animation::TweenEngine;
use cue_core::{ControlParameters, EventQueue, ParamStore};
use cue_scene::{
    build_table, Camera, CameraControls, NodeId, OrbitControls, SceneError, SceneGraph,
    TableHandles,
};

/// State carried from one frame to the next
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationState {
    /// Grows by the rotation rate every frame the stick exists
    pub rotate_accumulator: f64,
}

/// Shared state for one scene
pub struct SceneContext {
    pub graph: SceneGraph,
    /// Present once the table has been built
    pub table: Option<TableHandles>,
    pub tweens: TweenEngine<NodeId>,
    pub params: ParamStore,
    pub animation: AnimationState,
    pub controls: Box<dyn CameraControls>,
    pub events: EventQueue,
}

impl SceneContext {
    /// Empty context with the default camera and damped orbit controls
    pub fn new(params: ControlParameters) -> Self {
        Self::with_controls(
            params,
            Box::new(OrbitControls::new(Camera::default()).with_damping(0.05)),
        )
    }

    pub fn with_controls(params: ControlParameters, controls: Box<dyn CameraControls>) -> Self {
        Self {
            graph: SceneGraph::new(),
            table: None,
            tweens: TweenEngine::new(),
            params: ParamStore::with_values(params),
            animation: AnimationState::default(),
            controls,
            events: EventQueue::new(),
        }
    }

    /// Build the billiards table into the graph
    pub fn construct_scene(&mut self) -> Result<&TableHandles, SceneError> {
        let handles = build_table(&mut self.graph)?;
        Ok(self.table.insert(handles))
    }

    /// Stick handle, if the table has been built
    pub fn stick(&self) -> Option<NodeId> {
        self.table.as_ref().map(|table| table.stick)
    }

    /// Ball group handle, if the table has been built
    pub fn balls(&self) -> Option<NodeId> {
        self.table.as_ref().map(|table| table.balls)
    }

    pub fn camera(&self) -> &Camera {
        self.controls.camera()
    }
}

impl std::fmt::Debug for SceneContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneContext")
            .field("nodes", &self.graph.len())
            .field("table", &self.table.is_some())
            .field("tweens", &self.tweens.len())
            .field("params", &self.params.get())
            .field("animation", &self.animation)
            .field("events", &self.events.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_absent_until_constructed() {
        let mut ctx = SceneContext::new(ControlParameters::default());
        assert!(ctx.stick().is_none());
        assert!(ctx.balls().is_none());

        ctx.construct_scene().unwrap();
        assert_eq!(ctx.stick(), ctx.graph.find("stick"));
        assert_eq!(ctx.balls(), ctx.graph.find("balls"));
    }

    #[test]
    fn test_construct_twice_fails() {
        let mut ctx = SceneContext::new(ControlParameters::default());
        ctx.construct_scene().unwrap();
        assert!(matches!(
            ctx.construct_scene(),
            Err(SceneError::DuplicateName(_))
        ));
        assert!(ctx.table.is_some());
    }
}

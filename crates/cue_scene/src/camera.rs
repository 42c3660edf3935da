//! Camera and orbit-style controls
//!
//! Projection math lives with the renderer; the camera here only carries the
//! parameters a renderer needs. [`OrbitControls`] is the damping/inertia
//! collaborator the frame loop updates once per frame.

use cue_core::Vec3;
use std::f32::consts::PI;

/// Perspective camera
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn perspective(position: Vec3, target: Vec3, fov_y: f32, aspect: f32) -> Self {
        Self {
            position,
            target,
            up: Vec3::UP,
            fov_y,
            aspect,
            near: 0.1,
            far: 300.0,
        }
    }

    /// Unit vector from the camera towards its target
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Camera::perspective(Vec3::new(-70.0, 20.0, 20.0), Vec3::ZERO, 28.0, 16.0 / 9.0)
    }
}

/// Camera input collaborator advanced once per frame
pub trait CameraControls {
    /// Apply pending input and inertia for `delta_units` of time
    fn update(&mut self, delta_units: f32);

    /// The controlled camera
    fn camera(&self) -> &Camera;
}

/// Keeps the camera from flipping over the poles
const POLAR_EPSILON: f32 = 1e-6;

/// Orbits a camera around a target point with optional damping.
///
/// Input (`rotate_left`, `rotate_up`, `dolly`) accumulates into pending
/// deltas. With damping enabled each `update` applies a fraction of what is
/// pending and decays the rest, so motion eases out over several frames.
#[derive(Clone, Debug)]
pub struct OrbitControls {
    camera: Camera,
    radius: f32,
    theta: f32,
    phi: f32,
    pending_theta: f32,
    pending_phi: f32,
    pending_scale: f32,
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub auto_rotate: bool,
    /// Revolutions per 60 update units when auto-rotating
    pub auto_rotate_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl OrbitControls {
    pub fn new(camera: Camera) -> Self {
        let offset = camera.position - camera.target;
        let radius = offset.length();
        let (theta, phi) = if radius > 0.0 {
            (
                offset.x.atan2(offset.z),
                (offset.y / radius).clamp(-1.0, 1.0).acos(),
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            camera,
            radius,
            theta,
            phi,
            pending_theta: 0.0,
            pending_phi: 0.0,
            pending_scale: 1.0,
            enable_damping: false,
            damping_factor: 0.05,
            auto_rotate: false,
            auto_rotate_speed: 2.0,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
        }
    }

    pub fn with_damping(mut self, factor: f32) -> Self {
        self.enable_damping = true;
        self.damping_factor = factor.clamp(0.0, 1.0);
        self
    }

    /// Queue a rotation around the up axis
    pub fn rotate_left(&mut self, angle: f32) {
        self.pending_theta -= angle;
    }

    /// Queue a rotation towards the top pole
    pub fn rotate_up(&mut self, angle: f32) {
        self.pending_phi -= angle;
    }

    /// Queue a zoom; factors above 1 move the camera away
    pub fn dolly(&mut self, factor: f32) {
        if factor > 0.0 {
            self.pending_scale *= factor;
        }
    }

    /// Orbit radius
    pub fn distance(&self) -> f32 {
        self.radius
    }

    /// Azimuth and polar angle, in radians
    pub fn angles(&self) -> (f32, f32) {
        (self.theta, self.phi)
    }
}

impl CameraControls for OrbitControls {
    fn update(&mut self, delta_units: f32) {
        if self.auto_rotate {
            let angle = 2.0 * PI * self.auto_rotate_speed / 60.0 * delta_units;
            self.rotate_left(angle);
        }

        if self.enable_damping {
            self.theta += self.pending_theta * self.damping_factor;
            self.phi += self.pending_phi * self.damping_factor;
        } else {
            self.theta += self.pending_theta;
            self.phi += self.pending_phi;
        }
        self.phi = self.phi.clamp(POLAR_EPSILON, PI - POLAR_EPSILON);

        self.radius = (self.radius * self.pending_scale).clamp(self.min_distance, self.max_distance);

        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        let offset = Vec3::new(
            self.radius * sin_phi * sin_theta,
            self.radius * cos_phi,
            self.radius * sin_phi * cos_theta,
        );
        self.camera.position = self.camera.target + offset;

        if self.enable_damping {
            self.pending_theta *= 1.0 - self.damping_factor;
            self.pending_phi *= 1.0 - self.damping_factor;
        } else {
            self.pending_theta = 0.0;
            self.pending_phi = 0.0;
        }
        self.pending_scale = 1.0;
    }

    fn camera(&self) -> &Camera {
        &self.camera
    }
}

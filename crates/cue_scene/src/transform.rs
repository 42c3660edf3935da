//! Local transforms
//!
//! Rotation is stored as Euler angles in radians, applied X then Y then Z
//! (the matrix is `Rx * Ry * Rz`), after scale and before translation.

use cue_animation::Channel;
use cue_core::Vec3;

/// Position, Euler rotation and scale of a node relative to its parent
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Read one animatable channel
    pub fn channel(&self, channel: Channel) -> f32 {
        match channel {
            Channel::PositionX => self.position.x,
            Channel::PositionY => self.position.y,
            Channel::PositionZ => self.position.z,
            Channel::RotationX => self.rotation.x,
            Channel::RotationY => self.rotation.y,
            Channel::RotationZ => self.rotation.z,
            Channel::ScaleX => self.scale.x,
            Channel::ScaleY => self.scale.y,
            Channel::ScaleZ => self.scale.z,
        }
    }

    /// Write one animatable channel
    pub fn set_channel(&mut self, channel: Channel, value: f32) {
        let slot = match channel {
            Channel::PositionX => &mut self.position.x,
            Channel::PositionY => &mut self.position.y,
            Channel::PositionZ => &mut self.position.z,
            Channel::RotationX => &mut self.rotation.x,
            Channel::RotationY => &mut self.rotation.y,
            Channel::RotationZ => &mut self.rotation.z,
            Channel::ScaleX => &mut self.scale.x,
            Channel::ScaleY => &mut self.scale.y,
            Channel::ScaleZ => &mut self.scale.z,
        };
        *slot = value;
    }

    /// Map a point from this transform's local space into its parent's space
    pub fn apply(&self, point: Vec3) -> Vec3 {
        let scaled = Vec3::new(
            point.x * self.scale.x,
            point.y * self.scale.y,
            point.z * self.scale.z,
        );
        rotate_euler_xyz(scaled, self.rotation) + self.position
    }
}

/// Rotate `v` by `Rx(a.x) * Ry(a.y) * Rz(a.z)`
fn rotate_euler_xyz(v: Vec3, angles: Vec3) -> Vec3 {
    let (sz, cz) = angles.z.sin_cos();
    let v = Vec3::new(v.x * cz - v.y * sz, v.x * sz + v.y * cz, v.z);

    let (sy, cy) = angles.y.sin_cos();
    let v = Vec3::new(v.x * cy + v.z * sy, v.y, -v.x * sy + v.z * cy);

    let (sx, cx) = angles.x.sin_cos();
    Vec3::new(v.x, v.y * cx - v.z * sx, v.y * sx + v.z * cx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn close(a: Vec3, b: Vec3) -> bool {
        a.distance(b) < 1e-5
    }

    #[test]
    fn test_channel_roundtrip_covers_every_field() {
        let mut t = Transform::default();
        t.set_channel(Channel::PositionZ, -2.0);
        t.set_channel(Channel::RotationY, 0.5);
        t.set_channel(Channel::ScaleX, 3.0);
        assert_eq!(t.position, Vec3::new(0.0, 0.0, -2.0));
        assert_eq!(t.rotation, Vec3::new(0.0, 0.5, 0.0));
        assert_eq!(t.channel(Channel::ScaleX), 3.0);
        assert_eq!(t.channel(Channel::ScaleY), 1.0);
    }

    #[test]
    fn test_apply_translation_only() {
        let t = Transform::from_position(Vec3::new(1.0, 0.0, 0.0));
        assert!(close(t.apply(Vec3::new(3.0, 2.2, 1.0)), Vec3::new(4.0, 2.2, 1.0)));
    }

    #[test]
    fn test_apply_quarter_turns() {
        // -π/2 about X tips +Y onto -Z
        let t = Transform::default().with_rotation(Vec3::new(-FRAC_PI_2, 0.0, 0.0));
        assert!(close(t.apply(Vec3::UP), Vec3::new(0.0, 0.0, -1.0)));

        let t = Transform::default().with_rotation(Vec3::new(0.0, FRAC_PI_2, 0.0));
        assert!(close(t.apply(Vec3::new(1.0, 0.0, 0.0)), Vec3::new(0.0, 0.0, -1.0)));
    }

    #[test]
    fn test_apply_scales_before_rotating() {
        let t = Transform {
            scale: Vec3::new(2.0, 1.0, 1.0),
            ..Transform::default()
        }
        .with_rotation(Vec3::new(0.0, 0.0, FRAC_PI_2));
        assert!(close(t.apply(Vec3::new(1.0, 0.0, 0.0)), Vec3::new(0.0, 2.0, 0.0)));
    }
}

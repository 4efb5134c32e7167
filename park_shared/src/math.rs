//! Math types.
//!
//! Gameplay happens on the ground plane, so most code works with `Vec2`
//! (x/z). `Vec3` exists for camera placement. This module intentionally
//! stays small and deterministic: no SIMD, no unsafe.

use serde::{Deserialize, Serialize};

/// Ground-plane vector (x is east/west, z is the canonical forward axis).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Vec2 {
    pub x: f32,
    pub z: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, z: 0.0 };

    pub const fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }

    pub fn dist_sq(self, rhs: Self) -> f32 {
        let dx = self.x - rhs.x;
        let dz = self.z - rhs.z;
        dx * dx + dz * dz
    }

    pub fn dist(self, rhs: Self) -> f32 {
        self.dist_sq(rhs).sqrt()
    }

    pub fn len(self) -> f32 {
        (self.x * self.x + self.z * self.z).sqrt()
    }

    /// Clamps both components to `[-bound, bound]`.
    pub fn clamp_square(self, bound: f32) -> Self {
        Self::new(self.x.clamp(-bound, bound), self.z.clamp(-bound, bound))
    }
}

/// 3D vector, used for camera poses and mesh part offsets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Lifts a ground-plane point to the given height.
    pub fn from_ground(p: Vec2, y: f32) -> Self {
        Self::new(p.x, y, p.z)
    }
}

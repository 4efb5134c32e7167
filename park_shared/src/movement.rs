//! Movement and camera controller.
//!
//! A pure function of (control frame, actor, camera rig, model): no state
//! beyond what is passed in. Called once per frame tick after input
//! aggregation and before proximity scoring.

use serde::{Deserialize, Serialize};

use crate::{
    actor::{Actor, CameraRig, CharacterModel},
    input::ControlFrame,
    math::{Vec2, Vec3},
};

/// Base forward/back speed, units per tick at full input.
pub const MOVE_SPEED: f32 = 0.15;
/// Base turn rate, radians per tick at full input.
pub const TURN_SPEED: f32 = 0.05;
/// Camera orbit rate, radians per tick at full input.
pub const ORBIT_SPEED: f32 = 0.03;
/// Camera zoom rate, units per tick at full input.
pub const ZOOM_SPEED: f32 = 0.2;
/// Hard world edge on both ground axes.
pub const WORLD_BOUND: f32 = 45.0;
pub const ZOOM_MIN: f32 = 5.0;
pub const ZOOM_MAX: f32 = 25.0;
/// Camera distance after a reset, and the anchor of the height curve.
pub const DEFAULT_DISTANCE: f32 = 7.0;
/// Camera height at the default distance; height scales linearly with zoom.
pub const BASE_HEIGHT: f32 = 5.0;

/// Derived camera placement for one frame. Look-at is always the actor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

/// Advances actor and camera rig state by one tick.
///
/// Sign conventions: positive turn input decreases the heading (push right,
/// turn right); positive orbit input decreases the orbit angle. The position
/// clamp runs after the move, so the world edge is hard rather than a force.
pub fn step(control: &ControlFrame, actor: &mut Actor, camera: &mut CameraRig, model: CharacterModel) {
    let heading = actor.effective_heading(model);

    let stride = MOVE_SPEED * control.forward_back;
    actor.position.x += heading.sin() * stride;
    actor.position.z += heading.cos() * stride;

    actor.heading -= TURN_SPEED * control.turn;

    camera.orbit -= ORBIT_SPEED * control.camera_orbit;
    camera.distance = (camera.distance + ZOOM_SPEED * control.camera_zoom).clamp(ZOOM_MIN, ZOOM_MAX);

    if control.reset_camera {
        camera.orbit = 0.0;
        camera.distance = DEFAULT_DISTANCE;
    }

    actor.position = actor.position.clamp_square(WORLD_BOUND);
}

/// Computes the snap-follow camera pose for the current state.
///
/// The camera sits behind the actor at `orbit + effective heading`, with its
/// height a linear function of distance anchored at the default zoom.
pub fn camera_pose(actor: &Actor, camera: &CameraRig, model: CharacterModel) -> CameraPose {
    let total = actor.effective_heading(model) + camera.orbit;
    let position = Vec3::new(
        actor.position.x - total.sin() * camera.distance,
        camera.distance / DEFAULT_DISTANCE * BASE_HEIGHT,
        actor.position.z - total.cos() * camera.distance,
    );
    CameraPose {
        position,
        look_at: Vec3::from_ground(actor.position, model.ride_height()),
    }
}

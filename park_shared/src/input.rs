//! Input aggregation.
//!
//! Keyboard state and a polled gamepad snapshot are merged into a single
//! normalized `ControlFrame` once per frame tick. The sources deliberately
//! differ in magnitude: keyboard keys contribute exactly ±1 while gamepad
//! axes contribute their analog value after deadzone filtering. When both
//! drive the same axis in the same tick, the gamepad's analog value wins
//! the magnitude. Either source alone is sufficient.
//!
//! Gamepad snapshots must be re-polled every tick by the caller; this module
//! only merges whatever snapshot it is handed. No gamepad means keyboard-only.

/// Analog readings with magnitude below this are clamped to exactly 0.
pub const DEADZONE: f32 = 0.15;

/// Zeroes out axis drift below the deadzone threshold.
pub fn apply_deadzone(value: f32, deadzone: f32) -> f32 {
    if value.abs() > deadzone {
        value
    } else {
        0.0
    }
}

/// Held keys, already resolved to logical game actions by the windowing
/// collaborator (W/up = forward, S/down = back, A/left, D/right, space).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KeyboardState {
    pub forward: bool,
    pub back: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    pub action: bool,
    pub reset_camera: bool,
}

/// Raw gamepad state captured this tick.
///
/// Axis convention follows the source sticks: `move_y` is negative when the
/// stick is pushed forward, `move_x`/`look_x` are positive to the right,
/// `look_y` is positive when pulled back (zoom out). Values are raw in
/// `[-1, 1]`; deadzone filtering happens during aggregation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GamepadSnapshot {
    pub move_x: f32,
    pub move_y: f32,
    pub look_x: f32,
    pub look_y: f32,
    pub action: bool,
    pub reset_camera: bool,
}

/// Normalized control record consumed by the movement controller.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControlFrame {
    /// Forward/back intent in `[-1, 1]`, positive = forward.
    pub forward_back: f32,
    /// Turn intent in `[-1, 1]`, positive = turn right.
    pub turn: f32,
    /// Camera orbit intent in `[-1, 1]`.
    pub camera_orbit: f32,
    /// Camera zoom intent in `[-1, 1]`, positive = zoom out.
    pub camera_zoom: f32,
    pub action: bool,
    pub reset_camera: bool,
}

impl ControlFrame {
    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }
}

/// Merges keyboard and gamepad into one control frame.
///
/// Per-axis policy: the post-deadzone analog value drives the axis whenever
/// it is non-zero, otherwise the keyboard's unit contribution does. Opposing
/// keys cancel to 0, matching the source behavior of applying both moves.
pub fn aggregate(keys: &KeyboardState, pad: Option<&GamepadSnapshot>) -> ControlFrame {
    let pad = pad.copied().unwrap_or_default();

    let move_x = apply_deadzone(pad.move_x, DEADZONE);
    let move_y = apply_deadzone(pad.move_y, DEADZONE);
    let look_x = apply_deadzone(pad.look_x, DEADZONE);
    let look_y = apply_deadzone(pad.look_y, DEADZONE);

    let key_forward = (keys.forward as i8 - keys.back as i8) as f32;
    let key_turn = (keys.turn_right as i8 - keys.turn_left as i8) as f32;

    // Stick forward is negative move_y, stick right is positive move_x.
    let forward_back = if move_y != 0.0 { -move_y } else { key_forward };
    let turn = if move_x != 0.0 { move_x } else { key_turn };

    ControlFrame {
        forward_back,
        turn,
        camera_orbit: look_x,
        camera_zoom: look_y,
        action: keys.action || pad.action,
        reset_camera: keys.reset_camera || pad.reset_camera,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deadzone_clamps_small_values_to_zero() {
        assert_eq!(apply_deadzone(0.14, DEADZONE), 0.0);
        assert_eq!(apply_deadzone(-0.1, DEADZONE), 0.0);
        assert_eq!(apply_deadzone(0.15, DEADZONE), 0.0);
        assert_eq!(apply_deadzone(0.16, DEADZONE), 0.16);
        assert_eq!(apply_deadzone(-0.9, DEADZONE), -0.9);
    }

    #[test]
    fn keyboard_contributes_unit_magnitudes() {
        let keys = KeyboardState {
            forward: true,
            turn_left: true,
            action: true,
            ..Default::default()
        };
        let frame = aggregate(&keys, None);
        assert_eq!(frame.forward_back, 1.0);
        assert_eq!(frame.turn, -1.0);
        assert!(frame.action);
        assert_eq!(frame.camera_orbit, 0.0);
    }

    #[test]
    fn opposing_keys_cancel() {
        let keys = KeyboardState {
            forward: true,
            back: true,
            ..Default::default()
        };
        assert_eq!(aggregate(&keys, None).forward_back, 0.0);
    }

    #[test]
    fn gamepad_magnitude_wins_over_keyboard() {
        let keys = KeyboardState {
            forward: true,
            ..Default::default()
        };
        let pad = GamepadSnapshot {
            move_y: -0.5,
            ..Default::default()
        };
        let frame = aggregate(&keys, Some(&pad));
        assert_eq!(frame.forward_back, 0.5);
    }

    #[test]
    fn gamepad_drift_degrades_to_keyboard() {
        let keys = KeyboardState {
            forward: true,
            ..Default::default()
        };
        let pad = GamepadSnapshot {
            move_y: -0.05, // below deadzone
            ..Default::default()
        };
        let frame = aggregate(&keys, Some(&pad));
        assert_eq!(frame.forward_back, 1.0);
    }

    #[test]
    fn missing_gamepad_degrades_silently() {
        let frame = aggregate(&KeyboardState::default(), None);
        assert!(frame.is_idle());
    }
}

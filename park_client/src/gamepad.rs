//! Gamepad event pump.
//!
//! gilrs delivers connect/disconnect and axis/button events; this pump folds
//! them into the [`GamepadSnapshot`] the aggregator consumes. It must be
//! polled every tick so the snapshot never goes stale. Without a pad (or
//! without a working gilrs backend) everything degrades to keyboard-only.

use gilrs::{Axis, Button, Event, EventType, GamepadId, Gilrs};
use tracing::{info, warn};

use park_shared::input::GamepadSnapshot;

pub struct GamepadPump {
    gilrs: Gilrs,
    active: Option<GamepadId>,
    snapshot: GamepadSnapshot,
}

impl GamepadPump {
    /// Returns `None` when the platform backend is unavailable; the game
    /// then runs keyboard-only.
    pub fn new() -> Option<Self> {
        match Gilrs::new() {
            Ok(gilrs) => {
                let active = gilrs.gamepads().next().map(|(id, pad)| {
                    info!(name = pad.name(), "Gamepad present");
                    id
                });
                Some(Self {
                    gilrs,
                    active,
                    snapshot: GamepadSnapshot::default(),
                })
            }
            Err(error) => {
                warn!(%error, "Gamepad backend unavailable");
                None
            }
        }
    }

    /// Drains pending events and returns the current snapshot, or `None`
    /// when no pad is connected.
    pub fn poll(&mut self) -> Option<GamepadSnapshot> {
        while let Some(Event { id, event, .. }) = self.gilrs.next_event() {
            match event {
                EventType::Connected => {
                    info!(pad = %self.gilrs.gamepad(id).name(), "Gamepad connected");
                    // Latest connect wins, matching the source behavior.
                    self.active = Some(id);
                    self.snapshot = GamepadSnapshot::default();
                }
                EventType::Disconnected if self.active == Some(id) => {
                    info!("Gamepad disconnected");
                    self.active = None;
                    self.snapshot = GamepadSnapshot::default();
                }
                _ if self.active != Some(id) => {}
                EventType::AxisChanged(axis, value, _) => self.apply_axis(axis, value),
                EventType::ButtonPressed(button, _) => self.apply_button(button, true),
                EventType::ButtonReleased(button, _) => self.apply_button(button, false),
                _ => {}
            }
        }
        self.active.map(|_| self.snapshot)
    }

    fn apply_axis(&mut self, axis: Axis, value: f32) {
        // gilrs reports stick-up as positive; the snapshot follows the
        // browser convention where forward/zoom-in are negative.
        match axis {
            Axis::LeftStickX => self.snapshot.move_x = value,
            Axis::LeftStickY => self.snapshot.move_y = -value,
            Axis::RightStickX => self.snapshot.look_x = value,
            Axis::RightStickY => self.snapshot.look_y = -value,
            _ => {}
        }
    }

    fn apply_button(&mut self, button: Button, pressed: bool) {
        match button {
            Button::South => self.snapshot.action = pressed,
            Button::RightThumb => self.snapshot.reset_camera = pressed,
            _ => {}
        }
    }
}

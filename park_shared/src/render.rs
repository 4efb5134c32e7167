//! Rendering and UI output abstractions.
//!
//! The core never depends on a graphics backend or a DOM. These traits are
//! one-way output sinks; nothing here is ever read back by the simulation.

use crate::{assets::SceneEntity, math::Vec2, movement::CameraPose};

/// Everything the render collaborator needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameScene<'a> {
    pub character: &'a SceneEntity,
    pub character_pos: Vec2,
    pub character_heading: f32,
    /// Tree positions paired with their marked state (marked trees render
    /// differently).
    pub trees: &'a [(Vec2, bool)],
}

/// A minimal rendering API, invoked once per frame tick after state update.
pub trait RenderBackend: Send {
    fn render_frame(&mut self, scene: &FrameScene<'_>, camera: &CameraPose);
}

/// No-op renderer for headless runs and tests.
#[derive(Debug, Default)]
pub struct NullRenderer;

impl RenderBackend for NullRenderer {
    fn render_frame(&mut self, _scene: &FrameScene<'_>, _camera: &CameraPose) {}
}

/// One-way UI sink: score text, countdown text, proximity hint, end-of-game
/// summary, and the debug overlay. Missing UI elements degrade to no-ops on
/// the implementor's side.
pub trait UiSink: Send {
    fn set_score(&mut self, score: u32);
    fn set_time_left(&mut self, seconds: u32);
    fn set_markable_hint(&mut self, visible: bool);
    fn show_summary(&mut self, final_score: u32);
    fn set_debug_text(&mut self, text: &str);
}

/// UI sink that discards everything.
#[derive(Debug, Default)]
pub struct NullUi;

impl UiSink for NullUi {
    fn set_score(&mut self, _score: u32) {}
    fn set_time_left(&mut self, _seconds: u32) {}
    fn set_markable_hint(&mut self, _visible: bool) {}
    fn show_summary(&mut self, _final_score: u32) {}
    fn set_debug_text(&mut self, _text: &str) {}
}

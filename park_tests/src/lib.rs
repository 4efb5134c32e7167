//! Test support: recording doubles for the render and UI collaborators.

use park_shared::{
    movement::CameraPose,
    render::{FrameScene, RenderBackend, UiSink},
};

/// Renderer that counts frames and remembers the last camera pose.
#[derive(Debug, Default)]
pub struct CountingRenderer {
    pub frames: u64,
    pub last_camera: Option<CameraPose>,
}

impl RenderBackend for CountingRenderer {
    fn render_frame(&mut self, _scene: &FrameScene<'_>, camera: &CameraPose) {
        self.frames += 1;
        self.last_camera = Some(*camera);
    }
}

/// UI sink that records every update it receives.
#[derive(Debug, Default)]
pub struct RecordingUi {
    pub score: u32,
    pub time_left: u32,
    pub markable: bool,
    pub summary: Option<u32>,
    pub score_updates: Vec<u32>,
}

impl UiSink for RecordingUi {
    fn set_score(&mut self, score: u32) {
        self.score = score;
        self.score_updates.push(score);
    }

    fn set_time_left(&mut self, seconds: u32) {
        self.time_left = seconds;
    }

    fn set_markable_hint(&mut self, visible: bool) {
        self.markable = visible;
    }

    fn show_summary(&mut self, final_score: u32) {
        self.summary = Some(final_score);
    }

    fn set_debug_text(&mut self, _text: &str) {}
}

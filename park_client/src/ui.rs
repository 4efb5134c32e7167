//! UI sink for headless runs: everything goes to the log.

use tracing::{debug, info};

use park_shared::render::UiSink;

/// Logs UI updates instead of touching a DOM. Used by the standalone binary.
#[derive(Debug, Default)]
pub struct LogUi {
    last_markable: bool,
}

impl UiSink for LogUi {
    fn set_score(&mut self, score: u32) {
        info!(score, "Score");
    }

    fn set_time_left(&mut self, seconds: u32) {
        debug!(seconds, "Time left");
    }

    fn set_markable_hint(&mut self, visible: bool) {
        // Only log edges, not 60 lines a second.
        if visible != self.last_markable {
            self.last_markable = visible;
            debug!(visible, "Markable hint");
        }
    }

    fn show_summary(&mut self, final_score: u32) {
        info!(final_score, "Game over");
    }

    fn set_debug_text(&mut self, text: &str) {
        debug!(overlay = text, "Debug overlay");
    }
}

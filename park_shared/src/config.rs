//! Configuration.
//!
//! Loaded from JSON strings/files (file IO left to the binaries), with serde
//! defaults so partial configs stay valid.

use serde::{Deserialize, Serialize};

/// Root configuration shared by the game binary and the file server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// File server listen address, e.g. `127.0.0.1:8000`.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    /// Session length in seconds.
    #[serde(default = "default_session_seconds")]
    pub session_seconds: u32,
    /// Number of trees placed at session start.
    #[serde(default = "default_tree_count")]
    pub tree_count: usize,
    /// Character model asset id, e.g. `dog_puppy`.
    #[serde(default = "default_character")]
    pub character: String,
    /// Frame tick rate.
    #[serde(default = "default_frame_hz")]
    pub frame_hz: u32,
}

fn default_listen_addr() -> String {
    "127.0.0.1:8000".to_string()
}

fn default_session_seconds() -> u32 {
    30
}

fn default_tree_count() -> usize {
    crate::world::TREE_COUNT
}

fn default_character() -> String {
    "dog_puppy".to_string()
}

fn default_frame_hz() -> u32 {
    60
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            session_seconds: default_session_seconds(),
            tree_count: default_tree_count(),
            character: default_character(),
            frame_hz: default_frame_hz(),
        }
    }
}

impl GameConfig {
    /// Parses config from JSON.
    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }
}

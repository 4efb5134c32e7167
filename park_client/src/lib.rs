//! `park_client`
//!
//! The game driver:
//! - Frame loop owning the whole session state
//! - Gamepad event pump (gilrs) feeding the input aggregator
//! - Log-backed UI sink for headless runs
//! - Debug overlay text

pub mod game;
pub mod gamepad;
pub mod ui;

pub use game::Game;

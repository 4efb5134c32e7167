//! `park_shared`
//!
//! Game-core libraries shared by the game driver and tests.
//!
//! Design goals:
//! - Deterministic and modular: the frame pipeline (input aggregation →
//!   movement/camera → proximity scoring) is pure state-in/state-out.
//! - Clear separation of concerns (input, movement, world, scoring, timer).
//! - Traits at the collaborator seams (assets, render, UI).
//! - No `unsafe`, no module-level mutable state.

pub mod actor;
pub mod assets;
pub mod config;
pub mod event;
pub mod input;
pub mod math;
pub mod movement;
pub mod render;
pub mod scoring;
pub mod timer;
pub mod world;

pub mod prelude {
    //! Commonly used exports.

    pub use crate::actor::*;
    pub use crate::config::*;
    pub use crate::event::*;
    pub use crate::input::*;
    pub use crate::math::*;
    pub use crate::movement::*;
    pub use crate::scoring::*;
    pub use crate::world::*;
}

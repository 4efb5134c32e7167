//! Actor and camera rig state, plus the character model table.

use std::f32::consts::FRAC_PI_2;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::math::Vec2;

/// The player-controlled character. Lives on the ground plane; the vertical
/// placement comes from the model table, not from movement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub position: Vec2,
    /// Heading in radians, 0 = facing +Z.
    pub heading: f32,
}

impl Actor {
    pub fn spawn(model: CharacterModel) -> Self {
        Self {
            position: Vec2::ZERO,
            heading: model.initial_rotation(),
        }
    }

    /// Heading adjusted by the per-model orientation compensation.
    pub fn effective_heading(&self, model: CharacterModel) -> f32 {
        self.heading + model.heading_offset()
    }
}

/// Orbital camera state relative to the actor. Derived world position is
/// recomputed every frame by the movement controller; only the angle/distance
/// pair persists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraRig {
    /// Orbit angle relative to the actor's effective heading.
    pub orbit: f32,
    /// Distance from the actor, clamped to [`crate::movement::ZOOM_MIN`],
    /// [`crate::movement::ZOOM_MAX`].
    pub distance: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            orbit: 0.0,
            distance: crate::movement::DEFAULT_DISTANCE,
        }
    }
}

/// Loadable character models. Forward-axis conventions differ between the
/// shipped assets, so each entry carries an orientation compensation applied
/// to the heading before movement and camera math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterModel {
    BigDog,
    Puppy,
    WhiteDog,
    CartoonDog,
}

impl CharacterModel {
    pub const ALL: [Self; 4] = [Self::BigDog, Self::Puppy, Self::WhiteDog, Self::CartoonDog];

    /// Asset identifier used by the loader collaborator.
    pub fn asset_id(self) -> &'static str {
        match self {
            Self::BigDog => "dog_big",
            Self::Puppy => "dog_puppy",
            Self::WhiteDog => "dog_white",
            Self::CartoonDog => "little_cartoon_dog",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::BigDog => "Big Dog",
            Self::Puppy => "Puppy",
            Self::WhiteDog => "White Dog",
            Self::CartoonDog => "Cartoon Dog",
        }
    }

    /// Orientation compensation added to the heading. Only the big dog's
    /// asset faces off-axis.
    pub fn heading_offset(self) -> f32 {
        match self {
            Self::BigDog => FRAC_PI_2,
            _ => 0.0,
        }
    }

    /// Heading assigned at spawn. Cancels the orientation compensation so
    /// every model starts with an effective heading of 0 (facing +Z).
    pub fn initial_rotation(self) -> f32 {
        -self.heading_offset()
    }

    /// Resting height of the model origin above the ground.
    pub fn ride_height(self) -> f32 {
        match self {
            Self::BigDog => 1.15,
            Self::Puppy => 0.044,
            Self::WhiteDog => 0.8,
            Self::CartoonDog => 0.8,
        }
    }

    /// Uniform scale applied to the loaded mesh.
    pub fn scale(self) -> f32 {
        match self {
            Self::BigDog => 0.68,
            Self::WhiteDog => 0.96,
            _ => 0.8,
        }
    }
}

impl FromStr for CharacterModel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.asset_id() == s)
            .ok_or_else(|| anyhow::anyhow!("unknown character model: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_big_dog_needs_heading_offset() {
        assert_eq!(CharacterModel::BigDog.heading_offset(), FRAC_PI_2);
        for model in [
            CharacterModel::Puppy,
            CharacterModel::WhiteDog,
            CharacterModel::CartoonDog,
        ] {
            assert_eq!(model.heading_offset(), 0.0);
        }
    }

    #[test]
    fn model_parses_from_asset_id() {
        let model: CharacterModel = "dog_big".parse().unwrap();
        assert_eq!(model, CharacterModel::BigDog);
        assert!("dog_cat".parse::<CharacterModel>().is_err());
    }

    #[test]
    fn effective_heading_applies_offset() {
        let actor = Actor {
            position: Vec2::ZERO,
            heading: 1.0,
        };
        assert_eq!(actor.effective_heading(CharacterModel::Puppy), 1.0);
        assert_eq!(
            actor.effective_heading(CharacterModel::BigDog),
            1.0 + FRAC_PI_2
        );
    }
}

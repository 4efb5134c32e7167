//! Asset loading abstraction and the procedural fallback character.
//!
//! The real loader (GLTF over HTTP, in the browser build) is a collaborator
//! behind [`AssetLoader`]. When it fails, the game must stay playable, so
//! [`fallback_character`] builds a deterministic blocky stand-in from a flat
//! part list.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{actor::CharacterModel, math::Vec3};

/// Primitive shapes the placeholder composites are built from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Box { x: f32, y: f32, z: f32 },
    Cylinder { radius_top: f32, radius_bottom: f32, height: f32 },
    Sphere { radius: f32 },
}

/// One mesh primitive within a composite entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshPart {
    pub shape: Shape,
    pub offset: Vec3,
    /// Packed 0xRRGGBB color.
    pub color: u32,
}

/// A renderable entity handle: either a loaded model reference or a
/// procedural composite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneEntity {
    pub name: String,
    pub parts: Vec<MeshPart>,
}

/// Loads character models by id. Implemented by the render layer; the core
/// only depends on this trait.
#[async_trait]
pub trait AssetLoader: Send + Sync {
    async fn load_character(&self, model: CharacterModel) -> anyhow::Result<SceneEntity>;
}

/// Loader for environments with no asset backend wired (headless runs,
/// tests). Always fails, which routes callers to the fallback.
#[derive(Debug, Default)]
pub struct NullLoader;

#[async_trait]
impl AssetLoader for NullLoader {
    async fn load_character(&self, model: CharacterModel) -> anyhow::Result<SceneEntity> {
        anyhow::bail!("no asset backend wired for {}", model.asset_id())
    }
}

/// Loads the character, falling back to the procedural stand-in on failure.
/// Load failures are logged, never surfaced to the player.
pub async fn load_or_fallback(loader: &dyn AssetLoader, model: CharacterModel) -> SceneEntity {
    match loader.load_character(model).await {
        Ok(entity) => entity,
        Err(error) => {
            warn!(model = model.asset_id(), %error, "Character load failed, using fallback");
            fallback_character()
        }
    }
}

const COAT: u32 = 0xD2691E;
const SNOUT: u32 = 0xA0522D;
const EYE: u32 = 0x000000;

/// Deterministic blocky dog: body, head, snout, ears, eyes, tail, four legs.
pub fn fallback_character() -> SceneEntity {
    let mut parts = vec![
        MeshPart {
            shape: Shape::Box { x: 1.5, y: 0.8, z: 1.0 },
            offset: Vec3::new(0.0, 1.0, 0.0),
            color: COAT,
        },
        MeshPart {
            shape: Shape::Box { x: 0.8, y: 0.8, z: 0.8 },
            offset: Vec3::new(0.9, 1.2, 0.0),
            color: COAT,
        },
        MeshPart {
            shape: Shape::Box { x: 0.5, y: 0.3, z: 0.4 },
            offset: Vec3::new(1.3, 1.1, 0.0),
            color: SNOUT,
        },
        MeshPart {
            shape: Shape::Box { x: 0.3, y: 0.5, z: 0.2 },
            offset: Vec3::new(0.8, 1.7, -0.4),
            color: COAT,
        },
        MeshPart {
            shape: Shape::Box { x: 0.3, y: 0.5, z: 0.2 },
            offset: Vec3::new(0.8, 1.7, 0.4),
            color: COAT,
        },
        MeshPart {
            shape: Shape::Sphere { radius: 0.1 },
            offset: Vec3::new(1.2, 1.3, -0.25),
            color: EYE,
        },
        MeshPart {
            shape: Shape::Sphere { radius: 0.1 },
            offset: Vec3::new(1.2, 1.3, 0.25),
            color: EYE,
        },
        MeshPart {
            shape: Shape::Cylinder { radius_top: 0.1, radius_bottom: 0.15, height: 0.8 },
            offset: Vec3::new(-0.9, 1.2, 0.0),
            color: COAT,
        },
    ];
    for (x, z) in [(0.5, 0.4), (0.5, -0.4), (-0.5, 0.4), (-0.5, -0.4)] {
        parts.push(MeshPart {
            shape: Shape::Cylinder { radius_top: 0.15, radius_bottom: 0.15, height: 0.8 },
            offset: Vec3::new(x, 0.4, z),
            color: COAT,
        });
    }
    SceneEntity {
        name: "fallback_dog".to_string(),
        parts,
    }
}

/// Procedural tree: trunk plus three shrinking leaf spheres.
pub fn tree_entity() -> SceneEntity {
    const TRUNK: u32 = 0x8B4513;
    const LEAVES: u32 = 0x228B22;

    let mut parts = vec![MeshPart {
        shape: Shape::Cylinder { radius_top: 0.4, radius_bottom: 0.5, height: 4.0 },
        offset: Vec3::new(0.0, 2.0, 0.0),
        color: TRUNK,
    }];
    for i in 0..3 {
        let shrink = 1.0 - i as f32 * 0.15;
        parts.push(MeshPart {
            shape: Shape::Sphere { radius: 1.5 * shrink },
            offset: Vec3::new(0.0, 4.0 + i as f32 * 0.8, 0.0),
            color: LEAVES,
        });
    }
    SceneEntity {
        name: "tree".to_string(),
        parts,
    }
}

//! Prompt to archetype selection.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{builders, Mesh};

const BUILDING_KEYWORDS: [&str; 3] = ["building", "house", "tower"];
const ORGANIC_KEYWORDS: [&str; 3] = ["tree", "plant", "organic"];

/// Fixed shapes the procedural generator can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    /// Tapered box; the point-cloud placeholder
    QuadPrism,
    /// Coarse ring of triangles standing in for a sphere
    SphereRing,
    Cube,
    /// Open side wall, no caps
    Cylinder,
    /// Base plus three shrinking floors
    Building,
    /// Trunk with a sine-modulated radius
    Organic,
}

impl Archetype {
    pub fn all() -> &'static [Archetype] {
        &[
            Archetype::QuadPrism,
            Archetype::SphereRing,
            Archetype::Cube,
            Archetype::Cylinder,
            Archetype::Building,
            Archetype::Organic,
        ]
    }

    /// Map a free-text prompt to an archetype.
    ///
    /// Matching is case-insensitive substring search. Primitive keywords win
    /// in the order sphere, cube, cylinder; then building and organic words
    /// are checked. Anything else is a cube.
    pub fn select(prompt: &str) -> Self {
        let prompt = prompt.to_lowercase();

        if prompt.contains("sphere") {
            Archetype::SphereRing
        } else if prompt.contains("cube") {
            Archetype::Cube
        } else if prompt.contains("cylinder") {
            Archetype::Cylinder
        } else {
            Self::classify_complex(&prompt)
        }
    }

    fn classify_complex(prompt: &str) -> Self {
        if BUILDING_KEYWORDS.iter().any(|word| prompt.contains(word)) {
            Archetype::Building
        } else if ORGANIC_KEYWORDS.iter().any(|word| prompt.contains(word)) {
            Archetype::Organic
        } else {
            Archetype::Cube
        }
    }

    pub fn build(self) -> Mesh {
        match self {
            Archetype::QuadPrism => builders::quad_prism(),
            Archetype::SphereRing => builders::sphere_ring(),
            Archetype::Cube => builders::cube(),
            Archetype::Cylinder => builders::cylinder(),
            Archetype::Building => builders::building(),
            Archetype::Organic => builders::organic(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Archetype::QuadPrism => "quad_prism",
            Archetype::SphereRing => "sphere_ring",
            Archetype::Cube => "cube",
            Archetype::Cylinder => "cylinder",
            Archetype::Building => "building",
            Archetype::Organic => "organic",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

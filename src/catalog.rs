//! Species catalog and exported creature specs
//!
//! Wraps assembled skeletons with the movement-behavior identifiers and
//! timing constants the renderer expects, and provides the JSON boundary
//! for the full catalog. Construction stays pure and deterministic; the
//! catalog map is ordered so repeated serialization is byte-stable.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::body::templates;
use crate::body::{BuildError, Segment};

/// Renderer update cadence shared by every species.
pub const UPDATE_INTERVAL: f32 = 50.0;

/// Every buildable species.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Tadpole,
    Centipede,
    HorseshoeCrab,
    Crawdad,
    Newt,
    Jelly,
    Octopus,
    Starfish,
    Axolotl,
}

impl Species {
    pub const ALL: [Species; 9] = [
        Species::Tadpole,
        Species::Centipede,
        Species::HorseshoeCrab,
        Species::Crawdad,
        Species::Newt,
        Species::Jelly,
        Species::Octopus,
        Species::Starfish,
        Species::Axolotl,
    ];

    /// Key used for this species in the exported catalog map.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Tadpole => "tadpole",
            Self::Centipede => "centipede",
            Self::HorseshoeCrab => "horseshoe-crab",
            Self::Crawdad => "crawdad",
            Self::Newt => "newt",
            Self::Jelly => "jelly",
            Self::Octopus => "octopus",
            Self::Starfish => "starfish",
            Self::Axolotl => "axolotl",
        }
    }

    /// Assemble this species' skeleton.
    pub fn build(&self) -> Result<Segment, BuildError> {
        match self {
            Self::Tadpole => templates::tadpole(),
            Self::Centipede => templates::centipede(),
            Self::HorseshoeCrab => templates::horseshoe_crab(),
            Self::Crawdad => templates::crawdad(),
            Self::Newt => templates::newt(),
            Self::Jelly => templates::jelly(),
            Self::Octopus => templates::octopus(),
            Self::Starfish => templates::starfish(),
            Self::Axolotl => templates::axolotl(),
        }
    }

    /// Movement-behavior identifiers the renderer joins on.
    pub fn movement_behavior(&self) -> MovementBehavior {
        let (linear, rotational) = match self {
            Self::Tadpole => ("flitting", "twirling"),
            Self::Centipede => ("erratic", "twirling"),
            Self::HorseshoeCrab => ("flitting", "curious"),
            Self::Crawdad => ("pushing", "wary"),
            Self::Newt => ("deliberate", "curious"),
            Self::Jelly => ("hovering", "curious"),
            Self::Octopus => ("flitting", "curious"),
            Self::Starfish => ("hovering", "twirling"),
            Self::Axolotl => ("flitting", "twirling"),
        };
        MovementBehavior {
            linear: linear.to_string(),
            rotational: rotational.to_string(),
        }
    }

    /// Render magnification for this species.
    pub fn magnification(&self) -> u32 {
        match self {
            Self::Crawdad => 5,
            Self::Centipede => 8,
            _ => 10,
        }
    }
}

/// Named movement behaviors applied by the renderer's movement agent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovementBehavior {
    pub linear: String,
    pub rotational: String,
}

/// One exported creature: skeleton plus renderer metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatureSpec {
    pub movement_behavior: MovementBehavior,
    pub update_interval: f32,
    pub magnification: u32,
    pub root: Segment,
}

/// Assemble a single species into its exported spec.
pub fn assemble(species: Species) -> Result<CreatureSpec, BuildError> {
    Ok(CreatureSpec {
        movement_behavior: species.movement_behavior(),
        update_interval: UPDATE_INTERVAL,
        magnification: species.magnification(),
        root: species.build()?,
    })
}

/// Build the skeleton map for every species, keyed by display name.
///
/// A failure in any species aborts the whole catalog build; failures are
/// programmer error in a species layout, not a transient condition.
pub fn build_catalog() -> Result<BTreeMap<String, Segment>, BuildError> {
    let mut catalog = BTreeMap::new();
    for species in Species::ALL {
        catalog.insert(species.display_name().to_string(), species.build()?);
    }
    Ok(catalog)
}

/// Build the full creature-spec map for every species.
pub fn build_spec_catalog() -> Result<BTreeMap<String, CreatureSpec>, BuildError> {
    let mut catalog = BTreeMap::new();
    for species in Species::ALL {
        catalog.insert(species.display_name().to_string(), assemble(species)?);
    }
    Ok(catalog)
}

/// Serialize a catalog for the external renderer.
pub fn catalog_to_json<T: Serialize>(catalog: &BTreeMap<String, T>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(catalog)
}

/// Read a catalog back from its JSON form.
pub fn catalog_from_json<'a, T: Deserialize<'a>>(
    json: &'a str,
) -> serde_json::Result<BTreeMap<String, T>> {
    serde_json::from_str(json)
}

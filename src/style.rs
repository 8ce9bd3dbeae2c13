//! Per-species styling and flavor text
//!
//! Static lookup tables the external consumer joins on the species name.
//! Pure data, no logic.

use crate::catalog::Species;

/// Body color as a hex string.
pub fn color(species: Species) -> &'static str {
    match species {
        Species::Tadpole => "#264804",
        Species::Centipede => "#6F0606",
        Species::HorseshoeCrab => "#2A2727",
        Species::Crawdad => "#273663",
        Species::Newt => "#000000",
        Species::Jelly => "#3ED1E5",
        Species::Octopus => "#A10EB4",
        Species::Starfish => "#F07ABF",
        Species::Axolotl => "#F096C8",
    }
}

/// Render opacity in 0..=1. Soft-bodied species are translucent.
pub fn opacity(species: Species) -> f32 {
    match species {
        Species::Jelly => 0.5,
        Species::Tadpole | Species::Newt | Species::Axolotl => 0.9,
        _ => 1.0,
    }
}

/// Collection-card flavor text.
pub fn bio(species: Species) -> &'static str {
    match species {
        Species::Tadpole => {
            "The human condition writ small. Dry Land, the impossible dream of a \
             limbless, lungless fool. Must we change our very selves to conquer it?"
        }
        Species::Centipede => {
            "Technically a ventipede, but who can count that high anyway? Kids love \
             'em. Cobblers love 'em. Entomologists love 'em. I just can't get past \
             those scuttling legs."
        }
        Species::HorseshoeCrab => {
            "Predates its namesake lawn game by a mere 250 million years. You may \
             not like it, but this is what peak performance looks like."
        }
        Species::Crawdad => {
            "Your omnipotent Crawpa. Around the world, to the moon, beyond the \
             stars, into this tangle of nylon net. You'd follow him anywhere, you \
             chewy morsel, you."
        }
        Species::Newt => {
            "Heavy is the head that wears the crown. Good thing there is strength \
             in numbers. For real though, are you sure this water's safe to drink?"
        }
        Species::Jelly => {
            "It was time to hang up the gloves for good. He could float, he could \
             sting, but Coach was right. He was just too soft. He lacked that \
             animalistic instinct."
        }
        Species::Octopus => {
            "Don't feel inadequate, my many-armed friend. Six is plenty, even \
             rounding up. Eight is probably too much anyway. No I'm not \"just \
             saying\" that!"
        }
        Species::Starfish => {
            "Starfish or sea stars are star-shaped echinoderms belonging to the \
             class Asteroidea. They are found from the intertidal zone down to \
             abyssal depths, at 6,000m below the surface."
        }
        Species::Axolotl => {
            "He is so much more than a cute lil' guy. He's also a squiggly boy, a \
             sweetie pie, a winsome fellow. A cherub too. If they only knew his \
             multitudes..."
        }
    }
}

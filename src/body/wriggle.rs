//! Periodic motion descriptors
//!
//! A wriggle spec parameterizes one oscillation layered on a segment:
//! amplitude, period, and how its phase relates to the rest of the chain.
//! The renderer folds every spec on a segment into that segment's
//! animated body angle.

use serde::{Deserialize, Serialize};

use super::segment::BuildError;

/// A periodic motion descriptor attached to a single segment.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WriggleSpec {
    /// Peak angular deflection (degrees)
    pub range: f32,
    /// Time to complete one oscillation
    pub period: f32,
    /// This segment's phase index within its chain
    pub i: u32,
    /// Phase increment per unit of `i`; 0 means all indices share phase
    pub squiggle_rate: f32,
    /// Constant phase bias, used to desynchronize otherwise-equal limbs
    pub offset: f32,
    /// When true, every segment sharing this spec peaks simultaneously
    pub synchronize: bool,
}

/// Wriggle that curls a whole chain together, like an octopus arm.
/// If `range * (chain length) >= 360` the chain can close into a loop
/// at full curl.
pub fn curl(range: f32, period: f32, i: u32, offset: f32) -> WriggleSpec {
    WriggleSpec {
        range,
        period,
        i,
        squiggle_rate: 0.0,
        offset,
        synchronize: true,
    }
}

/// Wriggle that travels down a chain like a snake.
///
/// `length` equal to the chain's own segment count yields one full wave
/// across the chain; smaller values give a partial, standing-wave-like
/// oscillation.
pub fn squiggle(
    range: f32,
    period: f32,
    i: u32,
    length: usize,
    offset: f32,
) -> Result<WriggleSpec, BuildError> {
    if length == 0 {
        return Err(BuildError::InvalidParameter {
            field: "length",
            value: 0.0,
        });
    }
    Ok(WriggleSpec {
        range,
        period,
        i,
        squiggle_rate: 1.0 / length as f32,
        offset,
        synchronize: false,
    })
}

/// Wriggle that keeps a chain in a straight line, the whole line swinging
/// back and forth as one unit.
pub fn rotation(range: f32, period: f32, offset: f32) -> WriggleSpec {
    WriggleSpec {
        range,
        period,
        i: 0,
        squiggle_rate: 0.0,
        offset,
        synchronize: false,
    }
}

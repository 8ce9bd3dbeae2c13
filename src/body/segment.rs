//! Segment tree node and builder primitives
//!
//! Defines the core structures for representing a creature skeleton: a
//! rooted out-tree of rigid segments, each owning its children. Segments
//! are created once, grow only by appending children during the same build
//! pass, and are immutable afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::wriggle::WriggleSpec;

/// Renderer delay (time units) staggering motion propagation from parent
/// to child when no other interval is requested.
pub const DEFAULT_PROPAGATION_INTERVAL: f32 = 100.0;

/// Attachment angle of a segment relative to its parent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyAngle {
    /// Attachment angle (degrees) off the parent's heading at rest
    pub relative: f32,
    /// Computed by the renderer at animation time; never set here
    pub absolute: f32,
    /// How far (0..=100) the renderer may deflect this joint
    pub curve_range: f32,
}

/// One rigid body-plate node in a creature's skeletal tree.
///
/// Child order is significant: it is traversal and render order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub radius: f32,
    pub body_angle: BodyAngle,
    pub wriggle: Vec<WriggleSpec>,
    pub overlap: f32,
    pub propagation_interval: f32,
    pub children: Vec<Segment>,
}

impl Segment {
    /// Create a bare leaf segment with the default propagation interval.
    pub fn new(radius: f32) -> Result<Self, BuildError> {
        Self::with_propagation_interval(radius, DEFAULT_PROPAGATION_INTERVAL)
    }

    /// Create a bare leaf segment with an explicit propagation interval.
    pub fn with_propagation_interval(
        radius: f32,
        propagation_interval: f32,
    ) -> Result<Self, BuildError> {
        check_radius(radius)?;
        Ok(Segment {
            radius,
            body_angle: BodyAngle::default(),
            wriggle: Vec::new(),
            overlap: 0.0,
            propagation_interval,
            children: Vec::new(),
        })
    }

    /// Extend this segment with a linear chain of `count` new segments.
    ///
    /// For each index in `0..count`, builds a segment from the config
    /// returned by `per_segment(index)`, appends it as the last child of
    /// the running cursor, and advances the cursor. Returns the tail
    /// segment so callers can keep branching from the chain's end.
    pub fn append_chain<F>(
        &mut self,
        count: usize,
        mut per_segment: F,
    ) -> Result<&mut Segment, BuildError>
    where
        F: FnMut(usize) -> Result<SegmentConfig, BuildError>,
    {
        if count == 0 {
            return Err(BuildError::InvalidParameter {
                field: "count",
                value: 0.0,
            });
        }
        let mut cursor = self;
        for index in 0..count {
            let link = per_segment(index)?.into_segment()?;
            cursor.children.push(link);
            cursor = cursor
                .children
                .last_mut()
                .expect("chain link was just appended");
        }
        Ok(cursor)
    }

    /// Walk `generations` steps down the first-child link.
    ///
    /// Used when an assembler branches limb pairs off a specific spine
    /// node. Fails if the tree ends before reaching the requested depth.
    pub fn descend_first_child(
        &mut self,
        generations: usize,
    ) -> Result<&mut Segment, BuildError> {
        let mut cursor = self;
        for step in 0..generations {
            cursor = match cursor.children.first_mut() {
                Some(child) => child,
                None => {
                    return Err(BuildError::Structural {
                        wanted: generations,
                        reached: step,
                    })
                }
            };
        }
        Ok(cursor)
    }
}

/// Per-step description of one chain segment.
///
/// Produced by chain builders for each index along a chain and validated
/// in one place when converted into a `Segment`.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentConfig {
    pub radius: f32,
    pub angle: f32,
    pub curve_range: f32,
    pub overlap: f32,
    pub wriggle: Vec<WriggleSpec>,
    pub propagation_interval: f32,
}

impl SegmentConfig {
    pub fn new(radius: f32) -> Self {
        SegmentConfig {
            radius,
            angle: 0.0,
            curve_range: 0.0,
            overlap: 0.0,
            wriggle: Vec::new(),
            propagation_interval: DEFAULT_PROPAGATION_INTERVAL,
        }
    }

    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    pub fn with_curve_range(mut self, curve_range: f32) -> Self {
        self.curve_range = curve_range;
        self
    }

    pub fn with_overlap(mut self, overlap: f32) -> Self {
        self.overlap = overlap;
        self
    }

    pub fn with_wriggle(mut self, wriggle: Vec<WriggleSpec>) -> Self {
        self.wriggle = wriggle;
        self
    }

    /// Validate and convert into a segment. The single checkpoint for
    /// every radius, curve range, and overlap entering the tree.
    pub fn into_segment(self) -> Result<Segment, BuildError> {
        check_radius(self.radius)?;
        if !self.curve_range.is_finite() || !(0.0..=100.0).contains(&self.curve_range) {
            return Err(BuildError::InvalidParameter {
                field: "curve_range",
                value: self.curve_range,
            });
        }
        if !self.overlap.is_finite() || self.overlap < 0.0 {
            return Err(BuildError::InvalidParameter {
                field: "overlap",
                value: self.overlap,
            });
        }
        Ok(Segment {
            radius: self.radius,
            body_angle: BodyAngle {
                relative: self.angle,
                absolute: 0.0,
                curve_range: self.curve_range,
            },
            wriggle: self.wriggle,
            overlap: self.overlap,
            propagation_interval: self.propagation_interval,
            children: Vec::new(),
        })
    }
}

/// A radius must be positive, finite, and normal. Multiplicative taper
/// never reaches zero mathematically but can underflow; underflow is an
/// error, never floored.
fn check_radius(radius: f32) -> Result<(), BuildError> {
    if !radius.is_finite() || radius < f32::MIN_POSITIVE {
        return Err(BuildError::InvalidParameter {
            field: "radius",
            value: radius,
        });
    }
    Ok(())
}

/// Errors raised while assembling a skeleton
#[derive(Debug, Clone, PartialEq)]
pub enum BuildError {
    /// A numeric parameter was outside its valid domain
    InvalidParameter { field: &'static str, value: f32 },
    /// An assembler addressed a descendant that does not exist
    Structural { wanted: usize, reached: usize },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::InvalidParameter { field, value } => {
                write!(f, "invalid {}: {}", field, value)
            }
            BuildError::Structural { wanted, reached } => {
                write!(
                    f,
                    "no descendant {} generations down the first-child link (tree ends after {})",
                    wanted, reached
                )
            }
        }
    }
}

impl std::error::Error for BuildError {}

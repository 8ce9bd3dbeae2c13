//! Skeleton construction module
//!
//! Provides the segment tree, periodic-motion descriptors, chain
//! primitives, and per-species skeleton templates.

pub mod chains;
pub mod segment;
pub mod templates;
pub mod wriggle;

// Re-export commonly used types
pub use segment::{
    BodyAngle, BuildError, Segment, SegmentConfig, DEFAULT_PROPAGATION_INTERVAL,
};
pub use wriggle::{curl, rotation, squiggle, WriggleSpec};

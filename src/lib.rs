//! Creature skeleton generation library
//!
//! Procedurally builds hierarchical skeletal descriptions for an external
//! animation renderer. Each creature is a tree of rigid body segments
//! carrying geometry (radius, attachment angle, allowed curvature) and
//! periodic-motion descriptors that the renderer applies each frame.

pub mod body;
pub mod catalog;
pub mod style;

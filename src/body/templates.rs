//! Species skeleton templates
//!
//! One assembler per species, composing the chain primitives with that
//! species' fixed anatomical layout (limb counts, angles, tapers). Each
//! assembler is a pure function of its literals: building the same
//! species twice yields identical trees.

use super::chains::{add_frill, add_leg, add_octo_arm, add_spike, add_tapered_snake};
use super::segment::{BuildError, Segment, SegmentConfig};
use super::wriggle::squiggle;

/// Simple tapered body: a head and a single snake tail.
pub fn tadpole() -> Result<Segment, BuildError> {
    let mut head = Segment::new(20.0)?;
    add_tapered_snake(&mut head, 15.0, 10, 0.0, 0.9, 0.0)?;
    Ok(head)
}

/// Segmented body with a rippling leg pair on every body segment. Leg
/// phase is tied to the segment index so the gait travels down the body.
pub fn centipede() -> Result<Segment, BuildError> {
    const BODY_LENGTH: usize = 10;
    let mut head = Segment::new(13.0)?;
    let mut cursor = &mut head;
    for i in 0..BODY_LENGTH {
        let wave = squiggle(10.0, 1.0, i as u32, BODY_LENGTH * 2, 0.0)?;
        cursor = cursor.append_chain(1, |_| {
            Ok(SegmentConfig::new(10.0)
                .with_curve_range(100.0)
                .with_wriggle(vec![wave]))
        })?;
        add_leg(cursor, 1.0, 5, 80.0, i as f32)?;
        add_leg(cursor, 1.0, 5, -80.0, i as f32)?;
    }
    Ok(head)
}

/// Broad head over a smaller body plate ringed by a rigid shell spike.
pub fn horseshoe_crab() -> Result<Segment, BuildError> {
    let mut head = Segment::new(40.0)?;
    let body = head.append_chain(1, |_| Ok(SegmentConfig::new(30.0).with_overlap(30.0)))?;
    add_spike(body, 3.0, 5, 0.0)?;
    Ok(head)
}

/// Armored chain with paired legs and a bilateral tail fan.
pub fn crawdad() -> Result<Segment, BuildError> {
    let mut head = Segment::new(30.0)?;
    let mut cursor = &mut head;
    for r in [22.0, 18.0, 15.0] {
        cursor = cursor.append_chain(1, |_| Ok(SegmentConfig::new(r).with_overlap(r)))?;
        add_leg(cursor, 2.0, 5, 90.0, 0.0)?;
        add_leg(cursor, 2.0, 5, -90.0, 0.0)?;
    }
    // Build the tail and both scales fully before attaching anything.
    let mut tail = SegmentConfig::new(13.0).with_overlap(13.0).into_segment()?;
    let left_scale = SegmentConfig::new(15.0)
        .with_angle(45.0)
        .with_overlap(15.0)
        .into_segment()?;
    let right_scale = SegmentConfig::new(15.0)
        .with_angle(-45.0)
        .with_overlap(15.0)
        .into_segment()?;
    tail.children.push(left_scale);
    tail.children.push(right_scale);
    cursor.children.push(tail);
    Ok(head)
}

/// Branching spine with two bilateral limb pairs, placed by walking the
/// first-child link down the spine.
pub fn newt() -> Result<Segment, BuildError> {
    let mut head = Segment::new(20.0)?;
    add_tapered_snake(&mut head, 10.0, 15, 0.0, 0.95, 0.5)?;

    let shoulders = head.descend_first_child(1)?;
    let front_radius = shoulders.radius / 2.0;
    add_tapered_snake(shoulders, front_radius, 5, 45.0, 0.9, 0.5)?;
    add_tapered_snake(shoulders, front_radius, 5, -45.0, 0.9, 0.5)?;

    let hips = shoulders.descend_first_child(2)?;
    let hind_radius = hips.radius / 2.0;
    add_tapered_snake(hips, hind_radius, 5, 45.0, 0.9, 0.5)?;
    add_tapered_snake(hips, hind_radius, 5, -45.0, 0.9, 0.5)?;

    Ok(head)
}

/// Layered fringe skirt: three frill passes at decreasing angular spread.
pub fn jelly() -> Result<Segment, BuildError> {
    let mut head = Segment::new(40.0)?;
    for increment in [10.0, 5.0, 2.0] {
        for i in 0..7 {
            let angle = increment * (i as f32 - 4.0);
            add_frill(&mut head, 2.0, 8, angle)?;
        }
    }
    Ok(head)
}

/// Six curling arms fanned around the head, each with a distinct phase
/// offset so the limbs never look synchronized.
pub fn octopus() -> Result<Segment, BuildError> {
    let mut head = Segment::new(40.0)?;
    for i in 0..6 {
        let angle = 8.0 + 16.0 * (i as f32 - 3.0);
        let offset = (29 * i % 17) as f32;
        add_octo_arm(&mut head, 15.0, 12, angle, 0.90, offset)?;
    }
    Ok(head)
}

/// Five curling arms at even 72 degree spacing.
pub fn starfish() -> Result<Segment, BuildError> {
    let mut head = Segment::new(20.0)?;
    for i in 0..5u32 {
        let angle = ((180 + 72 * i) % 360) as f32;
        add_octo_arm(&mut head, 15.0, 8, angle, 0.90, 0.0)?;
    }
    Ok(head)
}

/// Newt body plus six curling gill plumes radiating from the head.
pub fn axolotl() -> Result<Segment, BuildError> {
    let mut head = newt()?;
    for i in 0..6 {
        let angle = 30.0 + 60.0 * i as f32;
        add_octo_arm(&mut head, 2.0, 5, angle, 0.9, 0.0)?;
    }
    Ok(head)
}

//! Chain primitives
//!
//! Species-agnostic builders that grow a linear run of segments off a
//! parent: a rigidly swinging leg, an immobile tapering spike, a curling
//! arm, a traveling-wave snake body, and a slow-waving frill. Assemblers
//! compose these with per-species layout parameters.

use super::segment::{BuildError, Segment, SegmentConfig};
use super::wriggle::{curl, rotation, squiggle};

/// A leg that swings rigidly through a gait cycle. `offset` staggers the
/// phase so legs on the same body desynchronize.
pub fn add_leg<'a>(
    parent: &'a mut Segment,
    radius: f32,
    length: usize,
    angle: f32,
    offset: f32,
) -> Result<&'a mut Segment, BuildError> {
    let swing = rotation(45.0, 2.0, offset);
    parent.append_chain(length, |_| {
        Ok(SegmentConfig::new(radius)
            .with_angle(angle)
            .with_curve_range(100.0)
            .with_wriggle(vec![swing]))
    })
}

/// A rigid, immobile spike whose radius shrinks linearly to (near) zero
/// over its length.
pub fn add_spike<'a>(
    parent: &'a mut Segment,
    radius: f32,
    length: usize,
    angle: f32,
) -> Result<&'a mut Segment, BuildError> {
    // Taper is applied after each step, so the last segment keeps a
    // positive radius of radius/length.
    let taper = radius / length.max(1) as f32;
    parent.append_chain(length, |i| {
        Ok(SegmentConfig::new(radius - taper * i as f32)
            .with_angle(angle)
            .with_curve_range(100.0))
    })
}

/// A geometrically tapering arm whose segments curl in unison, phase
/// shifted per limb by `offset`.
pub fn add_octo_arm<'a>(
    parent: &'a mut Segment,
    radius: f32,
    length: usize,
    angle: f32,
    taper_factor: f32,
    offset: f32,
) -> Result<&'a mut Segment, BuildError> {
    if !taper_factor.is_finite() || taper_factor <= 0.0 || taper_factor >= 1.0 {
        return Err(BuildError::InvalidParameter {
            field: "taper_factor",
            value: taper_factor,
        });
    }
    let mut tapered = radius;
    parent.append_chain(length, |i| {
        tapered *= taper_factor;
        Ok(SegmentConfig::new(tapered)
            .with_angle(angle)
            .with_curve_range(100.0)
            .with_overlap(tapered / 2.0)
            .with_wriggle(vec![curl(120.0 / length as f32, 2.0, i as u32, offset)]))
    })
}

/// A geometrically tapering body with a slow traveling wave spanning
/// double the chain length. Returns the tail so spinal branches can
/// attach at the end.
pub fn add_tapered_snake<'a>(
    parent: &'a mut Segment,
    radius: f32,
    length: usize,
    angle: f32,
    taper_factor: f32,
    overlap_mult: f32,
) -> Result<&'a mut Segment, BuildError> {
    if !taper_factor.is_finite() || taper_factor <= 0.0 {
        return Err(BuildError::InvalidParameter {
            field: "taper_factor",
            value: taper_factor,
        });
    }
    let mut tapered = radius;
    parent.append_chain(length, |i| {
        tapered *= taper_factor;
        Ok(SegmentConfig::new(tapered)
            .with_angle(angle)
            .with_curve_range(100.0)
            .with_overlap(overlap_mult * tapered)
            .with_wriggle(vec![squiggle(10.0, 1.0, i as u32, length * 2, 0.0)?]))
    })
}

/// A thin, non-tapering fringe with a very slow, long wave. Only the
/// first segment carries the base angle; the rest trail their parent.
pub fn add_frill<'a>(
    parent: &'a mut Segment,
    radius: f32,
    length: usize,
    angle: f32,
) -> Result<&'a mut Segment, BuildError> {
    parent.append_chain(length, |i| {
        Ok(SegmentConfig::new(radius)
            .with_angle(if i == 0 { angle } else { 0.0 })
            .with_curve_range(100.0)
            .with_wriggle(vec![squiggle(10.0, 5.0, i as u32, length * 10, 0.0)?]))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_chain(root: &Segment) -> Vec<&Segment> {
        let mut chain = Vec::new();
        let mut cursor = root;
        while let Some(child) = cursor.children.first() {
            chain.push(child);
            cursor = child;
        }
        chain
    }

    #[test]
    fn test_leg_swings_rigidly() {
        let mut parent = Segment::new(10.0).unwrap();
        add_leg(&mut parent, 1.0, 5, 80.0, 3.0).unwrap();
        let chain = collect_chain(&parent);
        assert_eq!(chain.len(), 5);
        for segment in chain {
            assert_eq!(segment.radius, 1.0);
            assert_eq!(segment.body_angle.relative, 80.0);
            assert_eq!(segment.body_angle.curve_range, 100.0);
            assert_eq!(segment.wriggle.len(), 1);
            let spec = &segment.wriggle[0];
            assert_eq!(spec.range, 45.0);
            assert_eq!(spec.period, 2.0);
            assert_eq!(spec.i, 0);
            assert_eq!(spec.squiggle_rate, 0.0);
            assert_eq!(spec.offset, 3.0);
            assert!(!spec.synchronize);
        }
    }

    #[test]
    fn test_spike_tapers_linearly_and_stays_positive() {
        let mut parent = Segment::new(10.0).unwrap();
        add_spike(&mut parent, 3.0, 5, 0.0).unwrap();
        let chain = collect_chain(&parent);
        assert_eq!(chain.len(), 5);
        for (k, segment) in chain.iter().enumerate() {
            let expected = 3.0 - 0.6 * k as f32;
            assert!((segment.radius - expected).abs() < 1e-5);
            assert!(segment.radius > 0.0);
            assert!(segment.wriggle.is_empty());
        }
        assert!((chain.last().unwrap().radius - 0.6).abs() < 1e-5);
    }

    #[test]
    fn test_octo_arm_curls_in_unison() {
        let mut parent = Segment::new(40.0).unwrap();
        add_octo_arm(&mut parent, 15.0, 12, 8.0, 0.90, 6.0).unwrap();
        let chain = collect_chain(&parent);
        assert_eq!(chain.len(), 12);
        let mut previous = 15.0;
        for (k, segment) in chain.iter().enumerate() {
            assert!(segment.radius < previous);
            assert!((segment.overlap - segment.radius / 2.0).abs() < 1e-6);
            let spec = &segment.wriggle[0];
            assert!((spec.range - 10.0).abs() < 1e-6);
            assert_eq!(spec.i, k as u32);
            assert_eq!(spec.offset, 6.0);
            assert!(spec.synchronize);
            previous = segment.radius;
        }
    }

    #[test]
    fn test_octo_arm_rejects_bad_taper() {
        let mut parent = Segment::new(40.0).unwrap();
        assert!(add_octo_arm(&mut parent, 15.0, 12, 8.0, 0.0, 0.0).is_err());
        assert!(add_octo_arm(&mut parent, 15.0, 12, 8.0, 1.0, 0.0).is_err());
        assert!(add_octo_arm(&mut parent, 15.0, 12, 8.0, -0.5, 0.0).is_err());
        assert!(parent.children.is_empty());
    }

    #[test]
    fn test_tapered_snake_radii_and_wave() {
        let mut head = Segment::new(20.0).unwrap();
        add_tapered_snake(&mut head, 15.0, 10, 0.0, 0.9, 0.0).unwrap();
        let chain = collect_chain(&head);
        assert_eq!(chain.len(), 10);
        let mut expected = 15.0;
        for (k, segment) in chain.iter().enumerate() {
            expected *= 0.9;
            assert!((segment.radius - expected).abs() < 1e-4);
            let spec = &segment.wriggle[0];
            assert!((spec.squiggle_rate - 1.0 / 20.0).abs() < 1e-6);
            assert_eq!(spec.i, k as u32);
            assert!(!spec.synchronize);
        }
        // strictly decreasing down the chain
        for pair in chain.windows(2) {
            assert!(pair[1].radius < pair[0].radius);
        }
    }

    #[test]
    fn test_tapered_snake_returns_tail() {
        let mut head = Segment::new(20.0).unwrap();
        let tail = add_tapered_snake(&mut head, 15.0, 3, 0.0, 0.9, 0.5).unwrap();
        assert!(tail.children.is_empty());
        assert!((tail.radius - 15.0 * 0.9 * 0.9 * 0.9).abs() < 1e-4);
        assert!((tail.overlap - 0.5 * tail.radius).abs() < 1e-5);
    }

    #[test]
    fn test_snake_underflow_fails_instead_of_flooring() {
        let mut head = Segment::new(20.0).unwrap();
        let result = add_tapered_snake(&mut head, 1.0, 2000, 0.0, 0.01, 0.0);
        assert!(matches!(
            result,
            Err(BuildError::InvalidParameter { field: "radius", .. })
        ));
    }

    #[test]
    fn test_frill_angle_only_on_first_segment() {
        let mut parent = Segment::new(40.0).unwrap();
        add_frill(&mut parent, 2.0, 8, 10.0).unwrap();
        let chain = collect_chain(&parent);
        assert_eq!(chain.len(), 8);
        assert_eq!(chain[0].body_angle.relative, 10.0);
        for segment in &chain[1..] {
            assert_eq!(segment.body_angle.relative, 0.0);
        }
        for (k, segment) in chain.iter().enumerate() {
            assert_eq!(segment.radius, 2.0);
            assert_eq!(segment.overlap, 0.0);
            let spec = &segment.wriggle[0];
            assert_eq!(spec.period, 5.0);
            assert!((spec.squiggle_rate - 1.0 / 80.0).abs() < 1e-6);
            assert_eq!(spec.i, k as u32);
        }
    }
}

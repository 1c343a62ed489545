// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cull-rectangle math.
//!
//! A *cull rectangle* is the axis-aligned region, in the coordinate space of
//! the currently open group, believed to contain all content that can
//! possibly be visible. Opening a clip group shrinks it; opening a transform
//! group re-expresses it in the transform's local space; leaf emission tests
//! against it to drop provably invisible content before a layer is ever
//! created.
//!
//! All rules here are conservative: when in doubt (degenerate transform,
//! unbounded region) the result errs towards retaining content, never towards
//! pruning something visible.

use kurbo::{Affine, Rect};

/// The "everything is visible" sentinel rectangle.
///
/// Seeded at the bottom of the builder's cull stack and used whenever no
/// tighter bound is known. Large enough to contain any plausible scene, yet
/// far from `f64::MAX` so that mapping it through a transform stays finite.
pub const UNBOUNDED: Rect = Rect::new(-1e9, -1e9, 1e9, 1e9);

/// Computes the cull rectangle for the children of a transform group.
///
/// The children live in the transform's local space, so the parent's cull
/// rectangle is mapped through the *inverse* transform (as a conservative
/// bounding box). A non-invertible transform has no local-space equivalent of
/// the parent region; the fallback is [`UNBOUNDED`], which never prunes
/// content under a degenerate transform.
#[must_use]
pub fn transformed_cull(transform: Affine, current: Rect) -> Rect {
    let det = transform.determinant();
    if det == 0.0 || !det.is_finite() {
        return UNBOUNDED;
    }
    transform.inverse().transform_rect_bbox(current)
}

/// Computes the cull rectangle for the children of a clip group.
///
/// Returns the intersection of the clip shape's bounds with the current cull
/// rectangle, or [`Rect::ZERO`] when they are disjoint. An empty result does
/// not abort the push — the clip group is still created so pop accounting
/// stays balanced — it just means every spatial leaf underneath will be
/// pruned as it is emitted.
#[must_use]
pub fn clipped_cull(clip_bounds: Rect, current: Rect) -> Rect {
    let intersection = clip_bounds.intersect(current);
    if intersection.is_zero_area() {
        Rect::ZERO
    } else {
        intersection
    }
}

/// Returns whether two rectangles overlap with positive area.
///
/// Edge-touching rectangles do not count as overlapping; a leaf that only
/// grazes the visible region contributes no pixels.
#[must_use]
pub fn intersects(a: Rect, b: Rect) -> bool {
    !a.intersect(b).is_zero_area()
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::*;

    #[test]
    fn clip_inside_narrows() {
        let current = Rect::new(0.0, 0.0, 100.0, 100.0);
        let clip = Rect::new(10.0, 10.0, 50.0, 50.0);
        assert_eq!(clipped_cull(clip, current), clip);
    }

    #[test]
    fn clip_partial_overlap_intersects() {
        let current = Rect::new(0.0, 0.0, 100.0, 100.0);
        let clip = Rect::new(50.0, 50.0, 150.0, 150.0);
        assert_eq!(
            clipped_cull(clip, current),
            Rect::new(50.0, 50.0, 100.0, 100.0)
        );
    }

    #[test]
    fn disjoint_clip_is_empty() {
        let current = Rect::new(0.0, 0.0, 100.0, 100.0);
        let clip = Rect::new(200.0, 200.0, 300.0, 300.0);
        assert_eq!(clipped_cull(clip, current), Rect::ZERO);
    }

    #[test]
    fn translation_maps_through_inverse() {
        let current = Rect::new(100.0, 100.0, 200.0, 200.0);
        let transform = Affine::translate(Vec2::new(100.0, 100.0));
        // Children drawn at local (0,0) land at world (100,100).
        assert_eq!(
            transformed_cull(transform, current),
            Rect::new(0.0, 0.0, 100.0, 100.0)
        );
    }

    #[test]
    fn scale_maps_through_inverse() {
        let current = Rect::new(0.0, 0.0, 100.0, 100.0);
        let transform = Affine::scale(2.0);
        assert_eq!(
            transformed_cull(transform, current),
            Rect::new(0.0, 0.0, 50.0, 50.0)
        );
    }

    #[test]
    fn singular_transform_falls_back_to_unbounded() {
        let current = Rect::new(0.0, 0.0, 100.0, 100.0);
        let singular = Affine::new([0.0, 0.0, 0.0, 0.0, 5.0, 5.0]);
        assert_eq!(transformed_cull(singular, current), UNBOUNDED);
    }

    #[test]
    fn non_finite_transform_falls_back_to_unbounded() {
        let current = Rect::new(0.0, 0.0, 100.0, 100.0);
        let bad = Affine::new([f64::NAN, 0.0, 0.0, 1.0, 0.0, 0.0]);
        assert_eq!(transformed_cull(bad, current), UNBOUNDED);
    }

    #[test]
    fn overlap_requires_positive_area() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(intersects(a, Rect::new(5.0, 5.0, 15.0, 15.0)));
        // Sharing only an edge contributes no pixels.
        assert!(!intersects(a, Rect::new(10.0, 0.0, 20.0, 10.0)));
        assert!(!intersects(a, Rect::new(20.0, 20.0, 30.0, 30.0)));
        assert!(!intersects(a, Rect::ZERO));
    }

    #[test]
    fn unbounded_overlaps_everything_finite() {
        assert!(intersects(UNBOUNDED, Rect::new(-5e8, -5e8, 5e8, 5e8)));
        assert!(intersects(UNBOUNDED, Rect::new(1e6, 1e6, 1e6 + 1.0, 1e6 + 1.0)));
    }
}

// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed set of layer kinds.

use kurbo::{Affine, BezPath, Rect, RoundedRect, Vec2};

#[cfg(feature = "embedded-scene")]
use kurbo::Size;

#[cfg(feature = "embedded-scene")]
use crate::paint::SceneHandle;
use crate::paint::{BlendMode, Color, ImageFilter, OverlayOptions, Picture, Shader};

/// The kind of a layer, with its kind-specific properties.
///
/// Kinds come in two capability classes. *Group* kinds can own an ordered
/// list of children and contribute a geometric or appearance effect to them;
/// *leaf* kinds are terminal and carry directly renderable content. The
/// builder enforces the distinction: only group kinds are ever pushed onto the
/// open-group stack, and only leaf kinds are emitted into an open group.
///
/// Properties are assigned once when the layer is created and never mutated
/// afterwards.
#[derive(Clone, Debug, PartialEq)]
pub enum LayerKind {
    /// Applies a 2-D affine transform to descendants.
    Transform(Affine),
    /// Clips descendants to an axis-aligned rectangle.
    ClipRect(Rect),
    /// Clips descendants to a rounded rectangle.
    ClipRoundedRect(RoundedRect),
    /// Clips descendants to an arbitrary path.
    ClipPath(BezPath),
    /// Modulates the opacity of descendants (0 = transparent, 255 = opaque).
    Opacity(u8),
    /// Blends a solid color over descendants.
    ColorFilter {
        /// Filter color.
        color: Color,
        /// How the color combines with the descendants.
        blend_mode: BlendMode,
    },
    /// Applies an image filter to everything already painted below this group.
    BackdropFilter(ImageFilter),
    /// Masks descendants with a shader over a rectangle.
    ShaderMask {
        /// Mask shader.
        shader: Shader,
        /// Region the mask applies to.
        mask_rect: Rect,
        /// How the mask combines with the descendants.
        blend_mode: BlendMode,
    },
    /// A shadow-casting rounded-rect surface that also clips descendants.
    PhysicalShape {
        /// The surface's shape.
        shape: RoundedRect,
        /// Shadow elevation in logical pixels.
        elevation: f64,
        /// Surface color.
        color: Color,
        /// Ratio of physical to logical pixels, for shadow rasterization.
        device_pixel_ratio: f64,
    },
    /// A frame-statistics overlay.
    PerformanceOverlay {
        /// Which statistics to display.
        options: OverlayOptions,
        /// Where to paint the overlay.
        bounds: Rect,
    },
    /// A recorded picture placed at an offset.
    Picture {
        /// Placement offset in the parent group's coordinate space.
        offset: Vec2,
        /// The recording and its intrinsic bounds.
        picture: Picture,
        /// Hint: the recording is expensive and worth caching.
        is_complex: bool,
        /// Hint: the recording is likely to change next frame.
        will_change: bool,
    },
    /// An externally produced sub-scene placed at an offset.
    #[cfg(feature = "embedded-scene")]
    EmbeddedScene {
        /// Placement offset in the parent group's coordinate space.
        offset: Vec2,
        /// Size of the embedded viewport.
        size: Size,
        /// Handle to the external scene.
        scene: SceneHandle,
        /// Whether the sub-scene participates in hit testing.
        hit_testable: bool,
    },
}

impl LayerKind {
    /// Returns whether this kind can own children.
    #[must_use]
    pub const fn is_group(&self) -> bool {
        match self {
            Self::Transform(_)
            | Self::ClipRect(_)
            | Self::ClipRoundedRect(_)
            | Self::ClipPath(_)
            | Self::Opacity(_)
            | Self::ColorFilter { .. }
            | Self::BackdropFilter(_)
            | Self::ShaderMask { .. }
            | Self::PhysicalShape { .. } => true,
            Self::PerformanceOverlay { .. } | Self::Picture { .. } => false,
            #[cfg(feature = "embedded-scene")]
            Self::EmbeddedScene { .. } => false,
        }
    }

    /// Returns whether this kind is a terminal node.
    #[inline]
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        !self.is_group()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::ResourceKey;

    #[test]
    fn group_kinds_can_own_children() {
        assert!(LayerKind::Transform(Affine::IDENTITY).is_group());
        assert!(LayerKind::ClipRect(Rect::ZERO).is_group());
        assert!(LayerKind::Opacity(128).is_group());
        assert!(
            LayerKind::ShaderMask {
                shader: Shader(ResourceKey(1)),
                mask_rect: Rect::ZERO,
                blend_mode: BlendMode::SourceOver,
            }
            .is_group()
        );
    }

    #[test]
    fn leaf_kinds_are_terminal() {
        let picture = LayerKind::Picture {
            offset: Vec2::ZERO,
            picture: Picture::new(ResourceKey(7), Rect::new(0.0, 0.0, 10.0, 10.0)),
            is_complex: false,
            will_change: false,
        };
        assert!(picture.is_leaf());
        assert!(!picture.is_group());

        let overlay = LayerKind::PerformanceOverlay {
            options: OverlayOptions::empty(),
            bounds: Rect::ZERO,
        };
        assert!(overlay.is_leaf());
    }
}

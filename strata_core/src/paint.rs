// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Opaque paint and content primitives.
//!
//! The builder treats all of these as values to be carried, not interpreted:
//! colors and blend modes parameterize filter groups, and the resource-backed
//! types ([`Picture`], [`ImageFilter`], [`Shader`]) stand in for content that
//! an external imaging pipeline owns. Only [`Picture::cull_rect`] is ever
//! inspected by this crate, for build-time pruning.

use core::fmt;

use kurbo::Rect;

/// A packed 8-bit-per-channel ARGB color.
///
/// Matches the wire format most raster backends consume directly; the builder
/// never performs color math on it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u32);

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self(0x0000_0000);
    /// Opaque black.
    pub const BLACK: Self = Self(0xFF00_0000);
    /// Opaque white.
    pub const WHITE: Self = Self(0xFFFF_FFFF);

    /// Creates a color from individual channel values.
    #[inline]
    #[must_use]
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(u32::from_be_bytes([a, r, g, b]))
    }

    /// Returns the alpha channel.
    #[inline]
    #[must_use]
    pub const fn alpha(self) -> u8 {
        self.0.to_be_bytes()[0]
    }

    /// Returns the red channel.
    #[inline]
    #[must_use]
    pub const fn red(self) -> u8 {
        self.0.to_be_bytes()[1]
    }

    /// Returns the green channel.
    #[inline]
    #[must_use]
    pub const fn green(self) -> u8 {
        self.0.to_be_bytes()[2]
    }

    /// Returns the blue channel.
    #[inline]
    #[must_use]
    pub const fn blue(self) -> u8 {
        self.0.to_be_bytes()[3]
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color(#{:08X})", self.0)
    }
}

/// Blend mode for compositing a group against its backdrop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BlendMode {
    /// Standard source-over alpha compositing.
    #[default]
    SourceOver,
    /// Replace the destination.
    Source,
    /// Clear the destination.
    Clear,
    /// Destination over source.
    DestinationOver,
    /// Multiply blend.
    Multiply,
    /// Screen blend.
    Screen,
}

/// An opaque handle to a backend-managed resource (recorded picture, filter
/// program, shader, etc.).
///
/// Resource keys are assigned by the surrounding imaging pipeline and passed
/// through the scene tree without interpretation.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceKey(pub u64);

impl fmt::Debug for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResourceKey({})", self.0)
    }
}

/// A recorded picture: an opaque content handle plus its intrinsic bounds.
///
/// `cull_rect` is the axis-aligned region the recording can possibly touch,
/// in the picture's own coordinate space. The builder offsets it by the
/// placement offset and tests it against the current cull rectangle to decide
/// whether the picture can be skipped entirely.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Picture {
    /// Handle to the recorded content.
    pub resource: ResourceKey,
    /// Intrinsic bounds of the recording.
    pub cull_rect: Rect,
}

impl Picture {
    /// Creates a picture from a resource handle and intrinsic bounds.
    #[inline]
    #[must_use]
    pub const fn new(resource: ResourceKey, cull_rect: Rect) -> Self {
        Self {
            resource,
            cull_rect,
        }
    }
}

/// An opaque handle to an image filter program.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageFilter(pub ResourceKey);

/// An opaque handle to a shader.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Shader(pub ResourceKey);

/// An opaque handle to an externally produced sub-scene.
#[cfg(feature = "embedded-scene")]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SceneHandle(pub ResourceKey);

bitflags::bitflags! {
    /// Option bits selecting what a performance overlay displays.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct OverlayOptions: u64 {
        /// Graph rasterizer frame times.
        const VISUALIZE_RASTERIZER_STATISTICS = 1 << 0;
        /// Print rasterizer frame times as text.
        const DISPLAY_RASTERIZER_STATISTICS = 1 << 1;
        /// Graph engine frame times.
        const VISUALIZE_ENGINE_STATISTICS = 1 << 2;
        /// Print engine frame times as text.
        const DISPLAY_ENGINE_STATISTICS = 1 << 3;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_channel_round_trip() {
        let c = Color::from_argb(0x12, 0x34, 0x56, 0x78);
        assert_eq!(c.alpha(), 0x12);
        assert_eq!(c.red(), 0x34);
        assert_eq!(c.green(), 0x56);
        assert_eq!(c.blue(), 0x78);
        assert_eq!(c.0, 0x1234_5678);
    }

    #[test]
    fn color_constants() {
        assert_eq!(Color::TRANSPARENT.alpha(), 0);
        assert_eq!(Color::BLACK.alpha(), 0xFF);
        assert_eq!(Color::WHITE, Color::from_argb(0xFF, 0xFF, 0xFF, 0xFF));
    }

    #[test]
    fn overlay_options_compose() {
        let opts =
            OverlayOptions::VISUALIZE_RASTERIZER_STATISTICS | OverlayOptions::DISPLAY_ENGINE_STATISTICS;
        assert!(opts.contains(OverlayOptions::VISUALIZE_RASTERIZER_STATISTICS));
        assert!(!opts.contains(OverlayOptions::DISPLAY_RASTERIZER_STATISTICS));
        assert_eq!(opts.bits(), (1 << 0) | (1 << 3));
    }
}

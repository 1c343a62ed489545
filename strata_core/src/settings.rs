// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostics settings carried alongside a scene.

/// Session-scoped diagnostics settings for the downstream rasterizer.
///
/// These are plain value slots: the builder stores them, copies them into the
/// [`Scene`](crate::scene::Scene) on handoff, and never interprets them. They
/// have no interaction with the tree logic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DiagnosticSettings {
    /// Frame-time threshold (in frame intervals) above which the rasterizer
    /// emits trace events. Zero disables the tracing.
    pub rasterizer_tracing_threshold: u32,
    /// Checkerboard images produced by the raster cache.
    pub checkerboard_raster_cache_images: bool,
    /// Checkerboard layers rendered to offscreen surfaces.
    pub checkerboard_offscreen_layers: bool,
}

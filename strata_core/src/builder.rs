// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The incremental scene builder.
//!
//! [`SceneBuilder`] turns a linear sequence of *push group* / *pop* / *emit
//! leaf* calls into a retained layer tree, while tracking a shrinking
//! visibility region (the cull rectangle) so that content provably outside
//! the visible area is dropped before it ever becomes a layer.
//!
//! Three pieces of state drive everything:
//!
//! - The **cull stack** — one rectangle per open group, on top of a permanent
//!   [`UNBOUNDED`](crate::cull::UNBOUNDED) sentinel that is never popped. The
//!   top is always the most restrictive currently-visible region.
//! - The **open-group pointer** — the innermost open group, which is both the
//!   insertion point for new layers and, via its parent link, the pop target.
//! - The **root slot** — the first group ever pushed; released exactly once
//!   by [`take_scene`](SceneBuilder::take_scene).
//!
//! The builder is transient and single-use per scene: construct, issue
//! calls, take the scene, discard.
//!
//! # Error policy
//!
//! Nothing here returns `Result` and no malformed call sequence panics. The
//! producer is a trusted scene-recording layer, and a crash mid-frame is
//! worse than a dropped node, so every malformed use degrades to a silent
//! no-op: unmatched pops, leaf emission with no open group, emission outside
//! the visible region, and double handoff all simply do nothing.

use alloc::boxed::Box;
use alloc::vec::Vec;

use kurbo::{Affine, BezPath, Rect, RoundedRect, Shape as _, Vec2};

#[cfg(feature = "embedded-scene")]
use kurbo::Size;

use crate::cull::{self, UNBOUNDED};
use crate::layer::{INVALID, LayerId, LayerKind, LayerStore};
#[cfg(feature = "embedded-scene")]
use crate::paint::SceneHandle;
use crate::paint::{BlendMode, Color, ImageFilter, OverlayOptions, Picture, Shader};
use crate::scene::Scene;
use crate::settings::DiagnosticSettings;
use crate::trace::{
    GroupPoppedEvent, GroupPushedEvent, LeafCulledEvent, LeafEmittedEvent, SceneTakenEvent,
    TraceSink, Tracer,
};

/// Builds one scene from a linear sequence of push/emit/pop calls.
///
/// # Example
///
/// ```
/// use kurbo::{Affine, Rect, Vec2};
/// use strata_core::builder::SceneBuilder;
/// use strata_core::paint::{Picture, ResourceKey};
///
/// let mut builder = SceneBuilder::new();
/// builder.push_transform(Affine::IDENTITY);
/// builder.push_clip_rect(Rect::new(0.0, 0.0, 100.0, 100.0));
/// // Visible: attached.
/// builder.add_picture(
///     Vec2::new(10.0, 10.0),
///     Picture::new(ResourceKey(1), Rect::new(0.0, 0.0, 20.0, 20.0)),
///     false,
///     false,
/// );
/// // Far outside the clip: pruned, never becomes a layer.
/// builder.add_picture(
///     Vec2::new(500.0, 500.0),
///     Picture::new(ResourceKey(2), Rect::new(0.0, 0.0, 20.0, 20.0)),
///     false,
///     false,
/// );
/// builder.pop();
/// builder.pop();
///
/// let scene = builder.take_scene().unwrap();
/// assert_eq!(scene.len(), 3); // transform, clip, one picture
/// assert!(builder.take_scene().is_none());
/// ```
pub struct SceneBuilder {
    store: LayerStore,
    /// One rectangle per open group above a permanent unbounded sentinel.
    cull_stack: Vec<Rect>,
    /// Root slot, [`INVALID`] until the first push and again after handoff.
    root: u32,
    /// Innermost open group, [`INVALID`] when no group is open.
    current: u32,
    open_groups: usize,
    settings: DiagnosticSettings,
    tracer: Tracer,
}

impl core::fmt::Debug for SceneBuilder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SceneBuilder")
            .field("layers", &self.store.len())
            .field("open_groups", &self.open_groups)
            .field("cull_stack_depth", &self.cull_stack.len())
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: LayerStore::new(),
            cull_stack: alloc::vec![UNBOUNDED],
            root: INVALID,
            current: INVALID,
            open_groups: 0,
            settings: DiagnosticSettings::default(),
            tracer: Tracer::none(),
        }
    }

    /// Creates an empty builder that reports build events to `sink`.
    ///
    /// With the `trace` feature disabled the sink is dropped and the builder
    /// behaves exactly like [`new`](Self::new).
    #[must_use]
    pub fn with_trace_sink(sink: Box<dyn TraceSink>) -> Self {
        let mut builder = Self::new();
        builder.tracer = Tracer::new(sink);
        builder
    }

    // -- Introspection --

    /// Returns the number of currently open groups.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.open_groups
    }

    /// Returns whether a group is currently open (leaf emission would attach).
    #[must_use]
    pub fn is_group_open(&self) -> bool {
        self.current != INVALID
    }

    /// Returns the current cull rectangle: the region, in the open group's
    /// coordinate space, that can possibly be visible.
    #[must_use]
    pub fn cull_rect(&self) -> Rect {
        // The bottom sentinel is never popped, so the stack is never empty.
        self.cull_stack.last().copied().unwrap_or(UNBOUNDED)
    }

    // -- Group operations --

    /// Opens a transform group.
    ///
    /// The children's cull rectangle is the current one mapped through the
    /// inverse transform; a non-invertible transform falls back to the
    /// unbounded rectangle so nothing underneath is ever pruned.
    pub fn push_transform(&mut self, transform: Affine) {
        let cull_rect = cull::transformed_cull(transform, self.cull_rect());
        self.push_group(LayerKind::Transform(transform), cull_rect);
    }

    /// Opens a rectangle clip group.
    pub fn push_clip_rect(&mut self, clip: Rect) {
        let cull_rect = cull::clipped_cull(clip, self.cull_rect());
        self.push_group(LayerKind::ClipRect(clip), cull_rect);
    }

    /// Opens a rounded-rectangle clip group.
    pub fn push_clip_rounded_rect(&mut self, clip: RoundedRect) {
        let cull_rect = cull::clipped_cull(clip.rect(), self.cull_rect());
        self.push_group(LayerKind::ClipRoundedRect(clip), cull_rect);
    }

    /// Opens a path clip group. Culling uses the path's bounding box.
    pub fn push_clip_path(&mut self, clip: BezPath) {
        let cull_rect = cull::clipped_cull(clip.bounding_box(), self.cull_rect());
        self.push_group(LayerKind::ClipPath(clip), cull_rect);
    }

    /// Opens an opacity group (`0` = transparent, `255` = opaque).
    ///
    /// Opacity modifies appearance, not visible extent, so the cull
    /// rectangle is unchanged.
    pub fn push_opacity(&mut self, alpha: u8) {
        let cull_rect = self.cull_rect();
        self.push_group(LayerKind::Opacity(alpha), cull_rect);
    }

    /// Opens a color-filter group. The cull rectangle is unchanged.
    pub fn push_color_filter(&mut self, color: Color, blend_mode: BlendMode) {
        let cull_rect = self.cull_rect();
        self.push_group(LayerKind::ColorFilter { color, blend_mode }, cull_rect);
    }

    /// Opens a backdrop-filter group. The cull rectangle is unchanged.
    pub fn push_backdrop_filter(&mut self, filter: ImageFilter) {
        let cull_rect = self.cull_rect();
        self.push_group(LayerKind::BackdropFilter(filter), cull_rect);
    }

    /// Opens a shader-mask group. The cull rectangle is unchanged.
    pub fn push_shader_mask(&mut self, shader: Shader, mask_rect: Rect, blend_mode: BlendMode) {
        let cull_rect = self.cull_rect();
        self.push_group(
            LayerKind::ShaderMask {
                shader,
                mask_rect,
                blend_mode,
            },
            cull_rect,
        );
    }

    /// Opens a physical-shape group. The shape clips its descendants, so the
    /// cull rectangle narrows to the shape's bounds.
    pub fn push_physical_shape(
        &mut self,
        shape: RoundedRect,
        elevation: f64,
        color: Color,
        device_pixel_ratio: f64,
    ) {
        let cull_rect = cull::clipped_cull(shape.rect(), self.cull_rect());
        self.push_group(
            LayerKind::PhysicalShape {
                shape,
                elevation,
                color,
                device_pixel_ratio,
            },
            cull_rect,
        );
    }

    /// Closes the most recently opened group and restores the parent's cull
    /// rectangle. An unmatched pop is a no-op.
    pub fn pop(&mut self) {
        if self.current == INVALID {
            return;
        }
        // The sentinel is unreachable here: an open group implies at least
        // one frame above it.
        let _ = self.cull_stack.pop();
        self.current = match self.store.parent(LayerId(self.current)) {
            Some(parent) => parent.0,
            None => INVALID,
        };
        self.open_groups -= 1;
        self.tracer.group_popped(&GroupPoppedEvent {
            depth: self.open_groups,
        });
    }

    // -- Leaf emission --

    /// Emits a performance overlay into the open group.
    ///
    /// Overlays have no meaningful spatial extent for culling purposes and
    /// are always attached once a group is open. With no open group the call
    /// is a no-op.
    pub fn add_performance_overlay(&mut self, options: OverlayOptions, bounds: Rect) {
        if self.current == INVALID {
            return;
        }
        self.attach_leaf(LayerKind::PerformanceOverlay { options, bounds });
    }

    /// Emits a picture at `offset` into the open group.
    ///
    /// The picture's intrinsic bounds, offset by the placement, are tested
    /// against the current cull rectangle; with no overlap the picture is
    /// pruned and never becomes a layer. With no open group the call is a
    /// no-op.
    pub fn add_picture(
        &mut self,
        offset: Vec2,
        picture: Picture,
        is_complex: bool,
        will_change: bool,
    ) {
        if self.current == INVALID {
            return;
        }
        let bounds = picture.cull_rect + offset;
        if !cull::intersects(bounds, self.cull_rect()) {
            self.tracer.leaf_culled(&LeafCulledEvent {
                bounds,
                cull_rect: self.cull_rect(),
            });
            return;
        }
        self.attach_leaf(LayerKind::Picture {
            offset,
            picture,
            is_complex,
            will_change,
        });
    }

    /// Emits an externally produced sub-scene at `offset` into the open
    /// group.
    ///
    /// Pruned like a picture when `offset + size` does not reach the visible
    /// region. With no open group the call is a no-op.
    #[cfg(feature = "embedded-scene")]
    pub fn add_embedded_scene(
        &mut self,
        offset: Vec2,
        size: Size,
        scene: SceneHandle,
        hit_testable: bool,
    ) {
        if self.current == INVALID {
            return;
        }
        let bounds = Rect::from_origin_size(offset.to_point(), size);
        if !cull::intersects(bounds, self.cull_rect()) {
            self.tracer.leaf_culled(&LeafCulledEvent {
                bounds,
                cull_rect: self.cull_rect(),
            });
            return;
        }
        self.attach_leaf(LayerKind::EmbeddedScene {
            offset,
            size,
            scene,
            hit_testable,
        });
    }

    // -- Diagnostics settings --

    /// Returns the rasterizer tracing threshold.
    #[must_use]
    pub fn rasterizer_tracing_threshold(&self) -> u32 {
        self.settings.rasterizer_tracing_threshold
    }

    /// Sets the rasterizer tracing threshold (frame intervals; zero
    /// disables).
    pub fn set_rasterizer_tracing_threshold(&mut self, frame_interval: u32) {
        self.settings.rasterizer_tracing_threshold = frame_interval;
    }

    /// Returns whether raster-cache images are checkerboarded.
    #[must_use]
    pub fn checkerboard_raster_cache_images(&self) -> bool {
        self.settings.checkerboard_raster_cache_images
    }

    /// Sets whether raster-cache images are checkerboarded.
    pub fn set_checkerboard_raster_cache_images(&mut self, checkerboard: bool) {
        self.settings.checkerboard_raster_cache_images = checkerboard;
    }

    /// Returns whether offscreen layers are checkerboarded.
    #[must_use]
    pub fn checkerboard_offscreen_layers(&self) -> bool {
        self.settings.checkerboard_offscreen_layers
    }

    /// Sets whether offscreen layers are checkerboarded.
    pub fn set_checkerboard_offscreen_layers(&mut self, checkerboard: bool) {
        self.settings.checkerboard_offscreen_layers = checkerboard;
    }

    // -- Handoff --

    /// Transfers ownership of the finished tree to the caller.
    ///
    /// Returns `None` before any group was pushed, and on every call after
    /// the first successful one. The scene carries a copy of the diagnostics
    /// settings for the downstream rasterizer.
    pub fn take_scene(&mut self) -> Option<Scene> {
        if self.root == INVALID {
            return None;
        }
        let root = LayerId(self.root);
        self.root = INVALID;
        self.current = INVALID;
        self.open_groups = 0;
        let store = core::mem::take(&mut self.store);
        self.tracer.scene_taken(&SceneTakenEvent {
            layers: store.len(),
        });
        Some(Scene {
            store,
            root,
            settings: self.settings,
        })
    }

    // -- Internals --

    /// Core primitive behind every push operation.
    ///
    /// Always pushes `cull_rect`, even when the tree cannot accept the group,
    /// preserving the 1:1 correspondence between stack depth and push count.
    fn push_group(&mut self, kind: LayerKind, cull_rect: Rect) {
        self.cull_stack.push(cull_rect);

        if self.root == INVALID {
            let id = self.store.push(kind);
            self.root = id.0;
            self.current = id.0;
            self.open_groups = 1;
            self.tracer.group_pushed(&GroupPushedEvent {
                layer: Some(id),
                depth: self.open_groups,
                cull_rect,
            });
            return;
        }

        if self.current == INVALID {
            // The root was already popped; nothing can reattach. The cull
            // rect stays pushed so push/pop accounting remains balanced.
            self.tracer.group_pushed(&GroupPushedEvent {
                layer: None,
                depth: self.open_groups,
                cull_rect,
            });
            return;
        }

        let id = self.store.push(kind);
        self.store.add_child(LayerId(self.current), id);
        self.current = id.0;
        self.open_groups += 1;
        self.tracer.group_pushed(&GroupPushedEvent {
            layer: Some(id),
            depth: self.open_groups,
            cull_rect,
        });
    }

    fn attach_leaf(&mut self, kind: LayerKind) {
        let id = self.store.push(kind);
        self.store.add_child(LayerId(self.current), id);
        self.tracer.leaf_emitted(&LeafEmittedEvent { layer: id });
    }
}

// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stack-disciplined scene-graph construction with visibility culling.
//!
//! `strata_core` builds retained layer trees from a linear recording of
//! *push group* / *emit leaf* / *pop* calls, the shape a UI framework's
//! paint traversal naturally produces. It is `no_std` compatible (with
//! `alloc`) and uses array-based struct-of-arrays storage with index handles
//! for cache-friendly traversal.
//!
//! # Architecture
//!
//! One frame's worth of painting flows through a single builder:
//!
//! ```text
//!   paint traversal
//!       │  push_* / add_* / pop
//!       ▼
//!   SceneBuilder ──── cull stack prunes invisible leaves
//!       │  take_scene()
//!       ▼
//!   Scene ──► consumer (rasterizer / compositor)
//! ```
//!
//! **[`builder`]** — The [`SceneBuilder`](builder::SceneBuilder) stack
//! engine: group push/pop discipline, cull-rect tracking, leaf pruning,
//! diagnostics settings, and the single-shot scene handoff.
//!
//! **[`layer`]** — Struct-of-arrays layer tree with index handles. Nodes are
//! append-only; sibling order is paint order.
//!
//! **[`cull`]** — Cull-rectangle math: conservative inverse-transform
//! mapping, clip intersection, and the unbounded sentinel.
//!
//! **[`paint`]** — Opaque value primitives shared with the consumer: colors,
//! blend modes, resource handles, recorded pictures, overlay options.
//!
//! **[`scene`]** — The immutable [`Scene`](scene::Scene) handed off to the
//! consumer.
//!
//! **[`settings`]** — Pass-through diagnostics settings captured at handoff.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types for
//! build instrumentation, with zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Example
//!
//! ```
//! use kurbo::{Affine, Rect, Vec2};
//! use strata_core::builder::SceneBuilder;
//! use strata_core::paint::{Picture, ResourceKey};
//!
//! let mut builder = SceneBuilder::new();
//! builder.push_transform(Affine::scale(2.0));
//! builder.push_clip_rect(Rect::new(0.0, 0.0, 400.0, 300.0));
//! builder.add_picture(
//!     Vec2::new(10.0, 10.0),
//!     Picture::new(ResourceKey(1), Rect::new(0.0, 0.0, 100.0, 100.0)),
//!     false,
//!     false,
//! );
//! builder.pop();
//! builder.pop();
//!
//! let scene = builder.take_scene().expect("a root group was pushed");
//! assert_eq!(scene.len(), 3);
//! ```
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one
//!   branch per call site).
//! - `embedded-scene` (disabled by default): Enables embedding externally
//!   produced sub-scenes as leaves.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod builder;
pub mod cull;
pub mod layer;
pub mod paint;
pub mod scene;
pub mod settings;
pub mod trace;

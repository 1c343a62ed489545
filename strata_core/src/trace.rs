// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for scene building.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! builder calls as groups are pushed and popped, leaves are emitted or
//! culled, and the finished scene is taken. All method bodies default to
//! no-ops, so implementing only the events you care about is fine.
//!
//! [`Tracer`] owns an optional boxed sink. When the `trace` feature is
//! **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace` — enables the `Tracer` method bodies (one branch per call).

use alloc::boxed::Box;

use kurbo::Rect;

use crate::layer::LayerId;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when a group is pushed.
#[derive(Clone, Copy, Debug)]
pub struct GroupPushedEvent {
    /// The new group, or `None` for an orphaned push (a push issued after the
    /// root group was popped, which keeps the cull stack balanced but
    /// attaches nothing).
    pub layer: Option<LayerId>,
    /// Number of open groups after the push.
    pub depth: usize,
    /// Cull rectangle computed for the group's children.
    pub cull_rect: Rect,
}

/// Emitted when a group is popped.
#[derive(Clone, Copy, Debug)]
pub struct GroupPoppedEvent {
    /// Number of open groups remaining after the pop.
    pub depth: usize,
}

/// Emitted when a leaf is attached to the open group.
#[derive(Clone, Copy, Debug)]
pub struct LeafEmittedEvent {
    /// The new leaf.
    pub layer: LayerId,
}

/// Emitted when a leaf is pruned because its bounds do not reach the visible
/// region.
#[derive(Clone, Copy, Debug)]
pub struct LeafCulledEvent {
    /// The leaf's bounds after placement offset.
    pub bounds: Rect,
    /// The cull rectangle the bounds were tested against.
    pub cull_rect: Rect,
}

/// Emitted when the finished scene is handed off.
#[derive(Clone, Copy, Debug)]
pub struct SceneTakenEvent {
    /// Number of layers in the scene.
    pub layers: usize,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from a [`SceneBuilder`](crate::builder::SceneBuilder).
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a group is pushed.
    fn on_group_pushed(&mut self, e: &GroupPushedEvent) {
        _ = e;
    }

    /// Called when a group is popped.
    fn on_group_popped(&mut self, e: &GroupPoppedEvent) {
        _ = e;
    }

    /// Called when a leaf is attached.
    fn on_leaf_emitted(&mut self, e: &LeafEmittedEvent) {
        _ = e;
    }

    /// Called when a leaf is pruned.
    fn on_leaf_culled(&mut self, e: &LeafCulledEvent) {
        _ = e;
    }

    /// Called when the finished scene is handed off.
    fn on_scene_taken(&mut self, e: &SceneTakenEvent) {
        _ = e;
    }
}

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional boxed [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing and
/// the sink passed to [`Tracer::new`] is dropped. When **on**, each method
/// checks the inner `Option` (one branch) before dispatching.
pub struct Tracer {
    #[cfg(feature = "trace")]
    sink: Option<Box<dyn TraceSink>>,
}

impl core::fmt::Debug for Tracer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl Tracer {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: Box<dyn TraceSink>) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {}
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub const fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {}
        }
    }

    /// Emits a [`GroupPushedEvent`].
    #[inline]
    pub fn group_pushed(&mut self, e: &GroupPushedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_group_pushed(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`GroupPoppedEvent`].
    #[inline]
    pub fn group_popped(&mut self, e: &GroupPoppedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_group_popped(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`LeafEmittedEvent`].
    #[inline]
    pub fn leaf_emitted(&mut self, e: &LeafEmittedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_leaf_emitted(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`LeafCulledEvent`].
    #[inline]
    pub fn leaf_culled(&mut self, e: &LeafCulledEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_leaf_culled(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`SceneTakenEvent`].
    #[inline]
    pub fn scene_taken(&mut self, e: &SceneTakenEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_scene_taken(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_sink_accepts_all_events() {
        let mut sink = NoopSink;
        sink.on_group_pushed(&GroupPushedEvent {
            layer: None,
            depth: 0,
            cull_rect: Rect::ZERO,
        });
        sink.on_group_popped(&GroupPoppedEvent { depth: 0 });
        sink.on_scene_taken(&SceneTakenEvent { layers: 0 });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.group_popped(&GroupPoppedEvent { depth: 0 });
        tracer.scene_taken(&SceneTakenEvent { layers: 3 });
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::boxed::Box;
        use alloc::rc::Rc;
        use core::cell::Cell;

        struct CountingSink {
            pops: Rc<Cell<usize>>,
        }
        impl TraceSink for CountingSink {
            fn on_group_popped(&mut self, _e: &GroupPoppedEvent) {
                self.pops.set(self.pops.get() + 1);
            }
        }

        let pops = Rc::new(Cell::new(0));
        let mut tracer = Tracer::new(Box::new(CountingSink { pops: Rc::clone(&pops) }));
        tracer.group_popped(&GroupPoppedEvent { depth: 1 });
        tracer.group_popped(&GroupPoppedEvent { depth: 0 });
        assert_eq!(pops.get(), 2);
    }
}

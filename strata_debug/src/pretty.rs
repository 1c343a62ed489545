// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable diagnostics output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per build
//! event to a [`Write`](std::io::Write) destination (default: stderr).
//! [`print_tree`] dumps a finished [`Scene`] as an indented
//! one-line-per-layer listing.

use std::io::{self, Write};

use kurbo::Rect;

use strata_core::layer::LayerKind;
use strata_core::scene::Scene;
use strata_core::trace::{
    GroupPoppedEvent, GroupPushedEvent, LeafCulledEvent, LeafEmittedEvent, SceneTakenEvent,
    TraceSink,
};

/// Writes human-readable build-event lines to a [`Write`](std::io::Write)
/// destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }
}

fn fmt_rect(r: Rect) -> String {
    format!("[{} {} {} {}]", r.x0, r.y0, r.x1, r.y1)
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_group_pushed(&mut self, e: &GroupPushedEvent) {
        let _ = match e.layer {
            Some(layer) => writeln!(
                self.writer,
                "[push] {layer:?} depth={} cull={}",
                e.depth,
                fmt_rect(e.cull_rect),
            ),
            None => writeln!(
                self.writer,
                "[push] ORPHANED depth={} cull={}",
                e.depth,
                fmt_rect(e.cull_rect),
            ),
        };
    }

    fn on_group_popped(&mut self, e: &GroupPoppedEvent) {
        let _ = writeln!(self.writer, "[pop] depth={}", e.depth);
    }

    fn on_leaf_emitted(&mut self, e: &LeafEmittedEvent) {
        let _ = writeln!(self.writer, "[leaf] {:?}", e.layer);
    }

    fn on_leaf_culled(&mut self, e: &LeafCulledEvent) {
        let _ = writeln!(
            self.writer,
            "[cull] bounds={} outside cull={}",
            fmt_rect(e.bounds),
            fmt_rect(e.cull_rect),
        );
    }

    fn on_scene_taken(&mut self, e: &SceneTakenEvent) {
        let _ = writeln!(self.writer, "[scene] {} layers", e.layers);
    }
}

/// Returns a short label and a one-line property summary for a layer kind.
fn describe(kind: &LayerKind) -> String {
    match kind {
        LayerKind::Transform(transform) => {
            let c = transform.as_coeffs();
            format!(
                "Transform [{} {} {} {} {} {}]",
                c[0], c[1], c[2], c[3], c[4], c[5]
            )
        }
        LayerKind::ClipRect(rect) => format!("ClipRect {}", fmt_rect(*rect)),
        LayerKind::ClipRoundedRect(rr) => {
            format!("ClipRoundedRect {}", fmt_rect(rr.rect()))
        }
        LayerKind::ClipPath(path) => format!("ClipPath ({} elements)", path.elements().len()),
        LayerKind::Opacity(alpha) => format!("Opacity {alpha}"),
        LayerKind::ColorFilter { color, blend_mode } => {
            format!("ColorFilter {color:?} {blend_mode:?}")
        }
        LayerKind::BackdropFilter(filter) => format!("BackdropFilter key={}", filter.0.0),
        LayerKind::ShaderMask {
            shader,
            mask_rect,
            blend_mode,
        } => format!(
            "ShaderMask key={} mask={} {blend_mode:?}",
            shader.0.0,
            fmt_rect(*mask_rect),
        ),
        LayerKind::PhysicalShape {
            shape, elevation, ..
        } => format!(
            "PhysicalShape {} elevation={elevation}",
            fmt_rect(shape.rect()),
        ),
        LayerKind::PerformanceOverlay { options, bounds } => {
            format!("PerformanceOverlay {options:?} {}", fmt_rect(*bounds))
        }
        LayerKind::Picture {
            offset,
            picture,
            is_complex,
            will_change,
        } => format!(
            "Picture key={} offset=({} {}) bounds={} complex={is_complex} will_change={will_change}",
            picture.resource.0,
            offset.x,
            offset.y,
            fmt_rect(picture.cull_rect),
        ),
        #[cfg(feature = "embedded-scene")]
        LayerKind::EmbeddedScene {
            offset,
            size,
            scene,
            hit_testable,
        } => format!(
            "EmbeddedScene key={} offset=({} {}) size={}x{} hit_testable={hit_testable}",
            scene.0.0,
            offset.x,
            offset.y,
            size.width,
            size.height,
        ),
    }
}

/// Writes an indented one-line-per-layer dump of a finished scene.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn print_tree(scene: &Scene, writer: &mut dyn Write) -> io::Result<()> {
    for (depth, id) in scene.walk() {
        writeln!(
            writer,
            "{:indent$}{}",
            "",
            describe(scene.kind(id)),
            indent = depth * 2,
        )?;
    }
    Ok(())
}

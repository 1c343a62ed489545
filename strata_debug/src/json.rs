// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON export of finished scene trees.
//!
//! [`export`] writes a single JSON object describing a [`Scene`]: the
//! diagnostics settings plus the layer tree as nested node objects. The
//! output is stable across runs for the same build sequence, which makes it
//! suitable for golden tests and post-mortem diffing.

use std::io::{self, Write};

use kurbo::Rect;
use serde_json::{Value, json};

use strata_core::layer::{LayerId, LayerKind};
use strata_core::scene::Scene;

fn rect_json(r: Rect) -> Value {
    json!([r.x0, r.y0, r.x1, r.y1])
}

fn node_json(scene: &Scene, id: LayerId) -> Value {
    let mut node = match scene.kind(id) {
        LayerKind::Transform(transform) => json!({
            "kind": "transform",
            "matrix": transform.as_coeffs(),
        }),
        LayerKind::ClipRect(rect) => json!({
            "kind": "clip_rect",
            "rect": rect_json(*rect),
        }),
        LayerKind::ClipRoundedRect(rr) => json!({
            "kind": "clip_rounded_rect",
            "rect": rect_json(rr.rect()),
            "radii": [
                rr.radii().top_left,
                rr.radii().top_right,
                rr.radii().bottom_right,
                rr.radii().bottom_left,
            ],
        }),
        LayerKind::ClipPath(path) => json!({
            "kind": "clip_path",
            "elements": path.elements().len(),
            "bounds": rect_json(kurbo::Shape::bounding_box(path)),
        }),
        LayerKind::Opacity(alpha) => json!({
            "kind": "opacity",
            "alpha": alpha,
        }),
        LayerKind::ColorFilter { color, blend_mode } => json!({
            "kind": "color_filter",
            "color": format!("{color:?}"),
            "blend_mode": format!("{blend_mode:?}"),
        }),
        LayerKind::BackdropFilter(filter) => json!({
            "kind": "backdrop_filter",
            "filter": filter.0.0,
        }),
        LayerKind::ShaderMask {
            shader,
            mask_rect,
            blend_mode,
        } => json!({
            "kind": "shader_mask",
            "shader": shader.0.0,
            "mask_rect": rect_json(*mask_rect),
            "blend_mode": format!("{blend_mode:?}"),
        }),
        LayerKind::PhysicalShape {
            shape,
            elevation,
            color,
            device_pixel_ratio,
        } => json!({
            "kind": "physical_shape",
            "rect": rect_json(shape.rect()),
            "elevation": elevation,
            "color": format!("{color:?}"),
            "device_pixel_ratio": device_pixel_ratio,
        }),
        LayerKind::PerformanceOverlay { options, bounds } => json!({
            "kind": "performance_overlay",
            "options": options.bits(),
            "bounds": rect_json(*bounds),
        }),
        LayerKind::Picture {
            offset,
            picture,
            is_complex,
            will_change,
        } => json!({
            "kind": "picture",
            "resource": picture.resource.0,
            "offset": [offset.x, offset.y],
            "bounds": rect_json(picture.cull_rect),
            "is_complex": is_complex,
            "will_change": will_change,
        }),
        #[cfg(feature = "embedded-scene")]
        LayerKind::EmbeddedScene {
            offset,
            size,
            scene: handle,
            hit_testable,
        } => json!({
            "kind": "embedded_scene",
            "scene": handle.0.0,
            "offset": [offset.x, offset.y],
            "size": [size.width, size.height],
            "hit_testable": hit_testable,
        }),
    };

    let children: Vec<Value> = scene
        .children(id)
        .map(|child| node_json(scene, child))
        .collect();
    if !children.is_empty() {
        node["children"] = Value::Array(children);
    }
    node
}

/// Writes a finished scene as a single JSON object.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn export(scene: &Scene, writer: &mut dyn Write) -> io::Result<()> {
    let settings = scene.settings();
    let doc = json!({
        "layers": scene.len(),
        "settings": {
            "rasterizer_tracing_threshold": settings.rasterizer_tracing_threshold,
            "checkerboard_raster_cache_images": settings.checkerboard_raster_cache_images,
            "checkerboard_offscreen_layers": settings.checkerboard_offscreen_layers,
        },
        "root": node_json(scene, scene.root()),
    });
    serde_json::to_writer_pretty(&mut *writer, &doc)?;
    writeln!(writer)
}

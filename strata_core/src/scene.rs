// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The finished scene handed off to a consumer.

use crate::layer::{Children, LayerId, LayerKind, LayerStore, Walk};
use crate::settings::DiagnosticSettings;

/// An immutable layer tree produced by a
/// [`SceneBuilder`](crate::builder::SceneBuilder).
///
/// A scene owns its layers outright. Ownership transfers exactly once, via
/// [`SceneBuilder::take_scene`](crate::builder::SceneBuilder::take_scene);
/// the builder never touches the tree again. Consumers (a rasterizer or
/// compositor) traverse it read-only through the accessors here.
#[derive(Debug)]
pub struct Scene {
    pub(crate) store: LayerStore,
    pub(crate) root: LayerId,
    pub(crate) settings: DiagnosticSettings,
}

impl Scene {
    /// Returns the root group of the scene.
    #[must_use]
    pub fn root(&self) -> LayerId {
        self.root
    }

    /// Returns the number of layers in the scene.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns whether the scene contains no layers.
    ///
    /// Always false for a scene produced by a builder: the handoff only
    /// succeeds once a root group exists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns the kind (and properties) of a layer.
    #[must_use]
    pub fn kind(&self, id: LayerId) -> &LayerKind {
        self.store.kind(id)
    }

    /// Returns the parent of a layer, or `None` for the root.
    #[must_use]
    pub fn parent(&self, id: LayerId) -> Option<LayerId> {
        self.store.parent(id)
    }

    /// Returns an iterator over the direct children of a layer, in paint
    /// order.
    #[must_use]
    pub fn children(&self, id: LayerId) -> Children<'_> {
        self.store.children(id)
    }

    /// Returns a depth-first iterator over the whole tree, in paint order.
    #[must_use]
    pub fn walk(&self) -> Walk<'_> {
        Walk::new(&self.store, self.root)
    }

    /// Returns the diagnostics settings captured at handoff.
    #[must_use]
    pub fn settings(&self) -> DiagnosticSettings {
        self.settings
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::{Affine, Rect};

    use crate::builder::SceneBuilder;
    use crate::layer::LayerKind;

    #[test]
    fn scene_exposes_tree_and_settings() {
        let mut builder = SceneBuilder::new();
        builder.set_rasterizer_tracing_threshold(3);
        builder.push_transform(Affine::IDENTITY);
        builder.push_clip_rect(Rect::new(0.0, 0.0, 50.0, 50.0));
        builder.pop();
        builder.pop();

        let scene = builder.take_scene().expect("root was pushed");
        assert_eq!(scene.len(), 2);
        assert!(!scene.is_empty());
        assert_eq!(scene.settings().rasterizer_tracing_threshold, 3);

        let root = scene.root();
        assert!(matches!(scene.kind(root), LayerKind::Transform(_)));
        assert_eq!(scene.parent(root), None);

        let kids: Vec<_> = scene.children(root).collect();
        assert_eq!(kids.len(), 1);
        assert_eq!(scene.parent(kids[0]), Some(root));

        let order: Vec<_> = scene.walk().map(|(depth, _)| depth).collect();
        assert_eq!(order, [0, 1]);
    }
}

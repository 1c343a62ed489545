// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Struct-of-arrays layer storage.

use alloc::vec::Vec;

use super::id::{INVALID, LayerId};
use super::kind::LayerKind;
use super::traverse::Children;

/// Append-only struct-of-arrays storage for all layers of one scene.
///
/// Layers are addressed by [`LayerId`] handles. Each layer occupies a slot in
/// parallel arrays: topology links (`parent`, `first_child`, `last_child`,
/// `next_sibling`) and the layer's [`LayerKind`]. Slots are never freed —
/// a store is filled once by a builder and then frozen inside a
/// [`Scene`](crate::scene::Scene) — so handles stay valid for the store's
/// whole lifetime and no generation counters are needed.
///
/// Child lists are ordered: children are always appended, and sibling order
/// is paint order.
#[derive(Debug, Default)]
pub struct LayerStore {
    // -- Topology --
    pub(crate) parent: Vec<u32>,
    pub(crate) first_child: Vec<u32>,
    pub(crate) last_child: Vec<u32>,
    pub(crate) next_sibling: Vec<u32>,

    // -- Kind and properties, fixed at creation --
    pub(crate) kind: Vec<LayerKind>,
}

impl LayerStore {
    /// Creates an empty layer store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of layers in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.kind.len()
    }

    /// Returns whether the store contains no layers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kind.is_empty()
    }

    /// Creates a new detached layer of the given kind and returns its handle.
    pub fn push(&mut self, kind: LayerKind) -> LayerId {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "LayerId uses 32-bit indices by design."
        )]
        let idx = self.kind.len() as u32;
        self.parent.push(INVALID);
        self.first_child.push(INVALID);
        self.last_child.push(INVALID);
        self.next_sibling.push(INVALID);
        self.kind.push(kind);
        LayerId(idx)
    }

    /// Adds `child` as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if either handle is out of range, if `child` already has a
    /// parent, or if `parent` is a leaf kind.
    pub fn add_child(&mut self, parent: LayerId, child: LayerId) {
        self.validate(parent);
        self.validate(child);
        let p = parent.0;
        let c = child.0;
        assert!(
            self.parent[c as usize] == INVALID,
            "child already has a parent"
        );
        assert!(
            self.kind[p as usize].is_group(),
            "leaf layers cannot own children"
        );

        self.parent[c as usize] = p;
        if self.first_child[p as usize] == INVALID {
            self.first_child[p as usize] = c;
        } else {
            self.next_sibling[self.last_child[p as usize] as usize] = c;
        }
        self.last_child[p as usize] = c;
    }

    /// Returns the parent of a layer, if any.
    ///
    /// # Panics
    ///
    /// Panics if the handle is out of range.
    #[must_use]
    pub fn parent(&self, id: LayerId) -> Option<LayerId> {
        self.validate(id);
        let p = self.parent[id.0 as usize];
        if p == INVALID { None } else { Some(LayerId(p)) }
    }

    /// Returns the kind (and properties) of a layer.
    ///
    /// # Panics
    ///
    /// Panics if the handle is out of range.
    #[must_use]
    pub fn kind(&self, id: LayerId) -> &LayerKind {
        self.validate(id);
        &self.kind[id.0 as usize]
    }

    /// Returns an iterator over the direct children of a layer, in paint
    /// order.
    ///
    /// # Panics
    ///
    /// Panics if the handle is out of range.
    #[must_use]
    pub fn children(&self, id: LayerId) -> Children<'_> {
        self.validate(id);
        Children::new(self, self.first_child[id.0 as usize])
    }

    /// Panics if the handle does not refer to a slot in this store.
    fn validate(&self, id: LayerId) {
        assert!(
            (id.0 as usize) < self.kind.len(),
            "LayerId {} out of range (len {})",
            id.0,
            self.kind.len()
        );
    }
}

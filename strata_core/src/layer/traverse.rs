// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree traversal utilities.

use alloc::vec::Vec;

use super::id::{INVALID, LayerId};
use super::store::LayerStore;

/// An iterator over the direct children of a layer, in paint order.
///
/// Created by [`LayerStore::children`].
#[derive(Debug)]
pub struct Children<'a> {
    store: &'a LayerStore,
    current: u32,
}

impl<'a> Children<'a> {
    pub(crate) fn new(store: &'a LayerStore, first: u32) -> Self {
        Self {
            store,
            current: first,
        }
    }
}

impl Iterator for Children<'_> {
    type Item = LayerId;

    fn next(&mut self) -> Option<LayerId> {
        if self.current == INVALID {
            return None;
        }
        let idx = self.current;
        self.current = self.store.next_sibling[idx as usize];
        Some(LayerId(idx))
    }
}

/// A depth-first, pre-order iterator over a subtree, yielding
/// `(depth, LayerId)` pairs in paint order.
///
/// Depth 0 is the subtree root. Created by
/// [`Scene::walk`](crate::scene::Scene::walk).
#[derive(Debug)]
pub struct Walk<'a> {
    store: &'a LayerStore,
    stack: Vec<(u32, usize)>,
}

impl<'a> Walk<'a> {
    pub(crate) fn new(store: &'a LayerStore, root: LayerId) -> Self {
        Self {
            store,
            stack: alloc::vec![(root.0, 0)],
        }
    }
}

impl Iterator for Walk<'_> {
    type Item = (usize, LayerId);

    fn next(&mut self) -> Option<(usize, LayerId)> {
        let (idx, depth) = self.stack.pop()?;
        // Sibling first, then child: LIFO order visits the child subtree
        // before the next sibling.
        if depth > 0 {
            let sibling = self.store.next_sibling[idx as usize];
            if sibling != INVALID {
                self.stack.push((sibling, depth));
            }
        }
        let child = self.store.first_child[idx as usize];
        if child != INVALID {
            self.stack.push((child, depth + 1));
        }
        Some((depth, LayerId(idx)))
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::{Affine, Rect};

    use super::*;
    use crate::layer::LayerKind;
    use crate::paint::OverlayOptions;

    fn group() -> LayerKind {
        LayerKind::Transform(Affine::IDENTITY)
    }

    fn leaf() -> LayerKind {
        LayerKind::PerformanceOverlay {
            options: OverlayOptions::empty(),
            bounds: Rect::ZERO,
        }
    }

    #[test]
    fn walk_is_preorder_paint_order() {
        // root ── a ── a1
        //      └─ b
        let mut store = LayerStore::new();
        let root = store.push(group());
        let a = store.push(group());
        let a1 = store.push(leaf());
        let b = store.push(leaf());
        store.add_child(root, a);
        store.add_child(a, a1);
        store.add_child(root, b);

        let visited: Vec<_> = Walk::new(&store, root).collect();
        assert_eq!(visited, [(0, root), (1, a), (2, a1), (1, b)]);
    }

    #[test]
    fn walk_single_node() {
        let mut store = LayerStore::new();
        let root = store.push(group());
        let visited: Vec<_> = Walk::new(&store, root).collect();
        assert_eq!(visited, [(0, root)]);
    }

    #[test]
    fn walk_does_not_escape_subtree_root_siblings() {
        let mut store = LayerStore::new();
        let top = store.push(group());
        let a = store.push(group());
        let b = store.push(group());
        store.add_child(top, a);
        store.add_child(top, b);

        // Walking from `a` must not wander into its sibling `b`.
        let visited: Vec<_> = Walk::new(&store, a).collect();
        assert_eq!(visited, [(0, a)]);
    }
}

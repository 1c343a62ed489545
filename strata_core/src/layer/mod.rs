// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layer tree data model.
//!
//! A *layer* is a node in a retained scene tree. Each layer has:
//!
//! - An identity ([`LayerId`]) — a plain index handle into the append-only
//!   [`LayerStore`]; handles never go stale because layers are never
//!   destroyed individually.
//! - Topology — parent, first-child, and sibling links forming an ordered
//!   tree. Sibling order is paint order, and children are only ever appended.
//! - A [`LayerKind`] carrying the kind-specific properties, assigned once at
//!   creation and never mutated afterwards.
//!
//! Kinds split into two capability classes: group kinds (transform, clips,
//! opacity, filters, shader mask, physical shape) can own children; leaf
//! kinds (performance overlay, picture, embedded scene) are terminal. See
//! [`LayerKind::is_group`].
//!
//! Layers are stored in struct-of-arrays layout with index-based handles for
//! cache-friendly traversal.

mod id;
mod kind;
mod store;
mod traverse;

pub use id::{INVALID, LayerId};
pub use kind::LayerKind;
pub use store::LayerStore;
pub use traverse::{Children, Walk};

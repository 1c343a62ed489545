// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printing and JSON export for strata diagnostics.
//!
//! This crate provides development and post-mortem tooling around
//! [`strata_core`]:
//!
//! - [`pretty::PrettyPrintSink`] — a
//!   [`TraceSink`](strata_core::trace::TraceSink) with human-readable
//!   one-line-per-event output.
//! - [`pretty::print_tree`] — an indented dump of a finished
//!   [`Scene`](strata_core::scene::Scene).
//! - [`json::export`] — JSON export of a finished scene tree.

pub mod json;
pub mod pretty;

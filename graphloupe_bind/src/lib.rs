// Copyright 2025 the Graphloupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Graphloupe Bind: tree-view entries bound to diagram nodes.
//!
//! This crate supplies the second half of the interactive viewer: given a
//! diagram whose nodes are labeled with hierarchical path titles and a tree
//! view whose entries carry relative paths, it builds a [`NodeIndex`] by
//! suffix matching and turns a tree-entry click into *focus and highlight*:
//! zoom the view onto the node (via `graphloupe_control`), restyle its shape
//! and label, and revert the emphasis after a configured delay.
//!
//! The host supplies two seams:
//! - [`DiagramScene`]: node enumeration with titles, per-node bounding
//!   boxes, and emphasis application.
//! - [`RevertScheduler`]: one-shot delayed callbacks for the revert, with
//!   token-checked delivery so a superseded timer can never race a newer
//!   highlight (see [`TreeGraphBinder::on_revert_elapsed`]).
//!
//! ## Usage
//!
//! 1) Build the [`NodeIndex`] once, after the diagram and the tree view are
//!    both present.
//! 2) Construct a [`TreeGraphBinder`] with the index and a
//!    [`HighlightStyle`].
//! 3) Route every tree-entry click into [`TreeGraphBinder::activate`] and
//!    every fired revert timer into [`TreeGraphBinder::on_revert_elapsed`].
//! 4) Surface (or ignore) the non-focused [`Activation`] outcomes; an
//!    unbound entry is a plain directory, not a diagram node, and clicking
//!    it is allowed to do nothing.
//!
//! All state mutation is synchronous inside whichever handler the host event
//! loop invokes; the scheduled revert is the only deferred effect.

mod binder;
mod highlight;
mod index;
mod scene;

pub use binder::{Activation, TreeGraphBinder};
pub use highlight::{HighlightStyle, RevertScheduler};
pub use index::NodeIndex;
pub use scene::DiagramScene;

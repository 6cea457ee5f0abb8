// Copyright 2025 the Graphloupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::Debug;
use core::hash::Hash;

use graphloupe_control::{RenderSurface, ViewController};
use hashbrown::HashMap;
use tracing::debug;

use crate::highlight::{HighlightStyle, RevertScheduler};
use crate::index::NodeIndex;
use crate::scene::DiagramScene;

/// Outcome of activating a tree entry.
///
/// The two non-focused outcomes are defensive, never faults: the host decides
/// whether to stay silent or surface a "not a focusable node" notice, and
/// other interactions are unaffected either way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Activation<Id> {
    /// The entry resolved and the node was focused and highlighted.
    Focused(Id),
    /// The entry was never bound to a node (no title suffix matched).
    UnboundEntry,
    /// The entry was bound, but the node identifier no longer resolves in
    /// the scene.
    MissingNode(Id),
}

/// Binds tree-view entries to diagram nodes: click-to-focus plus a transient
/// highlight with a scheduled, cancellable revert.
///
/// Owns the read-only [`NodeIndex`] and the per-node pending-revert table.
/// One revert is pending per node at most: re-activating a node cancels the
/// prior revert before scheduling a new one, and a firing timer is honored
/// only while its token is still the pending one, so reverts cannot race.
#[derive(Clone, Debug)]
pub struct TreeGraphBinder<Id, Token> {
    index: NodeIndex<Id>,
    style: HighlightStyle,
    pending: HashMap<Id, Token>,
}

impl<Id, Token> TreeGraphBinder<Id, Token>
where
    Id: Clone + Eq + Hash + Debug,
    Token: PartialEq,
{
    /// Creates a binder over a built index with the given emphasis style.
    #[must_use]
    pub fn new(index: NodeIndex<Id>, style: HighlightStyle) -> Self {
        Self {
            index,
            style,
            pending: HashMap::new(),
        }
    }

    /// Returns the entry lookup.
    #[must_use]
    pub fn index(&self) -> &NodeIndex<Id> {
        &self.index
    }

    /// Returns the emphasis style.
    #[must_use]
    pub fn style(&self) -> &HighlightStyle {
        &self.style
    }

    /// Returns `true` while a revert is pending for `id`.
    #[must_use]
    pub fn has_pending_revert(&self, id: &Id) -> bool {
        self.pending.contains_key(id)
    }

    /// Handles a click on a tree entry: look the node up, focus it, apply
    /// the emphasis, and schedule its revert.
    ///
    /// Returns [`Activation::UnboundEntry`] or [`Activation::MissingNode`]
    /// without touching the view when the entry cannot be resolved.
    pub fn activate<D, S, T>(
        &mut self,
        entry: &str,
        scene: &mut D,
        view: &mut ViewController,
        surface: &mut S,
        timers: &mut T,
    ) -> Activation<Id>
    where
        D: DiagramScene<Id = Id>,
        S: RenderSurface,
        T: RevertScheduler<Id, Token = Token>,
    {
        let Some(id) = self.index.get(entry).cloned() else {
            debug!(entry, "tree entry is not bound to a diagram node");
            return Activation::UnboundEntry;
        };
        let Some(bounds) = scene.node_bounds(&id) else {
            debug!(entry, id = ?id, "bound diagram node no longer resolves");
            return Activation::MissingNode(id);
        };

        view.focus_on(bounds, surface);

        if let Some(prior) = self.pending.remove(&id) {
            timers.cancel(&id, prior);
        }
        scene.apply_emphasis(&id, &self.style);
        let token = timers.schedule(&id, self.style.revert_delay);
        self.pending.insert(id.clone(), token);
        debug!(entry, id = ?id, "focused and highlighted diagram node");
        Activation::Focused(id)
    }

    /// Handles a fired revert timer for `id`.
    ///
    /// Clears the emphasis and returns `true` only if `token` is still the
    /// pending revert for the node; a stale token (superseded by a newer
    /// highlight, or already honored) is a no-op returning `false`.
    pub fn on_revert_elapsed<D>(&mut self, id: &Id, token: Token, scene: &mut D) -> bool
    where
        D: DiagramScene<Id = Id>,
    {
        match self.pending.get(id) {
            Some(pending) if *pending == token => {
                self.pending.remove(id);
                scene.clear_emphasis(id);
                true
            }
            _ => false,
        }
    }
}

// Copyright 2025 the Graphloupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::hash::Hash;

use kurbo::Rect;

use crate::highlight::HighlightStyle;

/// The diagram side of the binding: node enumeration, geometry, and emphasis.
///
/// A scene is the set of graphical group elements tagged as diagram nodes.
/// Each node has an application-supplied identifier, a title string (the
/// hierarchical path the generator labeled it with), a bounding box in the
/// diagram's own drawing coordinates, and child shapes the host restyles for
/// emphasis.
///
/// Enumeration order is meaningful: [`NodeIndex::build`](crate::NodeIndex::build)
/// binds each tree entry to the *first* node whose title matches, in exactly
/// the order `visit_nodes` yields them.
pub trait DiagramScene {
    /// Application-supplied node identifier.
    type Id: Clone + Eq + Hash;

    /// Visits every node with its identifier and title string, in the
    /// scene's enumeration order.
    fn visit_nodes(&self, visit: &mut dyn FnMut(Self::Id, &str));

    /// Returns the node's bounding box in diagram drawing coordinates, or
    /// `None` if the identifier no longer resolves.
    ///
    /// Boxes may arrive with a negative vertical origin; the focus algorithm
    /// corrects that, not the scene.
    fn node_bounds(&self, id: &Self::Id) -> Option<Rect>;

    /// Applies the emphasis style to the node's shape and label.
    fn apply_emphasis(&mut self, id: &Self::Id, style: &HighlightStyle);

    /// Restores the node's base presentation.
    fn clear_emphasis(&mut self, id: &Self::Id);
}

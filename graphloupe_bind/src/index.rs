// Copyright 2025 the Graphloupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashMap;
use tracing::debug;

use crate::scene::DiagramScene;

/// Lookup from tree-entry path strings to diagram node identifiers.
///
/// Tree entries carry *relative* hierarchical paths while diagram node titles
/// carry fuller ones (typically prefixed with the module or repository root),
/// so entries are bound by suffix matching: an entry binds to the first node,
/// in scene enumeration order, whose title ends with the entry's path. First
/// match wins; this is a tie-break policy, not guaranteed disambiguation,
/// and entries with no matching title are simply left unbound.
///
/// Built once after the diagram and the tree view are both present; read-only
/// thereafter.
#[derive(Clone, Debug)]
pub struct NodeIndex<Id> {
    map: HashMap<String, Id>,
}

impl<Id: Clone> NodeIndex<Id> {
    /// Builds the index by matching every tree entry against the scene's
    /// node titles.
    ///
    /// Titles are normalized by stripping double-quote characters before
    /// matching; generators commonly emit the node title as a quoted path
    /// string.
    pub fn build<D, E>(entries: E, scene: &D) -> Self
    where
        D: DiagramScene<Id = Id>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        let mut nodes: Vec<(Id, String)> = Vec::new();
        scene.visit_nodes(&mut |id, title| {
            nodes.push((id, title.replace('"', "")));
        });

        let mut map = HashMap::new();
        let mut unbound = 0_usize;
        for entry in entries {
            let entry = entry.into();
            match nodes.iter().find(|(_, title)| title.ends_with(&entry)) {
                Some((id, _)) => {
                    map.insert(entry, id.clone());
                }
                None => unbound += 1,
            }
        }
        debug!(bound = map.len(), unbound, "built tree-graph node index");
        Self { map }
    }

    /// Returns the node bound to `entry`, if any.
    #[must_use]
    pub fn get(&self, entry: &str) -> Option<&Id> {
        self.map.get(entry)
    }

    /// Returns the number of bound entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if no entry is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

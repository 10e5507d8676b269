//! Relation registry: source → targets bookkeeping
//!
//! The registry is the only mutable state in the crate. It is owned by an
//! `Overlay` instance and mutated exclusively through explicit
//! register/unregister calls, serialized by the caller; there is no
//! ambient global registry.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::geometry::Anchor;
use crate::style::StyleOverride;

/// Directed declaration that an arrow from a source element should
/// terminate at `target_id`
///
/// The source id is not part of the relation: it is the registry key the
/// relation is registered under, which keeps source ids and registration
/// ids equal by construction.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Relation {
    #[serde(rename = "target")]
    pub target_id: String,
    pub source_anchor: Anchor,
    pub target_anchor: Anchor,
    /// Per-relation style fields overriding the container defaults
    #[serde(flatten)]
    pub style: StyleOverride,
    /// Optional text drawn at the curve midpoint
    #[serde(default)]
    pub label: Option<String>,
}

impl Relation {
    pub fn new(
        target_id: impl Into<String>,
        source_anchor: Anchor,
        target_anchor: Anchor,
    ) -> Self {
        Self {
            target_id: target_id.into(),
            source_anchor,
            target_anchor,
            style: StyleOverride::default(),
            label: None,
        }
    }

    pub fn with_style(mut self, style: StyleOverride) -> Self {
        self.style = style;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Insertion-ordered map from source element id to its outgoing relations
///
/// Insertion order is render order; re-registering an id replaces its
/// relation list in place without changing its position, so arrow stacking
/// stays stable across host re-renders.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: IndexMap<String, Vec<Relation>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the full relation list for `id` (idempotent)
    pub fn register(&mut self, id: impl Into<String>, relations: Vec<Relation>) {
        self.entries.insert(id.into(), relations);
    }

    /// Remove `id`'s entry entirely; unknown ids are a no-op
    ///
    /// Relations elsewhere that still target `id` stay registered and are
    /// filtered at draw time, not eagerly.
    pub fn unregister(&mut self, id: &str) {
        self.entries.shift_remove(id);
    }

    /// Relation list registered for `id`, if any
    pub fn get(&self, id: &str) -> Option<&[Relation]> {
        self.entries.get(id).map(Vec::as_slice)
    }

    /// Restartable iterator over all (source, relation) pairs in
    /// registration order; pure read
    pub fn relations(&self) -> impl Iterator<Item = (&str, &Relation)> {
        self.entries
            .iter()
            .flat_map(|(id, relations)| relations.iter().map(move |r| (id.as_str(), r)))
    }

    /// Number of registered elements (not relations)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

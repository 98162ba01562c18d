//! Per-run cache of remote entity identifiers.

use crate::remote::{EntityId, EntityKind, NamedEntity};
use std::collections::HashMap;

/// Name → server-assigned id index, one map per entity kind.
///
/// Primed once from the service's current state, extended in memory as
/// creations succeed. Never persisted; lives for a single run.
#[derive(Debug, Default)]
pub struct EntityCache {
    kinds: HashMap<EntityKind, HashMap<String, EntityId>>,
}

impl EntityCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index a kind's listed entities by name.
    pub fn populate(&mut self, kind: EntityKind, entities: Vec<NamedEntity>) {
        let index = self.kinds.entry(kind).or_default();
        for entity in entities {
            index.insert(entity.name, entity.id);
        }
    }

    pub fn contains(&self, kind: EntityKind, name: &str) -> bool {
        self.get(kind, name).is_some()
    }

    pub fn get(&self, kind: EntityKind, name: &str) -> Option<EntityId> {
        self.kinds.get(&kind).and_then(|index| index.get(name)).copied()
    }

    pub fn insert(&mut self, kind: EntityKind, name: &str, id: EntityId) {
        self.kinds
            .entry(kind)
            .or_default()
            .insert(name.to_string(), id);
    }

    pub fn len(&self, kind: EntityKind) -> usize {
        self.kinds.get(&kind).map_or(0, HashMap::len)
    }
}

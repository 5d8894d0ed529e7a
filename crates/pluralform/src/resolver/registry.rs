//! Per-locale message store.

use std::collections::BTreeMap;

use crate::types::MessageDefinition;

/// Message definitions for one locale, indexed by key.
///
/// Keys are stored sorted, so iteration order is deterministic for
/// validation reports and suggestion lists.
#[derive(Debug, Default)]
pub struct MessageRegistry {
    messages: BTreeMap<String, MessageDefinition>,
}

impl MessageRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a message definition by key.
    pub fn get(&self, key: &str) -> Option<&MessageDefinition> {
        self.messages.get(key)
    }

    /// Insert a message definition.
    ///
    /// Returns the key back on a duplicate so the caller can report which
    /// locale it collided in.
    pub fn insert(&mut self, def: MessageDefinition) -> Result<(), String> {
        if self.messages.contains_key(&def.key) {
            return Err(def.key);
        }
        self.messages.insert(def.key.clone(), def);
        Ok(())
    }

    /// Iterate keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }

    /// Iterate (key, definition) pairs in sorted order.
    pub fn definitions(&self) -> impl Iterator<Item = (&str, &MessageDefinition)> {
        self.messages.iter().map(|(key, def)| (key.as_str(), def))
    }

    /// Number of definitions.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the registry has no definitions.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

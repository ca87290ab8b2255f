//! Per-item image resolver state keyed by item identity.
//!
//! Resolver state belongs to an item, not to a slot in the list. When the
//! result set is replaced or reordered, each item keeps its resolver as long
//! as its candidate URLs are unchanged; an item whose URLs changed starts
//! over; items that disappeared are dropped, and any late image event for
//! them falls on the floor.

use std::collections::{HashMap, HashSet};
use std::fmt;

use api::MenuItem;
use dioxus::logger::tracing::debug;

use super::image::{Attempt, ImageResolver, Transition};

/// Stable identity of a menu item within a result set: its dish name plus its
/// ordinal among items sharing that name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemKey {
    pub dish: String,
    pub occurrence: usize,
}

impl ItemKey {
    pub fn assign(items: &[MenuItem]) -> Vec<ItemKey> {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        items
            .iter()
            .map(|item| {
                let count = seen.entry(item.dish.as_str()).or_insert(0);
                let key = ItemKey {
                    dish: item.dish.clone(),
                    occurrence: *count,
                };
                *count += 1;
                key
            })
            .collect()
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.dish, self.occurrence)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Failed,
}

/// A load or error event from a rendered image, tagged with the attempt that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSignal {
    pub attempt: Attempt,
    pub outcome: LoadOutcome,
}

#[derive(Debug, Default)]
pub struct ResolverRegistry {
    entries: HashMap<ItemKey, ImageResolver>,
    next_generation: u64,
}

impl ResolverRegistry {
    /// Align the registry with `items` and return their keys in list order.
    pub fn sync(&mut self, items: &[MenuItem]) -> Vec<ItemKey> {
        let keys = ItemKey::assign(items);

        let live: HashSet<&ItemKey> = keys.iter().collect();
        self.entries.retain(|key, _| live.contains(key));

        for (key, item) in keys.iter().zip(items) {
            let candidates = item.candidates();
            let unchanged = self
                .entries
                .get(key)
                .is_some_and(|existing| existing.candidates() == &candidates);
            if unchanged {
                continue;
            }

            let generation = self.next_generation;
            self.next_generation += 1;
            self.entries.insert(
                key.clone(),
                ImageResolver::with_generation(candidates, generation),
            );
        }

        keys
    }

    pub fn resolver(&self, key: &ItemKey) -> Option<&ImageResolver> {
        self.entries.get(key)
    }

    pub fn apply(&mut self, key: &ItemKey, signal: ImageSignal) -> Transition {
        let Some(resolver) = self.entries.get_mut(key) else {
            debug!(item = %key, "image event for a discarded item ignored");
            return Transition::Ignored;
        };

        match signal.outcome {
            LoadOutcome::Loaded => resolver.on_load(signal.attempt),
            LoadOutcome::Failed => resolver.on_error(signal.attempt),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::{Mutex, MutexGuard, PoisonError};

use larder_core::{DomainError, DomainResult};

use crate::config::InventoryConfig;
use crate::item::Item;

type Entries = BTreeMap<String, Item>;

/// Capacity-bounded, name-keyed collection of weighted items.
///
/// - One entry per name; adding an existing name merges the weights.
/// - The summed weight never exceeds `capacity` after a successful add.
/// - Every operation holds the same exclusive lock for its full duration, so
///   concurrent calls behave as if executed one at a time.
/// - Reads return owned copies; callers never see the internal map.
#[derive(Debug)]
pub struct Inventory {
    capacity: f64,
    entries: Mutex<Entries>,
}

impl Inventory {
    /// Create an empty inventory. `capacity` is expected to be positive; use
    /// [`Inventory::from_config`] to have it checked.
    pub fn new(capacity: f64) -> Self {
        Self {
            capacity,
            entries: Mutex::new(Entries::new()),
        }
    }

    pub fn from_config(config: &InventoryConfig) -> DomainResult<Self> {
        config.validate()?;
        Ok(Self::new(config.capacity))
    }

    /// Fixed at construction, so no locking is needed.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Add `item`, merging into an existing entry with the same name.
    ///
    /// Returns `Ok(false)` without touching state when the merged total would
    /// exceed capacity. A negative (or NaN) weight is an `InvalidArgument`
    /// error and is rejected before the lock is taken.
    pub fn add_item(&self, item: Item) -> DomainResult<bool> {
        let weight = item.weight();
        if weight.is_nan() || weight < 0.0 {
            tracing::warn!(name = item.name(), weight, "rejected item with negative weight");
            return Err(DomainError::invalid_argument(format!(
                "item weight cannot be negative (got {weight} for '{}')",
                item.name()
            )));
        }

        let mut entries = self.lock();

        let previous = entries.get(item.name()).map_or(0.0, Item::weight);
        let merged = previous + weight;
        let projected = projected_total(&entries, item.name(), merged);

        if projected > self.capacity {
            tracing::debug!(
                name = item.name(),
                weight,
                projected,
                capacity = self.capacity,
                "item does not fit"
            );
            return Ok(false);
        }

        entries.insert(item.name().to_owned(), item.with_weight(merged));
        tracing::debug!(name = item.name(), weight = merged, total = projected, "item stored");
        Ok(true)
    }

    /// Remove the entry named `name`. Returns whether anything was removed.
    pub fn remove_item(&self, name: &str) -> bool {
        let removed = self.lock().remove(name).is_some();
        if removed {
            tracing::debug!(name, "item removed");
        }
        removed
    }

    /// Snapshot of all entries, in no particular order.
    pub fn items(&self) -> Vec<Item> {
        self.lock().values().cloned().collect()
    }

    /// Sum of all entry weights at the moment the lock was held.
    pub fn current_weight(&self) -> f64 {
        sum_weights(self.lock().values().map(Item::weight))
    }

    /// Entries whose name contains `query`, ignoring case.
    pub fn find_by_name(&self, query: &str) -> Vec<Item> {
        let needle = query.to_lowercase();
        self.lock()
            .values()
            .filter(|item| item.name().to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    fn lock(&self) -> MutexGuard<'_, Entries> {
        // Critical sections never panic between reading and writing the map,
        // so a poisoned guard still holds a consistent map.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(InventoryConfig::default().capacity)
    }
}

/// Left fold from zero in iteration order. Both the capacity projection and
/// `current_weight` go through here so they round identically.
fn sum_weights(weights: impl Iterator<Item = f64>) -> f64 {
    weights.fold(0.0, |total, weight| total + weight)
}

/// Total the map would have with `name` stored at weight `merged`.
///
/// Sums in key order with the candidate in its sorted slot, which is exactly
/// the sequence `current_weight` will fold once the entry is committed.
fn projected_total(entries: &Entries, name: &str, merged: f64) -> f64 {
    let below: (Bound<&str>, Bound<&str>) = (Bound::Unbounded, Bound::Excluded(name));
    let above: (Bound<&str>, Bound<&str>) = (Bound::Excluded(name), Bound::Unbounded);

    sum_weights(
        entries
            .range::<str, _>(below)
            .map(|(_, item)| item.weight())
            .chain(std::iter::once(merged))
            .chain(entries.range::<str, _>(above).map(|(_, item)| item.weight())),
    )
}

use serde::{Deserialize, Serialize};

use larder_core::ValueObject;

/// An immutable name/weight pair stored in an [`Inventory`](crate::Inventory).
///
/// The name is the inventory key. Construction does not validate the weight;
/// the inventory rejects negative weights when the item is added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    weight: f64,
}

impl Item {
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// A new item with the same name and a different weight.
    pub fn with_weight(&self, weight: f64) -> Self {
        Self {
            name: self.name.clone(),
            weight,
        }
    }
}

impl ValueObject for Item {}

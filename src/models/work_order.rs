//! Work order model.
//!
//! A work order is the unit of production work flowing through the
//! single-resource queue. Orders are created by the upstream order source
//! and are immutable inside the engine — reordering changes sequence,
//! never the orders themselves.

use serde::{Deserialize, Serialize};

/// Scheduling priority of a work order.
///
/// Ranked `High > Medium > Low` for priority sorting. The serde names
/// match the strings used by upstream order sources.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// Processed before Medium and Low.
    High,
    /// The default when the source omits a priority.
    #[default]
    Medium,
    /// Processed last.
    Low,
}

impl Priority {
    /// Sort rank: lower rank = scheduled earlier.
    #[inline]
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }
}

/// A work order awaiting processing on the serial resource.
///
/// Raw records from the order source may omit fields; deserialization
/// applies the boundary defaults (priority → `Medium`, product type →
/// `"Default"`, name → empty) so a partial record still yields a
/// schedulable order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkOrder {
    /// Unique order identifier.
    pub id: String,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
    /// Scheduling priority.
    #[serde(default)]
    pub priority: Priority,
    /// Product type key, looked up in the duration table.
    #[serde(rename = "productType", default = "default_product_type")]
    pub product_type: String,
}

fn default_product_type() -> String {
    crate::models::DEFAULT_KEY.to_string()
}

impl WorkOrder {
    /// Creates a new work order with the given ID and boundary defaults.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            priority: Priority::default(),
            product_type: default_product_type(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the product type key.
    pub fn with_product_type(mut self, product_type: impl Into<String>) -> Self {
        self.product_type = product_type.into();
        self
    }
}

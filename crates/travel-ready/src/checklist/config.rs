use serde::{Deserialize, Serialize};

pub const DEFAULT_MINIMUM_ITEMS: usize = 50;
pub const DEFAULT_MAXIMUM_ITEMS: usize = 100;

/// Size bounds applied after the rule groups have run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistConfig {
    pub minimum_items: usize,
    pub maximum_items: usize,
}

impl Default for ChecklistConfig {
    fn default() -> Self {
        Self {
            minimum_items: DEFAULT_MINIMUM_ITEMS,
            maximum_items: DEFAULT_MAXIMUM_ITEMS,
        }
    }
}

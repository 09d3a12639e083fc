use serde::{Deserialize, Serialize};

/// One selectable unit within a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitOption {
    /// Canonical unit identifier, persisted into query state.
    pub value: String,
    /// Human-readable display string. Not guaranteed unique across categories.
    pub label: String,
}

impl UnitOption {
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// One category's presentation group: the category name plus its options in
/// declared order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionGroup {
    pub label: String,
    pub options: Vec<UnitOption>,
}

/// Category-partitioned option list, ordered by the configured support list.
pub type GroupedOptionList = Vec<OptionGroup>;

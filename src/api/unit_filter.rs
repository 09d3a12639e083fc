use tracing::{debug, trace};

use crate::core::{GroupedOptionList, KnownCategory, OptionGroup, UnitTaxonomy, matches_label};

use super::query_state::QueryState;

/// Host callback invoked with the new selection on every user-driven change.
pub type UnitChangeCallback = Box<dyn Fn(Option<&str>)>;

/// Constructor configuration for [`UnitFilter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitFilterConfig {
    /// Ordered category support list. Groups render in this order; categories
    /// left off the list never appear.
    pub categories: Vec<String>,
}

impl Default for UnitFilterConfig {
    fn default() -> Self {
        Self {
            categories: KnownCategory::DEFAULT_SUPPORT
                .iter()
                .map(|category| category.name().to_owned())
                .collect(),
        }
    }
}

impl UnitFilterConfig {
    #[must_use]
    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }
}

/// Stateless bridge between the unit taxonomy, a host presentation layer,
/// and the shared query-state store. All persistent state lives in the
/// store; every method is a pass-through over the current call.
pub struct UnitFilter<'t, S: QueryState> {
    taxonomy: &'t UnitTaxonomy,
    state: S,
    config: UnitFilterConfig,
    on_change: Option<UnitChangeCallback>,
}

impl<'t, S: QueryState> UnitFilter<'t, S> {
    #[must_use]
    pub fn new(taxonomy: &'t UnitTaxonomy, state: S) -> Self {
        Self {
            taxonomy,
            state,
            config: UnitFilterConfig::default(),
            on_change: None,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: UnitFilterConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_on_change(mut self, callback: UnitChangeCallback) -> Self {
        self.on_change = Some(callback);
        self
    }

    #[must_use]
    pub fn config(&self) -> &UnitFilterConfig {
        &self.config
    }

    /// One group per supported category, in support-list order.
    ///
    /// Recomputed on every call; the catalog is small and static, so no
    /// caching is warranted.
    #[must_use]
    pub fn build_options(&self) -> GroupedOptionList {
        let groups: GroupedOptionList = self
            .config
            .categories
            .iter()
            .map(|category| OptionGroup {
                label: category.clone(),
                options: self.taxonomy.select_options(category),
            })
            .collect();
        trace!(groups = groups.len(), "build grouped unit options");
        groups
    }

    /// Currently selected unit as held by the shared store.
    #[must_use]
    pub fn current_selection(&self) -> Option<String> {
        self.state.unit()
    }

    /// Applies a user-driven selection change: notifies the host callback
    /// when one was supplied, then writes the value to the shared store.
    /// The store write is never skipped.
    ///
    /// Values are forwarded unvalidated; the presentation layer constrains
    /// the choice by only offering options from [`Self::build_options`].
    /// Clearing the selector passes `None`.
    pub fn on_selection_change(&mut self, value: Option<&str>) {
        debug!(?value, "unit selection change");
        if let Some(on_change) = &self.on_change {
            on_change(value);
        }
        self.state.set_unit(value);
    }

    /// Search predicate handed to the presentation layer for pruning visible
    /// options as the user types.
    #[must_use]
    pub fn matches(&self, input: &str, label: &str) -> bool {
        matches_label(input, label)
    }
}

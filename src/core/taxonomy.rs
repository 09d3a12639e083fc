use indexmap::IndexMap;

use crate::error::{UnitsError, UnitsResult};

use super::types::UnitOption;

/// Read-only catalog mapping category names to their selectable unit options.
///
/// Category iteration order is declaration order, and option order within a
/// category is declaration order; both are part of the contract consumed by
/// the grouped option list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitTaxonomy {
    categories: IndexMap<String, Vec<UnitOption>>,
}

impl UnitTaxonomy {
    /// The catalog shipped with the crate (see [`super::catalog`]).
    #[must_use]
    pub fn builtin() -> &'static UnitTaxonomy {
        super::catalog::builtin()
    }

    #[must_use]
    pub fn builder() -> TaxonomyBuilder {
        TaxonomyBuilder::default()
    }

    /// Options declared for `category`, in declared order.
    ///
    /// An unknown category yields an empty slice, never an error: a category
    /// with no known units is valid and renders as an empty group.
    #[must_use]
    pub fn lookup(&self, category: &str) -> &[UnitOption] {
        self.categories.get(category).map_or(&[], Vec::as_slice)
    }

    /// Presentation-ready copy of `lookup(category)`.
    #[must_use]
    pub fn select_options(&self, category: &str) -> Vec<UnitOption> {
        self.lookup(category).to_vec()
    }

    /// Category names in declared order.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    #[must_use]
    pub fn contains_category(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    pub(super) fn insert_category(&mut self, name: &str, options: Vec<UnitOption>) {
        self.categories.insert(name.to_owned(), options);
    }
}

/// Builds custom taxonomies for hosts that extend or replace the builtin
/// catalog. Duplicate category names and duplicate unit values within a
/// category are rejected at construction time; the built taxonomy itself
/// exposes no mutation API.
#[derive(Debug, Default)]
pub struct TaxonomyBuilder {
    taxonomy: UnitTaxonomy,
}

impl TaxonomyBuilder {
    pub fn category(
        mut self,
        name: impl Into<String>,
        options: Vec<UnitOption>,
    ) -> UnitsResult<Self> {
        let name = name.into();
        if self.taxonomy.categories.contains_key(&name) {
            return Err(UnitsError::DuplicateCategory { name });
        }

        // Option lists are small; a linear scan beats a set here.
        let mut seen: Vec<&str> = Vec::with_capacity(options.len());
        for option in &options {
            if seen.contains(&option.value.as_str()) {
                return Err(UnitsError::DuplicateUnitValue {
                    category: name,
                    value: option.value.clone(),
                });
            }
            seen.push(option.value.as_str());
        }

        self.taxonomy.categories.insert(name, options);
        Ok(self)
    }

    #[must_use]
    pub fn build(self) -> UnitTaxonomy {
        self.taxonomy
    }
}

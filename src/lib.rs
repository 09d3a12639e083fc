//! unit-filter-rs: unit taxonomy and selection core for query-builder UIs.
//!
//! This crate provides the non-visual half of a chart Y-axis unit selector:
//! a static unit catalog grouped by category, a case-insensitive option
//! matcher, and a thin controller that bridges the catalog to a host
//! presentation layer and to a shared query-state store.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use crate::api::{InMemoryQueryState, QueryState, UnitFilter, UnitFilterConfig};
pub use crate::core::{
    GroupedOptionList, KnownCategory, OptionGroup, TaxonomyBuilder, UnitOption, UnitTaxonomy,
    matches_label,
};
pub use crate::error::{UnitsError, UnitsResult};

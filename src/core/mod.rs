pub mod catalog;
pub mod matcher;
pub mod taxonomy;
pub mod types;

pub use catalog::KnownCategory;
pub use matcher::matches_label;
pub use taxonomy::{TaxonomyBuilder, UnitTaxonomy};
pub use types::{GroupedOptionList, OptionGroup, UnitOption};

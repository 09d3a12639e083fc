use thiserror::Error;

pub type UnitsResult<T> = Result<T, UnitsError>;

#[derive(Debug, Error)]
pub enum UnitsError {
    #[error("duplicate category: {name:?}")]
    DuplicateCategory { name: String },

    #[error("duplicate unit value {value:?} in category {category:?}")]
    DuplicateUnitValue { category: String, value: String },
}

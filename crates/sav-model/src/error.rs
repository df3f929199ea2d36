use thiserror::Error;

use crate::category::Category;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DictionaryError {
    #[error("dictionary category {category} is missing")]
    MissingCategory { category: Category },
}

pub type Result<T> = std::result::Result<T, DictionaryError>;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("the mapper function must return a single pair in form of an array [key => value], {found} returned")]
    InvalidMapperResult { found: String },

    #[error("extra argument {index} must be an array, {found} given")]
    InvalidArgument { index: usize, found: String },
}

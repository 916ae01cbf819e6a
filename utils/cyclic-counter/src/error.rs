use thiserror::Error;

pub type CyclicCounterResult<T> = std::result::Result<T, CyclicCounterError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CyclicCounterError {
    #[error("Invalid max value ({0}), the bound must not be negative")]
    InvalidBound(isize),
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BitMathError {
    /// Zero has no set bit, so there is no index to return.
    #[error("Invalid input: x can not be zero")]
    InvalidInput,

    #[error("Invalid input: {0} is not a 256-bit unsigned integer")]
    Parse(String),
}

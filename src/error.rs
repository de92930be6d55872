use thiserror::Error;

/// All fallible library functions return a `Result` with this error type
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A checked slot accessor was given an index past the end of the union
    #[error("slot index {index} is out of range for a union of {len} slots")]
    SlotOutOfRange { index: usize, len: usize },
    /// A typed slot accessor found a tag of a different type in the slot
    #[error("slot {index} does not hold a {expected}")]
    SlotTypeMismatch { index: usize, expected: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;

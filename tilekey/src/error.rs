use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("solidity key must be 8 characters, got {0}")]
    BadLength(usize),

    #[error("invalid character '{0}' in solidity key at position {1}")]
    InvalidChar(char, usize),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("image height {height} is smaller than tile size {tile}")]
    UndersizedSheet { height: u32, tile: u32 },
}

#[cfg(feature = "serde")]
#[derive(Debug, Error)]
pub enum TableError {
    #[error("malformed tile table: {0}")]
    Json(#[from] serde_json::Error),
}

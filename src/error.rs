use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input text contains too few usable letters to form a single
    /// bigram, so no frequency matrix can be normalized.
    #[error("Empty Input: {0}")]
    EmptyInput(String),

    /// The language model's frequency data is empty or rounds to a
    /// zero-weight sampling pool.
    #[error("Degenerate Model: {0}")]
    DegenerateModel(String),

    /// A key failed the bijection invariant. Unreachable at runtime
    /// barring an implementation defect.
    #[error("Invalid Key: {0}")]
    InvalidKey(String),
}

pub type CfResult<T> = Result<T, CipherForgeError>;

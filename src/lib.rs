pub mod config;
pub mod error;
pub mod key;
pub mod language;
pub mod matrix;
pub mod optimizer;
pub mod text;
// cmd and reports are binary modules (declared in main.rs).

pub use error::{CfResult, CipherForgeError};

/// Number of symbols in the working alphabet (lowercase a-z).
pub const ALPHABET_LEN: usize = 26;

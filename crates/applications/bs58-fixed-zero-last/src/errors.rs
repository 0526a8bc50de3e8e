/*!
 * Zero-last transform errors
 */

use bs58_fixed::DecodeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZeroLastError {
    #[error("Decoding error: {0}")]
    Decode(#[from] DecodeError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported input: expected a key, an array of keys or an {{\"arg\": ...}} record, got {0}")]
    UnsupportedInput(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ZeroLastError>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("error: {0}")]
    Common(String),
    #[error("serialize query params failed: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("invalid hmac key: {0}")]
    InvalidKey(#[from] hmac::digest::InvalidLength),
}

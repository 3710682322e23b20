//! 签名和通用工具，供`pa-sdk`使用

pub mod error;
pub mod helper;
pub mod query_sign;

pub use error::Error;

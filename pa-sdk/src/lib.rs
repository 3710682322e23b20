#![doc = include_str!("../README.md")]

pub mod cart;
pub mod clock;
pub mod constants;
pub mod credentials;
pub mod error_response;
pub mod region;
pub mod types_rs;

mod browse_node_lookup;
mod client;
mod error;
mod item_lookup;
mod item_search;
mod similarity_lookup;

pub use browse_node_lookup::*;
pub use client::{Client, Operation, OperationResponse};
pub use error::{ApiError, Error};
pub use item_lookup::*;
pub use item_search::*;
pub use similarity_lookup::*;

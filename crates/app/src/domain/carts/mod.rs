//! Carts

pub mod data;
pub mod errors;
pub mod item_service;
pub mod pricing;
pub mod records;
mod repositories;
pub mod service;

pub use errors::CartsServiceError;
pub use item_service::*;
pub use service::*;

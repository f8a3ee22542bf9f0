//! Shared newtype wrappers.

pub mod id;
pub mod price;

pub use id::ProductId;
pub use price::Rupiah;

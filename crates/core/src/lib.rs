//! Dila Store Core - Shared types library.
//!
//! Domain types shared by the Dila Store components, currently the `cart`
//! widget crate.
//!
//! # Architecture
//!
//! The core crate holds only types: no storage access, no document
//! rendering, no logging. Anything with a port or a side effect lives in
//! the widget crates instead.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product ids and rupiah amounts

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

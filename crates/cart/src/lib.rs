//! Dila Store cart widget library.
//!
//! A headless shopping cart for a small storefront: shoppers add items from
//! product listing buttons, the cart persists across page loads in a single
//! named key-value slot, and the cart page shows line items, totals and
//! removal controls.
//!
//! # Architecture
//!
//! The widget core is decoupled from any concrete UI runtime. Everything the
//! browser would normally provide is an injected port:
//!
//! - [`storage::StoragePort`] - the persistent key-value slot
//! - [`dom::Document`] - the page surface the widget writes into
//! - [`feedback::Notifier`] - transient confirmation banners
//! - [`feedback::ConfirmDialog`] - the blocking clear-cart confirmation
//!
//! UI events are mapped to explicit [`actions::CartAction`] commands before
//! they reach the repository, so the whole add/remove/clear/render cycle can
//! be exercised with in-memory fakes.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod actions;
pub mod config;
pub mod dom;
pub mod error;
pub mod feedback;
pub mod models;
pub mod repository;
pub mod storage;
pub mod view;
pub mod widget;

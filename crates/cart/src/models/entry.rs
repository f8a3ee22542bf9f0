//! The cart entry record.

use serde::{Deserialize, Serialize};

use dila_store_core::{ProductId, Rupiah};

/// One product instance recorded in the cart.
///
/// Entries are not deduplicated: adding the same product twice records it
/// twice, and the shopper removes each instance separately. The wire shape
/// in the storage slot is a JSON array of `{id, name, price, image}`
/// objects; a payload that does not match this shape is rejected at the
/// deserialization boundary rather than carried into state half-parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    /// Product identifier from the listing control.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price in whole rupiah.
    pub price: Rupiah,
    /// Display asset reference (URL or path).
    pub image: String,
}

impl CartEntry {
    /// Create a new entry.
    #[must_use]
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Rupiah,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            image: image.into(),
        }
    }
}

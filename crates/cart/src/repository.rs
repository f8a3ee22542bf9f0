//! Cart repository: get/add/remove/clear over the injected slot store.
//!
//! The persistent slot owns the cart; the repository never caches across
//! calls. Every operation re-reads the slot, works on that throwaway
//! snapshot and writes the whole sequence back, so concurrent pages sharing
//! the slot see plain last-write-wins semantics.

use crate::models::CartEntry;
use crate::storage::{SlotStore, StorageError, StoragePort};

/// Repository over the cart slot.
#[derive(Debug)]
pub struct CartRepository<P> {
    store: SlotStore<P>,
}

impl<P: StoragePort> CartRepository<P> {
    /// Create a repository over `store`.
    pub const fn new(store: SlotStore<P>) -> Self {
        Self { store }
    }

    /// Current entry sequence, in insertion order.
    ///
    /// # Errors
    ///
    /// Propagates slot read and deserialization failures.
    pub fn entries(&self) -> Result<Vec<CartEntry>, StorageError> {
        self.store.load()
    }

    /// Current entry count.
    ///
    /// # Errors
    ///
    /// Propagates slot read and deserialization failures.
    pub fn count(&self) -> Result<usize, StorageError> {
        Ok(self.store.load()?.len())
    }

    /// Append `entry` to the cart.
    ///
    /// # Errors
    ///
    /// Propagates slot access failures.
    pub fn add(&mut self, entry: CartEntry) -> Result<(), StorageError> {
        let mut entries = self.store.load()?;
        entries.push(entry);
        self.store.save(&entries)
    }

    /// Remove the entry at `index`, preserving the relative order of the
    /// rest. An out-of-bounds index removes nothing; the unchanged sequence
    /// is still written back, matching the overwrite-on-save slot contract.
    /// Returns whether an entry was removed.
    ///
    /// # Errors
    ///
    /// Propagates slot access failures.
    pub fn remove_at(&mut self, index: usize) -> Result<bool, StorageError> {
        let mut entries = self.store.load()?;
        let removed = index < entries.len();
        if removed {
            entries.remove(index);
        }
        self.store.save(&entries)?;
        Ok(removed)
    }

    /// Reset the cart to empty.
    ///
    /// # Errors
    ///
    /// Propagates slot write failures.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.store.save(&[])
    }

    /// The underlying slot store.
    #[must_use]
    pub const fn store(&self) -> &SlotStore<P> {
        &self.store
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use dila_store_core::{ProductId, Rupiah};

    fn repo() -> CartRepository<MemoryStorage> {
        CartRepository::new(SlotStore::new(MemoryStorage::new(), "cart"))
    }

    fn entry(id: &str) -> CartEntry {
        CartEntry::new(ProductId::new(id), id.to_uppercase(), Rupiah::new(1000), "x.jpg")
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut repo = repo();
        repo.add(entry("a")).unwrap();
        repo.add(entry("b")).unwrap();
        repo.add(entry("a")).unwrap(); // duplicates allowed

        let ids: Vec<_> = repo
            .entries()
            .unwrap()
            .into_iter()
            .map(|e| e.id.as_str().to_owned())
            .collect();
        assert_eq!(ids, ["a", "b", "a"]);
        assert_eq!(repo.count().unwrap(), 3);
    }

    #[test]
    fn test_remove_at_preserves_relative_order() {
        let mut repo = repo();
        for id in ["a", "b", "c", "d"] {
            repo.add(entry(id)).unwrap();
        }

        assert!(repo.remove_at(1).unwrap());

        let ids: Vec<_> = repo
            .entries()
            .unwrap()
            .into_iter()
            .map(|e| e.id.as_str().to_owned())
            .collect();
        assert_eq!(ids, ["a", "c", "d"]);
    }

    #[test]
    fn test_remove_out_of_bounds_is_noop() {
        let mut repo = repo();
        repo.add(entry("a")).unwrap();

        assert!(!repo.remove_at(1).unwrap());
        assert!(!repo.remove_at(usize::MAX).unwrap());
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_clear_resets_to_empty() {
        let mut repo = repo();
        repo.add(entry("a")).unwrap();
        repo.add(entry("b")).unwrap();

        repo.clear().unwrap();
        assert_eq!(repo.entries().unwrap(), Vec::new());
    }
}

//! The cart store.

use tokio::sync::watch;

use crate::domain::{
    carts::{
        errors::CartStoreError,
        models::{CartLine, CartState},
        storage::CartStorage,
    },
    catalog::Origin,
};

/// Explicitly constructed, persisted cart state.
///
/// Every successful mutation is written through the storage backend before
/// it returns, then published on the watch channel, so state survives a
/// session restart and all readers observe changes immediately.
pub struct CartStore {
    storage: Box<dyn CartStorage>,
    state: CartState,
    changes: watch::Sender<Vec<CartLine>>,
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl CartStore {
    /// Open the store, loading any previously persisted state.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot be read or holds a corrupt
    /// document.
    pub fn open(storage: Box<dyn CartStorage>) -> Result<Self, CartStoreError> {
        let state = match storage.load()? {
            Some(document) => {
                serde_json::from_str(&document).map_err(CartStoreError::Corrupt)?
            }
            None => CartState::default(),
        };

        let (changes, _initial) = watch::channel(state.products.clone());

        Ok(Self {
            storage,
            state,
            changes,
        })
    }

    #[must_use]
    pub fn items(&self) -> &[CartLine] {
        &self.state.products
    }

    /// Number of distinct line items, not the summed quantity.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.products.is_empty()
    }

    #[must_use]
    pub fn contains(&self, product_id: &str, origin: Origin) -> bool {
        self.state
            .products
            .iter()
            .any(|line| line.matches(product_id, origin))
    }

    /// Add one unit of a product: a repeat add increments the existing
    /// line's quantity, a first add appends a quantity-1 line.
    ///
    /// # Errors
    ///
    /// Returns an error when persisting the new state fails.
    pub fn add(&mut self, product_id: &str, origin: Origin) -> Result<(), CartStoreError> {
        match self
            .state
            .products
            .iter_mut()
            .find(|line| line.matches(product_id, origin))
        {
            Some(line) => line.quantity += 1,
            None => self.state.products.push(CartLine::new(product_id, origin)),
        }

        self.persist()
    }

    /// Delete the line whose composite reference matches exactly. A missing
    /// reference is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error when persisting the new state fails.
    pub fn remove(&mut self, reference: &str) -> Result<(), CartStoreError> {
        let before = self.state.products.len();

        self.state.products.retain(|line| line.reference != reference);

        if self.state.products.len() == before {
            return Ok(());
        }

        self.persist()
    }

    /// Set the exact quantity of the matching line. A missing line is a
    /// no-op; a zero quantity is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`CartStoreError::ZeroQuantity`] for `quantity == 0`, or an
    /// error when persisting the new state fails.
    pub fn update_quantity(
        &mut self,
        product_id: &str,
        origin: Origin,
        quantity: u32,
    ) -> Result<(), CartStoreError> {
        if quantity == 0 {
            return Err(CartStoreError::ZeroQuantity);
        }

        let Some(line) = self
            .state
            .products
            .iter_mut()
            .find(|line| line.matches(product_id, origin))
        else {
            return Ok(());
        };

        line.quantity = quantity;

        self.persist()
    }

    /// Drop every line item.
    ///
    /// # Errors
    ///
    /// Returns an error when persisting the new state fails.
    pub fn clear(&mut self) -> Result<(), CartStoreError> {
        self.state.products.clear();

        self.persist()
    }

    /// Observe the line list; the receiver always holds the latest state.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<CartLine>> {
        self.changes.subscribe()
    }

    fn persist(&mut self) -> Result<(), CartStoreError> {
        let document = serde_json::to_string(&self.state).map_err(CartStoreError::Encode)?;

        self.storage.save(&document)?;

        let _receivers = self.changes.send_replace(self.state.products.clone());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::carts::storage::{FileCartStorage, MemoryCartStorage};

    use super::*;

    fn open_memory_store() -> Result<CartStore, CartStoreError> {
        CartStore::open(Box::new(MemoryCartStorage::new()))
    }

    #[test]
    fn first_add_creates_a_quantity_one_line() -> TestResult {
        let mut store = open_memory_store()?;

        store.add("5", Origin::Brazil)?;

        assert_eq!(store.len(), 1);
        assert_eq!(store.items().first().map(|l| l.quantity), Some(1));
        assert!(store.contains("5", Origin::Brazil));

        Ok(())
    }

    #[test]
    fn repeat_add_increments_instead_of_appending() -> TestResult {
        let mut store = open_memory_store()?;

        store.add("5", Origin::Brazil)?;
        store.add("5", Origin::Brazil)?;

        assert_eq!(store.len(), 1, "no second line for the same pair");
        assert_eq!(store.items().first().map(|l| l.quantity), Some(2));

        Ok(())
    }

    #[test]
    fn same_id_different_origin_is_a_distinct_line() -> TestResult {
        let mut store = open_memory_store()?;

        store.add("5", Origin::Brazil)?;
        store.add("5", Origin::Europe)?;

        assert_eq!(store.len(), 2, "origin is part of the line identity");

        Ok(())
    }

    #[test]
    fn remove_deletes_exactly_the_referenced_line() -> TestResult {
        let mut store = open_memory_store()?;

        store.add("5", Origin::Brazil)?;
        store.add("9", Origin::Europe)?;

        store.remove("brazil_5")?;

        assert_eq!(store.len(), 1);
        assert!(!store.contains("5", Origin::Brazil));
        assert!(store.contains("9", Origin::Europe), "other lines survive");

        Ok(())
    }

    #[test]
    fn remove_of_an_absent_reference_is_a_no_op() -> TestResult {
        let mut store = open_memory_store()?;

        store.add("5", Origin::Brazil)?;
        store.remove("europe_404")?;

        assert_eq!(store.len(), 1);

        Ok(())
    }

    #[test]
    fn update_quantity_sets_the_exact_value() -> TestResult {
        let mut store = open_memory_store()?;

        store.add("5", Origin::Brazil)?;
        store.add("5", Origin::Brazil)?;

        store.update_quantity("5", Origin::Brazil, 7)?;

        assert_eq!(
            store.items().first().map(|l| l.quantity),
            Some(7),
            "the value replaces the prior quantity, it does not combine"
        );

        Ok(())
    }

    #[test]
    fn update_quantity_rejects_zero() -> TestResult {
        let mut store = open_memory_store()?;

        store.add("5", Origin::Brazil)?;

        let result = store.update_quantity("5", Origin::Brazil, 0);

        assert!(
            matches!(result, Err(CartStoreError::ZeroQuantity)),
            "expected ZeroQuantity, got {result:?}"
        );
        assert_eq!(store.items().first().map(|l| l.quantity), Some(1));

        Ok(())
    }

    #[test]
    fn clear_empties_the_store() -> TestResult {
        let mut store = open_memory_store()?;

        store.add("5", Origin::Brazil)?;
        store.add("9", Origin::Europe)?;

        store.clear()?;

        assert!(store.is_empty());

        Ok(())
    }

    #[test]
    fn state_survives_a_reopen_over_the_same_storage() -> TestResult {
        let storage = MemoryCartStorage::new();

        let mut store = CartStore::open(Box::new(storage.clone()))?;

        store.add("5", Origin::Brazil)?;
        store.add("5", Origin::Brazil)?;

        drop(store);

        let reopened = CartStore::open(Box::new(storage))?;

        assert_eq!(reopened.len(), 1);
        assert_eq!(reopened.items().first().map(|l| l.quantity), Some(2));

        Ok(())
    }

    #[test]
    fn state_survives_a_reopen_over_the_file_backend() -> TestResult {
        let dir = tempfile::tempdir()?;

        let mut store = CartStore::open(Box::new(FileCartStorage::new(dir.path())))?;

        store.add("9", Origin::Europe)?;

        drop(store);

        let reopened = CartStore::open(Box::new(FileCartStorage::new(dir.path())))?;

        assert!(reopened.contains("9", Origin::Europe));

        Ok(())
    }

    #[test]
    fn corrupt_persisted_state_surfaces_on_open() -> TestResult {
        let storage = MemoryCartStorage::new();

        storage.save("not json")?;

        let result = CartStore::open(Box::new(storage));

        assert!(
            matches!(result, Err(CartStoreError::Corrupt(_))),
            "expected Corrupt"
        );

        Ok(())
    }

    #[test]
    fn subscribers_observe_mutations_immediately() -> TestResult {
        let mut store = open_memory_store()?;
        let receiver = store.subscribe();

        store.add("5", Origin::Brazil)?;

        assert_eq!(receiver.borrow().len(), 1);

        store.clear()?;

        assert!(receiver.borrow().is_empty());

        Ok(())
    }
}

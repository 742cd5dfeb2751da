//! Fixed-capacity, slot-stable inventory used for the kit and the chest.
//!
//! Items keep their slot until removed; a freed slot is reused by the next
//! insert. Duplicates are rejected and a full container reports an error
//! instead of overwriting anything.

use serde::Serialize;
use std::borrow::Borrow;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("no free slot (capacity {capacity})")]
    Full { capacity: usize },
    #[error("{0} is already stored")]
    Duplicate(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inventory<T, const N: usize> {
    slots: Vec<Option<T>>,
}

impl<T, const N: usize> Inventory<T, N> {
    pub fn new() -> Self {
        Self {
            slots: (0..N).map(|_| None).collect(),
        }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Items in slot order, skipping empty slots.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().flatten()
    }

    /// Raw slot view, including empty slots.
    pub fn slots(&self) -> &[Option<T>] {
        &self.slots
    }

    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.position(item).is_some()
    }

    fn position<Q>(&self, item: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.slots
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|stored| stored.borrow() == item))
    }

    /// Removes the item, freeing its slot. Returns `None` if it was absent.
    pub fn remove<Q>(&mut self, item: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let idx = self.position(item)?;
        self.slots[idx].take()
    }
}

impl<T: PartialEq + fmt::Display, const N: usize> Inventory<T, N> {
    /// Stores the item in the first free slot and returns that slot's index.
    pub fn insert(&mut self, item: T) -> Result<usize, InventoryError> {
        if self.slots.iter().flatten().any(|stored| *stored == item) {
            return Err(InventoryError::Duplicate(item.to_string()));
        }
        let idx = self
            .slots
            .iter()
            .position(Option::is_none)
            .ok_or(InventoryError::Full { capacity: N })?;
        self.slots[idx] = Some(item);
        Ok(idx)
    }

    pub fn from_items<I>(items: I) -> Result<Self, InventoryError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut inventory = Self::new();
        for item in items {
            inventory.insert(item)?;
        }
        Ok(inventory)
    }
}

impl<T, const N: usize> Default for Inventory<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Inventory<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for item in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{item}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Kit = Inventory<String, 3>;

    #[test]
    fn test_new_inventory_is_empty() {
        let kit = Kit::new();
        assert!(kit.is_empty());
        assert!(!kit.is_full());
        assert_eq!(kit.len(), 0);
        assert_eq!(kit.capacity(), 3);
        assert_eq!(kit.slots().len(), 3);
    }

    #[test]
    fn test_insert_fills_first_free_slot() {
        let mut kit = Kit::new();
        assert_eq!(kit.insert("rope".to_string()), Ok(0));
        assert_eq!(kit.insert("boat".to_string()), Ok(1));
        kit.remove("rope");
        // Freed slot 0 is reused before slot 2
        assert_eq!(kit.insert("water".to_string()), Ok(0));
        assert_eq!(kit.slots()[0].as_deref(), Some("water"));
    }

    #[test]
    fn test_insert_rejects_duplicate() {
        let mut kit = Kit::new();
        kit.insert("rope".to_string()).unwrap();
        assert_eq!(
            kit.insert("rope".to_string()),
            Err(InventoryError::Duplicate("rope".to_string()))
        );
        assert_eq!(kit.len(), 1);
    }

    #[test]
    fn test_insert_when_full_is_an_error() {
        let mut kit = Kit::from_items(["a", "b", "c"].map(String::from)).unwrap();
        assert!(kit.is_full());
        assert_eq!(
            kit.insert("d".to_string()),
            Err(InventoryError::Full { capacity: 3 })
        );
        assert!(!kit.contains("d"));
        assert_eq!(kit.len(), 3);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut kit = Kit::from_items(["rope".to_string()]).unwrap();
        assert_eq!(kit.remove("boat"), None);
        assert_eq!(kit.len(), 1);
        assert_eq!(kit.remove("rope"), Some("rope".to_string()));
        assert!(kit.is_empty());
    }

    #[test]
    fn test_display_joins_items_in_slot_order() {
        let mut kit = Kit::from_items(["rope", "boat", "water"].map(String::from)).unwrap();
        kit.remove("boat");
        assert_eq!(kit.to_string(), "rope water");
        assert_eq!(Kit::new().to_string(), "");
    }
}

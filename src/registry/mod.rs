//! Registry - the ordered collection of items and its five operations.
//!
//! The HTTP layer only talks to the [`Registry`] trait, so the store can be
//! swapped without touching the handlers. [`InMemoryRegistry`] is the only
//! implementation: a `Vec` in insertion order, scanned linearly by id.
//!
//! ## Example
//!
//! ```
//! use item_registry::item::Item;
//! use item_registry::registry::{InMemoryRegistry, Registry, RegistryError};
//!
//! let registry = InMemoryRegistry::new();
//! registry.create(Item::new(1, "Pen", 1.5, None)?)?;
//!
//! assert_eq!(registry.get(1)?.name(), "Pen");
//! assert_eq!(
//!     registry.create(Item::new(1, "Pen", 1.5, None)?),
//!     Err(RegistryError::Conflict(1))
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod in_memory;

use crate::item::Item;

pub use error::RegistryError;
pub use in_memory::InMemoryRegistry;

/// Storage for items, keyed by caller-supplied id.
///
/// Each call is atomic: it either applies completely or returns an error and
/// leaves the registry as it was.
pub trait Registry: Send + Sync {
    /// All items in insertion order.
    fn list(&self) -> Result<Vec<Item>, RegistryError>;

    /// The item with this id.
    fn get(&self, id: i64) -> Result<Item, RegistryError>;

    /// Append an item. Fails with `Conflict` if its id is taken.
    fn create(&self, item: Item) -> Result<Item, RegistryError>;

    /// Replace the item stored under `id`, keeping its position.
    ///
    /// The replacement is stored as given, even if its own id differs from `id`.
    fn update(&self, id: i64, item: Item) -> Result<Item, RegistryError>;

    /// Remove the item with this id.
    fn delete(&self, id: i64) -> Result<(), RegistryError>;

    /// Number of stored items.
    fn len(&self) -> Result<usize, RegistryError>;

    fn is_empty(&self) -> Result<bool, RegistryError> {
        Ok(self.len()? == 0)
    }
}

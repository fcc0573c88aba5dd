use std::sync::{Arc, RwLock};

use crate::item::Item;

use super::{Registry, RegistryError};

/// Items held in a `Vec` behind a lock.
///
/// Check and mutation happen under a single write guard, so two concurrent
/// creates with the same id cannot both succeed.
#[derive(Clone, Default)]
pub struct InMemoryRegistry {
    items: Arc<RwLock<Vec<Item>>>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        InMemoryRegistry {
            items: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

fn position(items: &[Item], id: i64) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}

impl Registry for InMemoryRegistry {
    fn list(&self) -> Result<Vec<Item>, RegistryError> {
        let items = self
            .items
            .read()
            .map_err(|_| RegistryError::LockPoisoned("read"))?;
        Ok(items.clone())
    }

    fn get(&self, id: i64) -> Result<Item, RegistryError> {
        let items = self
            .items
            .read()
            .map_err(|_| RegistryError::LockPoisoned("read"))?;
        items
            .iter()
            .find(|item| item.id() == id)
            .cloned()
            .ok_or(RegistryError::NotFound(id))
    }

    fn create(&self, item: Item) -> Result<Item, RegistryError> {
        let mut items = self
            .items
            .write()
            .map_err(|_| RegistryError::LockPoisoned("write"))?;
        if position(&items, item.id()).is_some() {
            return Err(RegistryError::Conflict(item.id()));
        }
        items.push(item.clone());
        Ok(item)
    }

    fn update(&self, id: i64, item: Item) -> Result<Item, RegistryError> {
        let mut items = self
            .items
            .write()
            .map_err(|_| RegistryError::LockPoisoned("write"))?;
        let index = position(&items, id).ok_or(RegistryError::NotFound(id))?;
        items[index] = item.clone();
        Ok(item)
    }

    fn delete(&self, id: i64) -> Result<(), RegistryError> {
        let mut items = self
            .items
            .write()
            .map_err(|_| RegistryError::LockPoisoned("write"))?;
        let index = position(&items, id).ok_or(RegistryError::NotFound(id))?;
        items.remove(index);
        Ok(())
    }

    fn len(&self) -> Result<usize, RegistryError> {
        let items = self
            .items
            .read()
            .map_err(|_| RegistryError::LockPoisoned("read"))?;
        Ok(items.len())
    }
}

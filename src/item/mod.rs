//! Item - the single record type held by the registry.
//!
//! An [`Item`] is only ever produced by validating an [`ItemInput`], so every
//! value of the type satisfies the field constraints:
//!
//! - `id` is a positive integer
//! - `name` has between 1 and [`NAME_MAX_CHARS`] characters
//! - `price` is strictly positive
//! - `description`, when present, has at most [`DESCRIPTION_MAX_CHARS`] characters
//!
//! ## Example
//!
//! ```
//! use item_registry::item::ItemInput;
//!
//! let input: ItemInput = serde_json::from_str(r#"{"id": 1, "name": "Pen", "price": 1.5}"#)?;
//! let item = input.validate()?;
//! assert_eq!(item.name(), "Pen");
//! assert_eq!(item.description(), None);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod input;

use serde::{Deserialize, Serialize};

pub use error::{FieldError, ValidationError};
pub use input::ItemInput;

/// Maximum length of `name`, in characters.
pub const NAME_MAX_CHARS: usize = 50;

/// Maximum length of `description`, in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 200;

/// A validated item.
///
/// Deserialising goes through [`ItemInput::validate`], so an invalid JSON
/// document never yields an `Item`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ItemInput")]
pub struct Item {
    id: i64,
    name: String,
    price: f64,
    description: Option<String>,
}

impl Item {
    /// Build an item from its parts, applying the same rules as a request body.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        price: f64,
        description: Option<String>,
    ) -> Result<Self, ValidationError> {
        ItemInput {
            id: Some(id),
            name: Some(name.into()),
            price: Some(price),
            description,
        }
        .validate()
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl TryFrom<ItemInput> for Item {
    type Error = ValidationError;

    fn try_from(input: ItemInput) -> Result<Self, Self::Error> {
        input.validate()
    }
}

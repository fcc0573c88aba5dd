use serde::{Deserialize, Serialize};

use super::error::{FieldError, ValidationError};
use super::{Item, DESCRIPTION_MAX_CHARS, NAME_MAX_CHARS};

/// An item as it arrives in a request body, before validation.
///
/// Required fields are optional here so a missing field is reported together
/// with the other failures instead of aborting deserialisation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemInput {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
}

impl ItemInput {
    /// Check every constraint and produce an [`Item`], or all the failures.
    pub fn validate(self) -> Result<Item, ValidationError> {
        let mut errors = Vec::new();

        match self.id {
            None => errors.push(FieldError::new("id", "field required")),
            Some(id) if id <= 0 => errors.push(FieldError::new("id", "must be greater than 0")),
            Some(_) => {}
        }

        match self.name.as_deref().map(|n| n.chars().count()) {
            None => errors.push(FieldError::new("name", "field required")),
            Some(0) => errors.push(FieldError::new("name", "must have at least 1 character")),
            Some(len) if len > NAME_MAX_CHARS => errors.push(FieldError::new(
                "name",
                format!("must have at most {} characters", NAME_MAX_CHARS),
            )),
            Some(_) => {}
        }

        match self.price {
            None => errors.push(FieldError::new("price", "field required")),
            // `!(p > 0.0)` also catches NaN
            Some(p) if !(p > 0.0) => {
                errors.push(FieldError::new("price", "must be greater than 0"))
            }
            Some(_) => {}
        }

        if let Some(description) = &self.description {
            if description.chars().count() > DESCRIPTION_MAX_CHARS {
                errors.push(FieldError::new(
                    "description",
                    format!("must have at most {} characters", DESCRIPTION_MAX_CHARS),
                ));
            }
        }

        match (self.id, self.name, self.price) {
            (Some(id), Some(name), Some(price)) if errors.is_empty() => Ok(Item {
                id,
                name,
                price,
                description: self.description,
            }),
            _ => Err(ValidationError { errors }),
        }
    }
}

//! A small HTTP service for create/read/update/delete over an in-memory,
//! insertion-ordered registry of items.
//!
//! - [`item`] - the `Item` record and its validation
//! - [`registry`] - the `Registry` trait and `InMemoryRegistry`
//! - [`http`] - the axum router and handlers
//! - [`server`] - binding, serving and graceful shutdown
//! - [`config`], [`logging`] - ambient setup used by the binary

pub mod config;
pub mod http;
pub mod item;
pub mod logging;
pub mod registry;
pub mod server;

pub use config::Config;
pub use http::{router, ApiError};
pub use item::{FieldError, Item, ItemInput, ValidationError};
pub use registry::{InMemoryRegistry, Registry, RegistryError};

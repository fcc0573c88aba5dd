/// Failure of a registry operation. The registry is unchanged when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("item {0} not found")]
    NotFound(i64),
    #[error("item {0} already exists")]
    Conflict(i64),
    #[error("registry lock poisoned during {0}")]
    LockPoisoned(&'static str),
}

pub mod json_backend;

use crate::{domain::Store, errors::Result};

/// Abstraction over persistence backends capable of storing the expense
/// document. Every save rewrites the whole document; there are no partial
/// updates.
pub trait StorageBackend: Send + Sync {
    fn load(&self) -> Result<Store>;
    fn save(&self, store: &Store) -> Result<()>;
}

pub use json_backend::JsonStore;

//! High-level API for storing and sharing prompts.

mod error;
mod store;

pub use error::StoreError;
pub use store::PromptVault;

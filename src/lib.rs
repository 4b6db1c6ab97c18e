pub mod api;
pub mod cli;
pub mod commands;
pub mod core;

pub use api::{PromptVault, StoreError};
pub use crate::core::model::{Category, PromptDraft, PromptRecord, SharedView};

use super::config::VaultConfig;
use super::model::PromptRecord;
use super::slot::{FileSlot, StorageSlot};
use super::utils::ensure_dir;
use crate::api::StoreError;
use serde_json::Value;
use std::env;
use std::path::PathBuf;

/// Runtime context holding the vault paths and configuration.
pub struct AppCtx {
    pub base_dir: PathBuf,
    pub config_path: PathBuf,
    pub config: VaultConfig,
}

impl AppCtx {
    /// Locates the vault directory (`$PROMPT_VAULT_HOME`, else `~/.prompt-vault`),
    /// creates it if needed and loads `config.toml`.
    pub fn init() -> Result<Self, String> {
        let base_dir = match env::var_os("PROMPT_VAULT_HOME") {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => {
                let home = env::var("HOME")
                    .map_err(|_| "Unable to determine HOME directory".to_string())?;
                PathBuf::from(home).join(".prompt-vault")
            }
        };
        Self::at(base_dir)
    }

    /// Opens the vault rooted at `base_dir`.
    pub fn at(base_dir: PathBuf) -> Result<Self, String> {
        ensure_dir(&base_dir)?;
        let config_path = base_dir.join("config.toml");
        let config = VaultConfig::load(&config_path)?;

        Ok(Self {
            base_dir,
            config_path,
            config,
        })
    }

    /// Path of the file that holds the record list.
    pub fn slot_path(&self) -> PathBuf {
        self.base_dir.join(self.config.slot_file_name())
    }

    pub fn slot(&self) -> FileSlot {
        FileSlot::new(self.slot_path())
    }
}

/// Ordered list of prompt records kept in a single slot, newest first.
///
/// Every operation is a full read-modify-write of the slot. Nothing is cached
/// between calls, so another process writing the same slot simply wins.
pub struct RecordStore<S: StorageSlot> {
    slot: S,
}

impl<S: StorageSlot> RecordStore<S> {
    pub fn new(slot: S) -> Self {
        Self { slot }
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// All records in stored order. A missing, unreadable or malformed slot
    /// reads as an empty vault; single entries that do not fit the record
    /// schema are skipped.
    pub fn list(&self) -> Vec<PromptRecord> {
        self.load_entries()
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                match serde_json::from_value::<PromptRecord>(entry) {
                    Ok(mut record) => {
                        record.normalize();
                        Some(record)
                    }
                    Err(e) => {
                        tracing::warn!(index, error = %e, "Skipping unreadable prompt");
                        None
                    }
                }
            })
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<PromptRecord> {
        self.list().into_iter().find(|r| r.id == id)
    }

    /// Replaces the record with the same `id` in place, or puts a new one first.
    /// Entries `list` skips are written back untouched.
    pub fn upsert(&self, record: PromptRecord) -> Result<(), StoreError> {
        let value = serde_json::to_value(&record)?;
        let mut entries = self.load_entries();
        match entries
            .iter()
            .position(|e| entry_id(e) == Some(record.id.as_str()))
        {
            Some(index) => entries[index] = value,
            None => entries.insert(0, value),
        }
        self.persist(&entries)
    }

    /// Removes the record with `id`. Absent ids are not an error.
    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut entries = self.load_entries();
        entries.retain(|e| entry_id(e) != Some(id));
        self.persist(&entries)
    }

    /// Raw slot entries. Anything but a JSON array reads as empty.
    fn load_entries(&self) -> Vec<Value> {
        let raw = match self.slot.read() {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load prompts");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Value>>(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load prompts");
                Vec::new()
            }
        }
    }

    fn persist(&self, entries: &[Value]) -> Result<(), StoreError> {
        let json = serde_json::to_string(entries)?;
        self.slot.write(&json).map_err(|e| {
            tracing::warn!(error = %e, "Failed to save prompts");
            StoreError::Write(e)
        })?;
        tracing::debug!(count = entries.len(), "prompts saved");
        Ok(())
    }
}

fn entry_id(entry: &Value) -> Option<&str> {
    entry.get("id").and_then(Value::as_str)
}

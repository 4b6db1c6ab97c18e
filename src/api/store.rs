//! The main entry point for interacting with the prompt vault.

use crate::core::config::VaultConfig;
use crate::core::model::{Category, PromptDraft, PromptRecord, SharedView};
use crate::core::share;
use crate::core::slot::{FileSlot, StorageSlot};
use crate::core::storage::{AppCtx, RecordStore};
use crate::core::utils::{new_id, now_millis};

use super::error::StoreError;

/// The main entry point for interacting with the prompt vault.
///
/// Wraps a [`RecordStore`] with the behaviour of the create/edit form
/// (id and timestamp assignment, required fields) and of the share button.
pub struct PromptVault<S: StorageSlot = FileSlot> {
    store: RecordStore<S>,
    config: VaultConfig,
}

impl PromptVault<FileSlot> {
    /// Opens the vault in `$PROMPT_VAULT_HOME` or `~/.prompt-vault`.
    pub fn init() -> Result<Self, StoreError> {
        let ctx = AppCtx::init().map_err(StoreError::Init)?;
        Ok(Self::from_ctx(&ctx))
    }

    pub fn from_ctx(ctx: &AppCtx) -> Self {
        Self::with_slot(ctx.slot(), ctx.config.clone())
    }
}

impl<S: StorageSlot> PromptVault<S> {
    /// Builds a vault over any slot, e.g. a [`MemorySlot`](crate::core::slot::MemorySlot).
    pub fn with_slot(slot: S, config: VaultConfig) -> Self {
        Self {
            store: RecordStore::new(slot),
            config,
        }
    }

    pub fn store(&self) -> &RecordStore<S> {
        &self.store
    }

    pub fn config(&self) -> &VaultConfig {
        &self.config
    }

    /// All prompts, newest first.
    pub fn list(&self) -> Vec<PromptRecord> {
        self.store.list()
    }

    pub fn list_by_category(&self, category: Category) -> Vec<PromptRecord> {
        self.store
            .list()
            .into_iter()
            .filter(|r| r.category == category)
            .collect()
    }

    pub fn get(&self, id: &str) -> Result<PromptRecord, StoreError> {
        self.store
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Saves a new prompt and returns it with its assigned id.
    pub fn create(&self, draft: PromptDraft) -> Result<PromptRecord, StoreError> {
        draft.validate().map_err(StoreError::Validation)?;
        let now = now_millis();
        let id = new_id(now, &self.store.list());
        let record = PromptRecord::create(draft, id, now);
        self.store.upsert(record.clone())?;
        tracing::info!(id = %record.id, "prompt created");
        Ok(record)
    }

    /// Replaces the content of an existing prompt, keeping its id and creation time.
    pub fn update(&self, id: &str, draft: PromptDraft) -> Result<PromptRecord, StoreError> {
        draft.validate().map_err(StoreError::Validation)?;
        let mut record = self.get(id)?;
        record.apply(draft);
        self.store.upsert(record.clone())?;
        tracing::info!(id = %record.id, "prompt updated");
        Ok(record)
    }

    /// Deletes a prompt. Returns whether it existed.
    pub fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let existed = self.store.get(id).is_some();
        self.store.delete(id)?;
        if existed {
            tracing::info!(id = %id, "prompt deleted");
        }
        Ok(existed)
    }

    /// Share token for a stored prompt.
    pub fn share_token(&self, id: &str) -> Result<String, StoreError> {
        Ok(share::encode(&self.get(id)?))
    }

    /// Full share link for a stored prompt, on the configured base URL.
    pub fn share_link(&self, id: &str) -> Result<String, StoreError> {
        let token = self.share_token(id)?;
        share::share_link(&self.config.share_base_url, &token).map_err(StoreError::Configuration)
    }

    /// Read-only view behind a share link or token, `None` if it cannot be decoded.
    pub fn open_shared(&self, link_or_token: &str) -> Option<SharedView> {
        share::extract_token(link_or_token).and_then(|token| share::decode(&token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::PLACEHOLDER_IMAGE_URL;
    use crate::core::slot::MemorySlot;

    fn vault() -> PromptVault<MemorySlot> {
        PromptVault::with_slot(MemorySlot::new(), VaultConfig::default())
    }

    fn draft(title: &str) -> PromptDraft {
        PromptDraft {
            title: title.to_string(),
            prompt: format!("{} prompt", title),
            image_url: None,
            category: None,
        }
    }

    #[test]
    fn create_assigns_unique_ids_newest_first() {
        let v = vault();
        let a = v.create(draft("A")).unwrap();
        let b = v.create(draft("B")).unwrap();
        assert_ne!(a.id, b.id);
        let titles: Vec<_> = v.list().into_iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["B", "A"]);
        assert_eq!(a.image_url, PLACEHOLDER_IMAGE_URL);
        assert_eq!(a.category, Category::NanoBanana);
    }

    #[test]
    fn create_rejects_missing_fields() {
        let v = vault();
        let err = v.create(draft("")).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert!(v.list().is_empty());
    }

    #[test]
    fn update_preserves_id_and_created_at() {
        let v = vault();
        let original = v.create(draft("A")).unwrap();
        v.create(draft("B")).unwrap();

        let mut edit = draft("A2");
        edit.category = Some(Category::Midjourney);
        let updated = v.update(&original.id, edit).unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(updated.category, Category::Midjourney);
        assert_eq!(v.list()[1].title, "A2");
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let v = vault();
        assert!(matches!(v.update("404", draft("A")), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn delete_reports_existence() {
        let v = vault();
        let a = v.create(draft("A")).unwrap();
        assert!(v.delete(&a.id).unwrap());
        assert!(!v.delete(&a.id).unwrap());
        assert!(v.list().is_empty());
    }

    #[test]
    fn filter_by_category() {
        let v = vault();
        let mut mj = draft("MJ");
        mj.category = Some(Category::Midjourney);
        v.create(mj).unwrap();
        v.create(draft("NB")).unwrap();
        let hits = v.list_by_category(Category::Midjourney);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "MJ");
    }

    #[test]
    fn share_link_opens_as_view() {
        let v = vault();
        let mut d = draft("A");
        d.image_url = Some("https://img/a.png".to_string());
        d.category = Some(Category::Seedream);
        let record = v.create(d).unwrap();

        let link = v.share_link(&record.id).unwrap();
        assert!(link.starts_with("http://localhost:5173/#/share/"));

        let view = v.open_shared(&link).unwrap();
        assert_eq!(view, SharedView::from(&record));
    }

    #[test]
    fn open_shared_invalid_link_is_none() {
        let v = vault();
        assert_eq!(v.open_shared("http://localhost:5173/#/share/not-valid-base64!!"), None);
        assert_eq!(v.open_shared("http://localhost:5173/"), None);
    }
}

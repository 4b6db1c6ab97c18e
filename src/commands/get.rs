use super::render;
use crate::api::PromptVault;

/// Display a prompt.
pub fn run(vault: &PromptVault, id: &str) -> Result<(), String> {
    let record = vault.get(id).map_err(|e| e.to_string())?;
    render::full(&record);
    Ok(())
}

use super::form;
use crate::api::PromptVault;
use crate::cli::PromptFields;
use crate::core::model::PromptDraft;
use console::style;

/// Create a new prompt. Falls back to the interactive form unless both
/// title and prompt were given as flags.
pub fn run(vault: &PromptVault, fields: PromptFields) -> Result<(), String> {
    let draft = if fields.title.is_some() && fields.prompt.is_some() {
        form::from_flags(fields, PromptDraft::default())
    } else {
        let base = form::from_flags(fields, PromptDraft::default());
        form::interactive(base)?
    };

    let record = vault.create(draft).map_err(|e| e.to_string())?;
    println!(
        "{} Prompt saved with ID {} and title '{}'",
        style("•").green().bold(),
        style(&record.id).yellow(),
        record.title
    );
    Ok(())
}

use super::form;
use crate::api::PromptVault;
use crate::cli::PromptFields;
use console::style;

/// Edit a prompt's fields. Without flags the form opens prefilled.
pub fn run(vault: &PromptVault, id: &str, fields: PromptFields) -> Result<(), String> {
    let current = vault.get(id).map_err(|e| e.to_string())?;
    let base = current.to_draft();

    let draft = if fields.is_empty() {
        form::interactive(base.clone())?
    } else {
        form::from_flags(fields, base.clone())
    };

    if draft == base {
        println!("{}", style("No changes detected. Nothing to save.").yellow());
        return Ok(());
    }

    vault.update(id, draft).map_err(|e| e.to_string())?;
    println!(
        "{} Prompt '{}' updated successfully.",
        style("•").green().bold(),
        id
    );
    Ok(())
}

use crate::api::PromptVault;
use console::style;

/// Delete a prompt.
pub fn run(vault: &PromptVault, id: &str) -> Result<(), String> {
    if vault.delete(id).map_err(|e| e.to_string())? {
        println!("{} prompt {} deleted", style("•").green().bold(), id);
    } else {
        println!("{} no prompt with ID {}", style("•").yellow().bold(), id);
    }
    Ok(())
}

use super::render;
use crate::api::PromptVault;
use crate::core::model::Category;
use console::style;

/// List every saved prompt, newest first.
pub fn run(vault: &PromptVault, category: Option<Category>) -> Result<(), String> {
    let records = match category {
        Some(c) => vault.list_by_category(c),
        None => vault.list(),
    };

    if records.is_empty() {
        println!("{}", style("No saved prompts").green().bold());
        return Ok(());
    }

    println!("{}", style("Saved Prompts:").green().bold());
    for record in &records {
        render::card(record);
    }
    Ok(())
}

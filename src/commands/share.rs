use super::copy::set_clipboard;
use crate::api::PromptVault;
use console::style;

/// Print the share link of a prompt, optionally copying it.
pub fn run(vault: &PromptVault, id: &str, copy: bool) -> Result<(), String> {
    let link = vault.share_link(id).map_err(|e| e.to_string())?;
    println!("{}", link);
    if copy {
        set_clipboard(link)?;
        eprintln!("{} link copied to clipboard", style("•").green().bold());
    }
    Ok(())
}

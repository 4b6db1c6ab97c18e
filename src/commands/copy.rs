use crate::api::PromptVault;
use console::style;
use copypasta::{ClipboardContext, ClipboardProvider};

/// Copy prompt content to clipboard.
pub fn run(vault: &PromptVault, id: &str) -> Result<(), String> {
    let record = vault.get(id).map_err(|e| e.to_string())?;
    set_clipboard(record.prompt_text)?;
    println!("{} copied to clipboard", style("•").green().bold());
    Ok(())
}

pub(crate) fn set_clipboard(text: String) -> Result<(), String> {
    let mut ctx_clip = ClipboardContext::new().map_err(|e| format!("Clipboard error: {}", e))?;
    ctx_clip
        .set_contents(text)
        .map_err(|e| format!("Clipboard set error: {}", e))
}

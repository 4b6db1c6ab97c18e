use super::copy::set_clipboard;
use super::render;
use crate::api::PromptVault;
use console::style;

/// Render the prompt behind a share link, optionally copying its text. A link
/// that cannot be decoded is reported, not treated as a failure.
pub fn run(vault: &PromptVault, link: &str, copy: bool) -> Result<(), String> {
    let Some(view) = vault.open_shared(link) else {
        println!(
            "{}",
            style("This shared link is invalid or has expired.").yellow().bold()
        );
        return Ok(());
    };

    render::shared(&view);
    if copy {
        set_clipboard(view.prompt)?;
        eprintln!("{} prompt copied to clipboard", style("•").green().bold());
    }
    Ok(())
}

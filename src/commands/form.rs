//! The create/edit form: command-line flags, with dialoguer prompts for the rest.

use crate::cli::PromptFields;
use crate::core::model::{Category, PromptDraft};
use dialoguer::{theme::ColorfulTheme, Editor, Input, Select};

/// Overlays the given flags on `base` without asking anything.
pub fn from_flags(fields: PromptFields, base: PromptDraft) -> PromptDraft {
    PromptDraft {
        title: fields.title.unwrap_or(base.title),
        prompt: fields.prompt.unwrap_or(base.prompt),
        image_url: fields.image_url.or(base.image_url),
        category: fields.category.or(base.category),
    }
}

/// Asks for every field, prefilled from `base`.
pub fn interactive(base: PromptDraft) -> Result<PromptDraft, String> {
    let theme = ColorfulTheme::default();

    let title: String = Input::with_theme(&theme)
        .with_prompt("Title")
        .with_initial_text(base.title.clone())
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() {
                Err("Title cannot be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .map_err(|e| format!("Title error: {}", e))?;

    let names: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
    let current = base.category.unwrap_or_default();
    let selected = Select::with_theme(&theme)
        .with_prompt("Category")
        .items(&names)
        .default(Category::ALL.iter().position(|c| *c == current).unwrap_or(0))
        .interact()
        .map_err(|e| format!("Category error: {}", e))?;

    let image_url: String = Input::with_theme(&theme)
        .with_prompt("Image URL (4:5, optional)")
        .with_initial_text(base.image_url.clone().unwrap_or_default())
        .allow_empty(true)
        .interact_text()
        .map_err(|e| format!("Image URL error: {}", e))?;

    let prompt = Editor::new()
        .edit(&base.prompt)
        .map_err(|e| format!("Editor error: {}", e))?
        .unwrap_or(base.prompt);

    Ok(PromptDraft {
        title,
        prompt,
        image_url: Some(image_url),
        category: Some(Category::ALL[selected]),
    })
}

//! Terminal rendering of prompt cards and read-only views.

use crate::core::model::{Category, PromptRecord, SharedView};
use crate::core::utils::format_timestamp;
use console::{style, StyledObject};

/// Category badge, colored the same way across every view.
pub fn badge(category: Category) -> StyledObject<&'static str> {
    let s = style(category.as_str()).bold();
    match category {
        Category::NanoBanana => s.yellow(),
        Category::Midjourney => s.blue(),
        Category::Seedream => s.green(),
    }
}

/// One line per prompt, as shown by `list`.
pub fn card(record: &PromptRecord) {
    println!(
        "  {} {} - {} [{}]",
        style("•").green(),
        style(&record.id).yellow(),
        record.title,
        badge(record.category)
    );
    println!("      {}", style(&record.image_url).dim());
}

/// Full view of a stored prompt.
pub fn full(record: &PromptRecord) {
    println!("{} {}", style("Title:").green().bold(), record.title);
    println!("{} {}", style("Category:").green().bold(), badge(record.category));
    println!("{} {}", style("Image:").green().bold(), record.image_url);
    println!(
        "{} {}",
        style("Created:").green().bold(),
        format_timestamp(record.created_at)
    );
    println!("{}", style("Prompt:").green().bold());
    println!("{}", record.prompt_text);
}

/// Read-only view of a prompt received through a share link.
pub fn shared(view: &SharedView) {
    println!("{}", style("Shared prompt").cyan().bold().underlined());
    println!("{} {}", style("Title:").green().bold(), view.title);
    println!("{} {}", style("Category:").green().bold(), badge(view.category));
    println!("{} {}", style("Image:").green().bold(), view.image_url);
    println!("{}", style("Prompt:").green().bold());
    println!("{}", view.prompt);
}

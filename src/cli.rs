//! Defines the command-line interface structure using clap.

use crate::core::model::Category;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "prompt-vault", version, about = "Store, edit and share image prompts")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Cmd,
}

/// Form fields shared by `new` and `edit`. Missing ones are asked for interactively.
#[derive(Args, Default)]
pub struct PromptFields {
    #[arg(long, help = "Short display title")]
    pub title: Option<String>,
    #[arg(long, help = "Prompt text")]
    pub prompt: Option<String>,
    #[arg(long, help = "Image URL (a placeholder is used when empty)")]
    pub image_url: Option<String>,
    #[arg(long, help = "NanoBanana, Midjourney or Seedream")]
    pub category: Option<Category>,
}

impl PromptFields {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.prompt.is_none()
            && self.image_url.is_none()
            && self.category.is_none()
    }
}

#[derive(Subcommand)]
pub enum Cmd {
    /// List all stored prompts, newest first
    List {
        #[arg(long, help = "Only show prompts of this category")]
        category: Option<Category>,
    },
    /// Add a prompt to the vault
    New {
        #[command(flatten)]
        fields: PromptFields,
    },
    /// Show a prompt in full
    Get { id: String },
    /// Edit an existing prompt
    Edit {
        id: String,
        #[command(flatten)]
        fields: PromptFields,
    },
    /// Delete a prompt by ID
    Delete { id: String },
    /// Copy a prompt's text to the clipboard
    Copy { id: String },
    /// Print a share link for a prompt
    Share {
        id: String,
        #[arg(long, help = "Also copy the link to the clipboard")]
        copy: bool,
    },
    /// Open a share link (or bare token) as a read-only view
    Open {
        #[arg(help = "Share link, '#/share/<token>' fragment or token")]
        link: String,
        #[arg(long, help = "Also copy the shared prompt text to the clipboard")]
        copy: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_accepts_copy_flag() {
        let cli = Cli::try_parse_from(["prompt-vault", "open", "#/share/abc", "--copy"]).unwrap();
        match cli.command {
            Cmd::Open { link, copy } => {
                assert_eq!(link, "#/share/abc");
                assert!(copy);
            }
            _ => panic!("expected open"),
        }
    }

    #[test]
    fn open_defaults_to_print_only() {
        let cli = Cli::try_parse_from(["prompt-vault", "open", "tok"]).unwrap();
        assert!(matches!(cli.command, Cmd::Open { copy: false, .. }));
    }
}

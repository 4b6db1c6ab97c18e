use crate::api::PromptVault;
use crate::cli::Cmd;

pub mod copy;
pub mod delete;
pub mod edit;
pub mod form;
pub mod get;
pub mod list;
pub mod new;
pub mod open;
pub mod render;
pub mod share;

/// Dispatches the parsed command to the appropriate handler.
pub fn dispatch(command: Cmd, vault: &PromptVault) -> Result<(), String> {
    match command {
        Cmd::List { category } => list::run(vault, category),
        Cmd::New { fields } => new::run(vault, fields),
        Cmd::Get { id } => get::run(vault, &id),
        Cmd::Edit { id, fields } => edit::run(vault, &id, fields),
        Cmd::Delete { id } => delete::run(vault, &id),
        Cmd::Copy { id } => copy::run(vault, &id),
        Cmd::Share { id, copy } => share::run(vault, &id, copy),
        Cmd::Open { link, copy } => open::run(vault, &link, copy),
    }
}

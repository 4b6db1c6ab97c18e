use clap::Parser;
use prompt_vault::cli::Cli;
use prompt_vault::commands;
use prompt_vault::core::storage::AppCtx;
use prompt_vault::PromptVault;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();
    if let Err(e) = run() {
        eprintln!("• {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("prompt_vault=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let ctx = AppCtx::init()?;
    let vault = PromptVault::from_ctx(&ctx);
    commands::dispatch(cli.command, &vault)
}

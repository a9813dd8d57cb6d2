pub mod config;
pub mod export;

use inv_config::InvConfig;

use crate::cli::{Commands, GlobalFlags};

/// Route a parsed command to its handler.
pub async fn dispatch(
    command: Commands,
    config: InvConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Export(args) => export::handle(&args, config, flags).await,
        Commands::Config => config::handle(&config),
    }
}

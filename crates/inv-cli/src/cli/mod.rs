use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub mod global;

pub use global::GlobalFlags;

/// Top-level CLI parser for the `w32inv` binary.
#[derive(Debug, Parser)]
#[command(
    name = "w32inv",
    version,
    about = "Export Win32 app deployments, assignments, and rules to a CSV report"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (errors only, no progress)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Dotenv file to load before reading configuration
    #[arg(long, global = true, value_name = "PATH")]
    pub env_file: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            quiet: self.quiet,
            verbose: self.verbose,
            env_file: self.env_file.clone(),
        }
    }
}

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Fetch every Win32 app and write the flattened report.
    Export(ExportArgs),
    /// Print the effective configuration with secrets redacted.
    Config,
}

#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    /// Report destination (overrides report.output_path)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Field delimiter (overrides report.delimiter)
    #[arg(short, long)]
    pub delimiter: Option<char>,

    /// Directory (tenant) id (overrides graph.tenant_id)
    #[arg(long)]
    pub tenant_id: Option<String>,

    /// App registration client id (overrides graph.client_id)
    #[arg(long)]
    pub client_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn export_parses_overrides() {
        let cli = Cli::try_parse_from([
            "w32inv",
            "export",
            "--output",
            "reports/apps.csv",
            "--delimiter",
            ";",
            "--tenant-id",
            "contoso",
        ])
        .expect("cli should parse");

        let Commands::Export(args) = cli.command else {
            panic!("expected export");
        };
        assert_eq!(args.output.as_deref(), Some(Path::new("reports/apps.csv")));
        assert_eq!(args.delimiter, Some(';'));
        assert_eq!(args.tenant_id.as_deref(), Some("contoso"));
        assert!(args.client_id.is_none());
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["w32inv", "export", "--quiet", "--env-file", "prod.env"])
            .expect("cli should parse");

        let flags = cli.global_flags();
        assert!(flags.quiet);
        assert!(!flags.verbose);
        assert_eq!(flags.env_file.as_deref(), Some(Path::new("prod.env")));
    }

    #[test]
    fn config_subcommand_parses() {
        let cli = Cli::try_parse_from(["w32inv", "--verbose", "config"]).expect("cli should parse");
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Config));
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["w32inv"]).is_err());
    }
}

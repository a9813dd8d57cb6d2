use anyhow::Context;
use inv_config::InvConfig;

use crate::cli::{ExportArgs, GlobalFlags};

/// Load layered configuration, reading `--env-file` or `./.env` first.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<InvConfig> {
    let config = match &flags.env_file {
        Some(path) => {
            anyhow::ensure!(
                path.exists(),
                "dotenv file {} does not exist",
                path.display()
            );
            InvConfig::load_with_dotenv_from(path)
        }
        None => InvConfig::load_with_dotenv(),
    };
    config.context("failed to load configuration")
}

/// Apply `export` flags on top of the loaded configuration.
pub fn apply_export_overrides(config: &mut InvConfig, args: &ExportArgs) {
    if let Some(output) = &args.output {
        config.report.output_path = output.display().to_string();
    }
    if let Some(delimiter) = args.delimiter {
        config.report.delimiter = delimiter.to_string();
    }
    if let Some(tenant_id) = &args.tenant_id {
        config.graph.tenant_id.clone_from(tenant_id);
    }
    if let Some(client_id) = &args.client_id {
        config.graph.client_id.clone_from(client_id);
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn overrides_replace_only_given_values() {
        let mut config = InvConfig::default();
        config.graph.client_id = "from-config".into();
        let args = ExportArgs {
            output: Some(PathBuf::from("out.csv")),
            delimiter: Some('\t'),
            tenant_id: Some("flag-tenant".into()),
            client_id: None,
        };

        apply_export_overrides(&mut config, &args);

        assert_eq!(config.report.output_path, "out.csv");
        assert_eq!(config.report.delimiter, "\t");
        assert_eq!(config.graph.tenant_id, "flag-tenant");
        assert_eq!(config.graph.client_id, "from-config");
    }

    #[test]
    fn missing_env_file_is_an_error() {
        let flags = GlobalFlags {
            env_file: Some(PathBuf::from("/definitely/not/here.env")),
            ..GlobalFlags::default()
        };
        let err = load_config(&flags).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}

use std::path::{Path, PathBuf};

use anyhow::Context;
use inv_config::InvConfig;
use inv_core::{GroupDirectory, GroupResolver, UnresolvedGroup, Win32App, assemble_report};
use inv_graph::GraphClient;

use crate::bootstrap::apply_export_overrides;
use crate::cli::{ExportArgs, GlobalFlags};
use crate::progress::Progress;
use crate::report::write_report;

/// Outcome of one export run.
#[derive(Debug)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub rows: usize,
    pub unresolved: Vec<UnresolvedGroup>,
}

/// Handle `w32inv export`.
pub async fn handle(
    args: &ExportArgs,
    mut config: InvConfig,
    _flags: &GlobalFlags,
) -> anyhow::Result<()> {
    apply_export_overrides(&mut config, args);
    let graph_config = config.require_graph()?;
    let delimiter = config.report.delimiter_byte()?;
    let path = PathBuf::from(&config.report.output_path);

    tracing::info!("fetching Win32 apps from Microsoft Graph");
    let spinner = Progress::spinner("Fetching Win32 apps...");
    let fetched = fetch_apps(graph_config).await;
    let (client, apps) = match fetched {
        Ok(fetched) => {
            spinner.finish_clear();
            fetched
        }
        Err(error) => {
            spinner.finish_err("Fetch failed");
            return Err(error);
        }
    };
    tracing::info!(count = apps.len(), "fetched Win32 apps");

    let summary = export_apps(&apps, &client, &path, delimiter).await?;
    if !summary.unresolved.is_empty() {
        tracing::info!(
            count = summary.unresolved.len(),
            "some assigned groups no longer exist"
        );
    }
    println!(
        "Report with {} applications written to {}",
        summary.rows,
        summary.path.display()
    );
    Ok(())
}

async fn fetch_apps(
    graph_config: &inv_config::GraphConfig,
) -> anyhow::Result<(GraphClient, Vec<Win32App>)> {
    let client = GraphClient::connect(graph_config)
        .await
        .context("failed to authenticate against Microsoft Graph")?;
    let apps = client
        .list_win32_apps()
        .await
        .context("failed to fetch Win32 apps")?;
    Ok((client, apps))
}

/// Normalize `apps` and write the report. Nothing is written if any record
/// fails to assemble.
pub async fn export_apps<D>(
    apps: &[Win32App],
    directory: &D,
    path: &Path,
    delimiter: u8,
) -> anyhow::Result<ExportSummary>
where
    D: GroupDirectory + Sync,
{
    let mut resolver = GroupResolver::new(directory);
    let records = assemble_report(apps, &mut resolver)
        .await
        .context("failed to assemble report")?;
    write_report(path, &records, delimiter)?;

    Ok(ExportSummary {
        path: path.to_path_buf(),
        rows: records.len(),
        unresolved: resolver.into_unresolved(),
    })
}

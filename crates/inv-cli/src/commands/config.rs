use inv_config::InvConfig;

/// Handle `w32inv config`.
pub fn handle(config: &InvConfig) -> anyhow::Result<()> {
    println!("{}", render(config)?);
    Ok(())
}

fn render(config: &InvConfig) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&config.redacted())?)
}

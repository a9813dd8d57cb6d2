use figment::Jail;
use inv_config::InvConfig;

#[test]
fn env_vars_fill_graph_section() {
    Jail::expect_with(|jail| {
        jail.set_env("W32INV_GRAPH__TENANT_ID", "tenant-from-env");
        jail.set_env("W32INV_GRAPH__CLIENT_ID", "client-from-env");
        jail.set_env("W32INV_GRAPH__CLIENT_SECRET", "secret-from-env");

        let config = InvConfig::load().expect("config loads");
        assert_eq!(config.graph.tenant_id, "tenant-from-env");
        assert!(config.graph.has_client_credentials());
        assert_eq!(config.redacted().graph.client_secret, "***");
        Ok(())
    });
}

#[test]
fn numeric_env_values_are_parsed() {
    Jail::expect_with(|jail| {
        jail.set_env("W32INV_GRAPH__TIMEOUT_SECS", "5");

        let config = InvConfig::load().expect("config loads");
        assert_eq!(config.graph.timeout_secs, 5);
        Ok(())
    });
}

#[test]
fn dotenv_file_feeds_environment() {
    Jail::expect_with(|jail| {
        jail.create_file(".env.test", "W32INV_REPORT__DELIMITER=\"|\"\n")?;

        let config = InvConfig::load_with_dotenv_from(std::path::Path::new(".env.test"))
            .expect("config loads");
        assert_eq!(config.report.delimiter, "|");
        Ok(())
    });
}

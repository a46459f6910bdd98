//! CLI command implementations

use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::http_server::HttpServer;
use crate::observability::{self, Event};
use crate::store::{default_customers, InMemoryCustomerStore};

use super::args::Command;
use super::config::ServiceConfig;
use super::errors::{CliError, CliResult};

/// Run a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve {
            config,
            port,
            no_seed,
        } => serve(config.as_deref(), port, no_seed),
        Command::Config { config } => print_config(config.as_deref()),
    }
}

/// Resolve the configuration for `serve`, applying command-line overrides
pub fn resolve_config(
    path: Option<&Path>,
    port: Option<u16>,
    no_seed: bool,
) -> CliResult<ServiceConfig> {
    let mut config = ServiceConfig::load_or_default(path)?;
    if let Some(port) = port {
        config.server.port = port;
    }
    if no_seed {
        config.seed = false;
    }
    config.validate()?;
    Ok(config)
}

/// Build the store described by `config`
pub fn build_store(config: &ServiceConfig) -> CliResult<InMemoryCustomerStore> {
    if !config.seed {
        return Ok(InMemoryCustomerStore::new());
    }

    let seed = default_customers();
    let count = seed.len();
    let store = InMemoryCustomerStore::seeded(seed)
        .map_err(|e| CliError::config_error(format!("Invalid seed data: {}", e)))?;
    info!(event = %Event::StoreSeeded, count);
    Ok(store)
}

/// Start the server and block until it stops
pub fn serve(path: Option<&Path>, port: Option<u16>, no_seed: bool) -> CliResult<()> {
    let config = resolve_config(path, port, no_seed)?;

    observability::init(&config.logging);
    info!(event = %Event::ServiceStart, version = env!("CARGO_PKG_VERSION"));
    info!(event = %Event::ConfigLoaded, addr = %config.server.socket_addr(), seed = config.seed);

    let store = build_store(&config)?;
    let server = HttpServer::with_store(config.server, Arc::new(store));

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to start runtime: {}", e)))?;

    runtime
        .block_on(server.start())
        .map_err(|e| CliError::serve_failed(e.to_string()))
}

/// Print the effective configuration
pub fn print_config(path: Option<&Path>) -> CliResult<()> {
    let config = ServiceConfig::load_or_default(path)?;

    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, &config)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::CustomerStore;

    #[test]
    fn test_resolve_config_overrides() {
        let config = resolve_config(None, Some(9000), true).unwrap();
        assert_eq!(config.server.port, 9000);
        assert!(!config.seed);
    }

    #[test]
    fn test_resolve_config_rejects_port_zero() {
        assert!(resolve_config(None, Some(0), false).is_err());
    }

    #[test]
    fn test_build_store_seeded() {
        let store = build_store(&ServiceConfig::default()).unwrap();
        let ids: Vec<_> = store.list().unwrap().into_keys().collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_build_store_unseeded() {
        let config = ServiceConfig {
            seed: false,
            ..Default::default()
        };
        assert!(build_store(&config).unwrap().list().unwrap().is_empty());
    }
}

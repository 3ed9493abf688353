//! `geomctl`: operator tool for geometry servers.
//!
//! Composition root for the workspace. Parses flags (each with an environment
//! fallback), wires `tracing` to stderr and optionally to an OTLP collector,
//! opens a [`client::GeometryClient`] session and runs one subcommand.
//!
//! ```text
//! geomctl status
//! geomctl --protocol v0 services --json
//! geomctl logs --all
//! geomctl run-script /scripts/measure.py --arg body=B12 --api-version 251
//! ```

mod commands;
mod telemetry;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client::ClientConfig;
use geometry::VersionRequest;

use crate::telemetry::LogFormat;

#[derive(Debug, Parser)]
#[command(
    name = "geomctl",
    version,
    about = "Inspect and drive a geometry kernel server"
)]
struct Cli {
    /// Server host name or address.
    #[arg(
        long,
        env = "GEOMETRY_HOST",
        default_value = "localhost",
        global = true
    )]
    host: String,

    #[arg(long, env = "GEOMETRY_PORT", default_value_t = 50051, global = true)]
    port: u16,

    /// `auto`, a version name (`v0`, `v1`) or an ordinal.
    #[arg(long, env = "GEOMETRY_PROTOCOL", default_value = "auto", global = true)]
    protocol: VersionRequest,

    /// Seconds each version probe may take.
    #[arg(
        long,
        env = "GEOMETRY_PROBE_TIMEOUT",
        default_value_t = 5.0,
        global = true
    )]
    probe_timeout: f64,

    /// Seconds allowed for opening the channel.
    #[arg(
        long,
        env = "GEOMETRY_CONNECT_TIMEOUT",
        default_value_t = 10.0,
        global = true
    )]
    connect_timeout: f64,

    /// Seconds to wait for the server to report healthy.
    #[arg(
        long,
        env = "GEOMETRY_HEALTH_TIMEOUT",
        default_value_t = 30.0,
        global = true
    )]
    health_timeout: f64,

    #[arg(
        long,
        env = "GEOMETRY_LOG_FORMAT",
        value_enum,
        default_value_t,
        global = true
    )]
    log_format: LogFormat,

    /// OTLP collector for traces, e.g. `http://localhost:4317`.
    #[arg(long, env = "OTEL_EXPORTER_OTLP_ENDPOINT", global = true)]
    otlp_endpoint: Option<String>,

    /// Print machine-readable JSON on stdout.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Negotiated version, backend identity and health.
    Status,

    /// Services the negotiated protocol version provides.
    Services,

    /// Download server log files.
    Logs {
        /// Every log file, not only the current one.
        #[arg(long)]
        all: bool,
    },

    /// Run a script on the server.
    RunScript {
        /// Script path as seen by the server.
        path: String,

        /// Script argument, repeatable.
        #[arg(long = "arg", value_name = "KEY=VALUE", value_parser = parse_key_value)]
        args: Vec<(String, String)>,

        /// Scripting API version to run against.
        #[arg(long)]
        api_version: Option<u32>,
    },
}

impl Cli {
    fn client_config(&self) -> Result<ClientConfig> {
        let mut config = ClientConfig::for_endpoint(self.host.clone(), self.port);
        config.negotiation.request = self.protocol;
        config.negotiation.probe_timeout_secs = self.probe_timeout;
        config.connection.connect_timeout = Duration::try_from_secs_f64(self.connect_timeout)
            .with_context(|| format!("invalid --connect-timeout {}", self.connect_timeout))?;
        config.health_timeout_secs = self.health_timeout;
        config.validate().context("invalid connection settings")?;
        Ok(config)
    }
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{s}'")),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let telemetry = telemetry::init(cli.log_format, cli.otlp_endpoint.as_deref())?;
    let outcome = run(cli).await;
    telemetry.shutdown();
    outcome
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.client_config()?;
    let session = client::GeometryClient::connect(&config)
        .await
        .with_context(|| format!("failed to open a session with {}", config.endpoint_uri()))?;

    match cli.command {
        Command::Status => commands::status(&session, cli.json).await,
        Command::Services => commands::services(&session, cli.json),
        Command::Logs { all } => commands::logs(&session, all, cli.json).await,
        Command::RunScript {
            path,
            args,
            api_version,
        } => {
            let request = geometry::services::ScriptRequest {
                script_path: path,
                arguments: args.into_iter().collect(),
                api_version,
            };
            commands::run_script(&session, &request, cli.json).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use geometry::ProtocolVersion;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_build_a_client_config() {
        let cli = Cli::try_parse_from([
            "geomctl",
            "--host",
            "cad-01",
            "--port",
            "6000",
            "--protocol",
            "v0",
            "--probe-timeout",
            "2.5",
            "services",
        ])
        .unwrap();
        let config = cli.client_config().unwrap();
        assert_eq!(config.endpoint_uri(), "http://cad-01:6000");
        assert_eq!(
            config.negotiation.request,
            VersionRequest::Exact(ProtocolVersion::V0)
        );
        assert_eq!(config.negotiation.probe_timeout_secs, 2.5);
    }

    #[test]
    fn unknown_protocol_is_rejected_at_parse_time() {
        assert!(Cli::try_parse_from(["geomctl", "--protocol", "v9", "status"]).is_err());
    }

    #[test]
    fn script_arguments_are_key_value_pairs() {
        let cli = Cli::try_parse_from([
            "geomctl",
            "run-script",
            "/s/a.py",
            "--arg",
            "body=B1",
            "--arg",
            "depth=2=3",
            "--api-version",
            "251",
        ])
        .unwrap();
        match cli.command {
            Command::RunScript {
                path,
                args,
                api_version,
            } => {
                assert_eq!(path, "/s/a.py");
                assert_eq!(
                    args,
                    vec![
                        ("body".to_string(), "B1".to_string()),
                        ("depth".to_string(), "2=3".to_string()),
                    ]
                );
                assert_eq!(api_version, Some(251));
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(parse_key_value("=x").is_err());
        assert!(parse_key_value("novalue").is_err());
    }

    #[test]
    fn zero_probe_timeout_fails_validation() {
        let cli =
            Cli::try_parse_from(["geomctl", "--probe-timeout", "0", "status"]).unwrap();
        assert!(cli.client_config().is_err());
    }
}

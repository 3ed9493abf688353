//! Subcommand bodies. Human output goes to stdout; `--json` swaps it for one
//! JSON document.

use anyhow::{bail, Context, Result};
use client::GeometryClient;
use geometry::services::{BackendInfo, LogFile, ScriptOutcome, ScriptRequest};
use geometry::types::Timestamp;
use geometry::{ProtocolVersion, ServiceKind, SessionId};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Serialize)]
struct StatusReport {
    endpoint: String,
    session_id: SessionId,
    connected_at: Timestamp,
    protocol_version: ProtocolVersion,
    healthy: bool,
    backend: BackendInfo,
}

#[derive(Debug, Serialize)]
struct ServicesReport {
    protocol_version: ProtocolVersion,
    services: Vec<ServiceKind>,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("failed to encode output")?;
    println!("{text}");
    Ok(())
}

pub async fn status(session: &GeometryClient, json: bool) -> Result<()> {
    let report = StatusReport {
        endpoint: session.endpoint().to_string(),
        session_id: session.session_id(),
        connected_at: session.connected_at(),
        protocol_version: session.version(),
        healthy: session.is_healthy().await.context("health query failed")?,
        backend: session
            .backend_info()
            .await
            .context("backend query failed")?,
    };
    if json {
        return print_json(&report);
    }

    println!("endpoint:         {}", report.endpoint);
    println!("session:          {}", report.session_id);
    println!("connected at:     {}", report.connected_at);
    println!("protocol version: {}", report.protocol_version);
    println!("healthy:          {}", report.healthy);
    println!(
        "backend:          {:?} {}",
        report.backend.backend_type, report.backend.version
    );
    if !report.backend.api_build.is_empty() {
        println!("api build:        {}", report.backend.api_build);
    }
    if !report.backend.product_build.is_empty() {
        println!("product build:    {}", report.backend.product_build);
    }
    Ok(())
}

pub fn services(session: &GeometryClient, json: bool) -> Result<()> {
    let report = ServicesReport {
        protocol_version: session.version(),
        services: session.available_services(),
    };
    if json {
        return print_json(&report);
    }
    println!("services on {}:", report.protocol_version);
    for kind in &report.services {
        println!("  {kind}");
    }
    Ok(())
}

pub async fn logs(session: &GeometryClient, all: bool, json: bool) -> Result<()> {
    let files: Vec<LogFile> = session.logs(all).await.context("log download failed")?;
    info!(count = files.len(), "downloaded server logs");
    if json {
        return print_json(&files);
    }
    for file in &files {
        println!("==> {} <==", file.name);
        println!("{}", file.contents);
    }
    Ok(())
}

/// A script the server ran but reported as failed is an error exit.
pub async fn run_script(
    session: &GeometryClient,
    request: &ScriptRequest,
    json: bool,
) -> Result<()> {
    let outcome: ScriptOutcome = session
        .dbu_application()?
        .run_script(request)
        .await
        .with_context(|| format!("could not run {}", request.script_path))?;

    if json {
        print_json(&outcome)?;
    } else {
        for (key, value) in &outcome.values {
            println!("{key} = {value}");
        }
        if !outcome.message.is_empty() {
            println!("{}", outcome.message);
        }
    }

    if !outcome.success {
        bail!("script {} failed: {}", request.script_path, outcome.message);
    }
    Ok(())
}

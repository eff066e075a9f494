//! iplens - IP intelligence and DNS-over-HTTPS latency dashboard.
//!
//! Binary entry point for the iplens application.

#![warn(clippy::all, warnings)]
#![warn(clippy::pedantic, clippy::nursery)]

use iplens::cli::{Commands, OutputFormat};
use iplens::config::{ConfigLoader, ServerConfig};
use iplens::probe::{LatencyProber, ProbeResult, ProbeTarget};
use iplens::server::{build_router, AppState};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Set up logging based on verbosity level.
///
/// # Arguments
///
/// * `verbose` - Enable debug-level logging
/// * `quiet` - Enable error-level only logging
fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"))
    } else if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().without_time())
        .init();
}

/// Load the resolver target list from file or command-line arguments.
///
/// # Arguments
///
/// * `file` - Optional path to a target list JSON file
/// * `specs` - Optional command-line target specifications (URL#Name)
fn load_targets(file: Option<PathBuf>, specs: Vec<String>) -> iplens::Result<Vec<ProbeTarget>> {
    if !specs.is_empty() {
        let list = ConfigLoader::from_args(specs)?;
        return Ok(list.targets);
    }

    if let Some(path) = file {
        let list = ConfigLoader::load_from_file(path)?;
        return Ok(list.targets);
    }

    Ok(ConfigLoader::load_or_builtin().targets)
}

/// Run the dashboard server.
async fn run_serve(config: ServerConfig, file: Option<PathBuf>) -> iplens::Result<()> {
    let targets = load_targets(file, Vec::new())?;
    tracing::info!("Loaded {} resolver targets", targets.len());

    let addr = config.addr();
    let state = Arc::new(AppState::new(config, targets)?);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("iplens listening on http://{}", listener.local_addr()?);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Run a one-shot latency probe and output results.
///
/// # Arguments
///
/// * `file` - Optional target list file
/// * `specs` - Optional custom targets (URL#Name)
/// * `timeout` - Per-probe deadline in seconds
/// * `sort_by_latency` - Whether to sort results by latency
/// * `format` - Output format
async fn run_probe(
    file: Option<PathBuf>,
    specs: Vec<String>,
    timeout: u64,
    sort_by_latency: bool,
    format: OutputFormat,
) -> iplens::Result<()> {
    let targets = load_targets(file, specs)?;

    println!("Probing {} resolvers...\n", targets.len());

    let prober = LatencyProber::with_timeout(Duration::from_secs(timeout))?;
    let mut results = prober.measure_all(&targets).await;

    // Sort if requested
    if sort_by_latency {
        results.sort_by(|a, b| {
            let a_lat = a.latency_ms.unwrap_or(f64::MAX);
            let b_lat = b.latency_ms.unwrap_or(f64::MAX);
            a_lat.partial_cmp(&b_lat).unwrap_or(std::cmp::Ordering::Equal)
        });
    }

    // Output results
    match format {
        OutputFormat::Table => print_results_table(&results),
        OutputFormat::Json => print_results_json(&results),
        OutputFormat::Csv => print_results_csv(&results),
    }

    // Summary
    let summary = LatencyProber::summarize(&results);
    println!("\n=== Summary ===");
    println!("Targets: {}", summary.total);
    println!("Ok: {}", summary.ok);
    println!("Failed/timeout: {}", summary.failed + summary.timeout);
    if let Some(avg) = summary.avg_latency {
        println!("Average latency: {:.2} ms", avg);
    }
    if let Some(min) = summary.min_latency {
        println!("Lowest latency: {:.2} ms", min);
    }
    if let Some(max) = summary.max_latency {
        println!("Highest latency: {:.2} ms", max);
    }

    Ok(())
}

/// Print results in table format.
fn print_results_table(results: &[ProbeResult]) {
    println!("{:<4} {:<14} {:<12} {:<10}", "#", "Name", "Latency", "Status");
    println!("{}", "-".repeat(44));

    for (idx, r) in results.iter().enumerate() {
        let latency = r
            .latency_ms
            .map(|l| format!("{:.1} ms", l))
            .unwrap_or_else(|| "-".to_string());

        let status = if r.ok {
            r.http_status.map_or(String::new(), |s| s.to_string())
        } else {
            r.error.clone().unwrap_or_else(|| "failed".to_string())
        };

        println!(
            "{:<4} {:<14} {:<12} {:<10}",
            idx + 1,
            r.target.name,
            latency,
            status
        );
    }
}

/// Print results in JSON format.
fn print_results_json(results: &[ProbeResult]) {
    let json = serde_json::to_string_pretty(results).unwrap();
    println!("{json}");
}

/// Print results in CSV format.
fn print_results_csv(results: &[ProbeResult]) {
    println!("#Idx,Name,URL,Latency(ms),Ok");
    for (idx, r) in results.iter().enumerate() {
        let latency = r.latency_ms.unwrap_or(-1.0);
        println!(
            "{},{},{},{:.1},{}",
            idx + 1,
            r.target.name,
            r.target.url,
            latency,
            r.ok
        );
    }
}

/// List resolver targets.
fn run_list(file: Option<PathBuf>) -> iplens::Result<()> {
    let targets = load_targets(file, Vec::new())?;

    println!("Resolver targets ({} total):\n", targets.len());
    println!("{:<4} {:<14} {:<48}", "#", "Name", "URL");
    println!("{}", "-".repeat(66));

    for (idx, t) in targets.iter().enumerate() {
        println!("{:<4} {:<14} {:<48}", idx + 1, t.name, t.url);
    }

    Ok(())
}

/// Export the resolver target list to a JSON file.
fn run_export(output: PathBuf) -> iplens::Result<()> {
    let list = ConfigLoader::load_or_builtin();
    let json = serde_json::to_string_pretty(&list)?;
    std::fs::write(&output, json)?;
    println!("Exported to: {}", output.display());
    Ok(())
}

/// Main entry point for the iplens application.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (cli, verbose) = iplens::cli::parse_verbose();
    setup_logging(verbose, cli.quiet);

    tracing::info!("iplens starting...");

    match cli.command {
        Some(Commands::Serve {
            port,
            bind,
            file,
            ip_api,
            timeout,
        }) => {
            let config = ServerConfig {
                bind,
                port,
                ip_api,
                timeout_secs: timeout,
            };
            run_serve(config, file).await?;
        }

        Some(Commands::Probe {
            file,
            targets,
            timeout,
            sort_by_latency,
        }) => {
            run_probe(file, targets, timeout, sort_by_latency, cli.format).await?;
        }

        Some(Commands::List { file }) => {
            run_list(file)?;
        }

        Some(Commands::Export { output }) => {
            run_export(output)?;
        }

        None => {
            // Default to serving the dashboard
            run_serve(ServerConfig::default(), None).await?;
        }
    }

    Ok(())
}

//! CLI entrypoint for kbridge
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use colored::Colorize;
use kbridge_application::ActionRouter;
use kbridge_infrastructure::{ConfigLoader, FileConfig, KnowledgeBaseTool, Severity, build_transport};
use kbridge_presentation::{Cli, ConsoleFormatter, TextPresenter};
use std::process::ExitCode;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // stdout carries the tool result; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting kbridge");

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        let config = load_config(&cli)?;
        println!();
        println!("{}", "Effective configuration:".bold());
        println!("{}", config.to_display_toml()?);
        return Ok(ExitCode::SUCCESS);
    }

    let config = load_config(&cli)?;

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Error => eprintln!("{} {}", "error:".red().bold(), issue.message),
            Severity::Warning => eprintln!("{} {}", "warning:".yellow().bold(), issue.message),
        }
    }

    // === Dependency Injection ===
    let transport = build_transport(&config.backend)?;
    let router = ActionRouter::new(
        transport,
        Arc::new(TextPresenter::new()),
        config.router_params(),
    );
    let tool = KnowledgeBaseTool::new(router);

    if cli.schema {
        println!("{}", serde_json::to_string_pretty(&tool.schema())?);
        return Ok(ExitCode::SUCCESS);
    }

    if config.has_errors() {
        bail!("Configuration is invalid. Run with --show-config to inspect it.");
    }

    let args = cli
        .to_arguments()
        .map_err(|e| anyhow!("--args is not valid JSON: {}", e))?;
    debug!("Arguments: {:?}", args);

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    let result = tool.execute(&cancel, &args).await;

    if cli.json {
        println!("{}", ConsoleFormatter::format_json(&result));
    } else {
        println!("{}", ConsoleFormatter::format(&result));
        if cli.verbose > 0 {
            eprintln!("{}", ConsoleFormatter::format_summary(&result));
        }
    }

    Ok(if result.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    if cli.no_config {
        return Ok(ConfigLoader::load_defaults());
    }
    ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow!("Failed to load config: {}", e))
}

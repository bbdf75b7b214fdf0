//! postdraft - LinkedIn post draft generator
//!
//! CLI entry point: serves the form UI or runs a one-off generation.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use colored::Colorize;
use eyre::{Context, Result, eyre};
use tracing::{debug, info};

use postdraft::cli::{Cli, Command};
use postdraft::config::Config;
use postdraft::domain::{Audience, GenerationRequest, Tone};
use postdraft::export::write_export;
use postdraft::generator::PostGenerator;
use postdraft::server::run_serve;

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Logging isn't initialized yet, so nothing here can be traced
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("postdraft")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Priority: CLI --log-level > config file > default (INFO)
    let level = match cli_log_level.or(config_log_level) {
        Some(s) => match s.to_uppercase().as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
                tracing::Level::INFO
            }
        },
        None => tracing::Level::INFO,
    };

    let log_file = fs::File::create(log_dir.join("postdraft.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load log level from config file early (before full config load)
    let config_log_level = Config::load_log_level(cli.config.as_ref());

    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    info!(model = %config.llm.model, "postdraft loaded config");

    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command {
        Some(Command::Serve { bind, port }) => {
            debug!(?bind, ?port, "main: matched Serve command");
            cmd_serve(&config, bind, port).await
        }
        Some(Command::Generate {
            topic,
            tone,
            audience,
            length,
            count,
            export,
        }) => {
            debug!(%topic, %tone, %audience, %length, %count, ?export, "main: matched Generate command");
            let request = GenerationRequest {
                topic,
                tone,
                audience,
                length,
                post_count: count,
            };
            cmd_generate(&config, request, export).await
        }
        None => {
            debug!("main: no command specified, serving");
            cmd_serve(&config, None, None).await
        }
    }
}

/// Serve the form UI and the generate endpoint
async fn cmd_serve(config: &Config, bind: Option<String>, port: Option<u16>) -> Result<()> {
    let bind = bind.unwrap_or_else(|| config.server.bind.clone());
    let port = port.unwrap_or(config.server.port);
    debug!(%bind, %port, "cmd_serve: called");

    let generator = Arc::new(PostGenerator::from_config(config).context("Failed to build generator")?);
    println!("Serving postdraft on http://{}:{}", bind, port);
    run_serve(generator, &bind, port).await
}

/// Generate drafts for one topic, print them as cards and optionally export
async fn cmd_generate(config: &Config, request: GenerationRequest, export: Option<PathBuf>) -> Result<()> {
    debug!(topic = %request.topic, "cmd_generate: called");
    if request.is_topic_empty() {
        return Err(eyre!("Topic is required"));
    }

    let generator = PostGenerator::from_config(config).context("Failed to build generator")?;

    let started_at = chrono::Local::now();
    println!(
        "{} {} ({}, {})",
        "Generating posts for".dimmed(),
        request.topic.bold(),
        describe_tone(request.tone),
        describe_audience(request.audience)
    );

    let result = generator
        .generate(request)
        .await
        .context("Failed to generate posts")?;

    let elapsed = chrono::Local::now() - started_at;

    for (index, post) in result.posts.iter().enumerate() {
        println!();
        println!("{}", format!("Post Option {}", index + 1).cyan().bold());
        println!("{}", "-".repeat(40).dimmed());
        println!("{}", post);
    }

    println!();
    println!(
        "Generation took {:.1} seconds.",
        elapsed.num_milliseconds() as f64 / 1000.0
    );
    println!("Estimated tokens used: {}", result.estimated_tokens);

    if let Some(path) = export {
        write_export(&path, &result.posts, started_at)?;
        println!("Exported {} posts to {}", result.posts.len(), path.display().to_string().green());
    }

    Ok(())
}

fn describe_tone(tone: Tone) -> &'static str {
    match tone {
        Tone::Professional => "Professional",
        Tone::Casual => "Casual",
        Tone::Inspirational => "Inspirational",
    }
}

fn describe_audience(audience: Audience) -> &'static str {
    match audience {
        Audience::General => "General",
        Audience::Tech => "Tech Professionals",
        Audience::Business => "Business Leaders",
    }
}

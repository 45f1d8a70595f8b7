//! Folio CLI
//!
//! Render, preview, and exercise a portfolio page from the terminal.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_core::{ContactFields, ContactForm, DeliveryError, FormTimings, SimulatedDelivery};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use folio_cli::config::{FolioConfig, CONFIG_FILE};
use folio_cli::page::{HeroLines, HomePage};
use folio_cli::render;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Portfolio page renderer", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to ./folio.toml, then sample content)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every section of the page once
    Show {
        /// Dump the loaded content as JSON instead
        #[arg(long)]
        json: bool,
    },

    /// Run the typing animations live
    Preview {
        /// How long to run
        #[arg(short, long, default_value = "15")]
        seconds: u64,

        /// Redraws per second
        #[arg(long, default_value = "30", value_parser = clap::value_parser!(u32).range(1..=240))]
        fps: u32,
    },

    /// Submit the contact form and follow its status
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        message: String,

        /// Make the simulated delivery fail
        #[arg(long)]
        fail: bool,
    },

    /// Write a sample folio.toml
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Show { json } => cmd_show(cli.config.as_deref(), json),
        Commands::Preview { seconds, fps } => {
            let config = FolioConfig::discover(cli.config.as_deref())?;
            let page = HomePage::mount(
                config.portfolio,
                &config.timings,
                SimulatedDelivery::new(),
            )?;
            runtime()?.block_on(run_preview(page, Duration::from_secs(seconds), fps))
        }
        Commands::Contact {
            name,
            email,
            message,
            fail,
        } => {
            let config = FolioConfig::discover(cli.config.as_deref())?;
            let delivery = if fail {
                SimulatedDelivery::failing(DeliveryError::Unavailable(
                    "simulated outage".to_string(),
                ))
            } else {
                SimulatedDelivery::new()
            };
            let fields = ContactFields::new(name, email, message);
            runtime()?.block_on(run_contact(
                delivery,
                config.timings.form_timings(),
                fields,
            ))
        }
        Commands::Init { force } => cmd_init(cli.config.as_deref(), force),
    }
}

/// Single-threaded runtime; every animation step runs on one thread
fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("Failed to start runtime")
}

fn cmd_show(path: Option<&Path>, json: bool) -> Result<()> {
    let config = FolioConfig::discover(path)?;
    let portfolio = &config.portfolio;

    if json {
        println!("{}", serde_json::to_string_pretty(portfolio)?);
        return Ok(());
    }

    let lines = HeroLines::settled(portfolio);
    let form = ContactForm::new(SimulatedDelivery::new(), FormTimings::default()).snapshot();
    print!("{}", render::render_page(portfolio, &lines, &form));
    Ok(())
}

async fn run_preview(
    mut page: HomePage<SimulatedDelivery>,
    duration: Duration,
    fps: u32,
) -> Result<()> {
    let frame = Duration::from_secs(1) / fps;
    let mut interval = tokio::time::interval(frame);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    info!("Previewing for {}s at {} fps", duration.as_secs(), fps);

    let start = Instant::now();
    let mut last = start;
    let mut stdout = io::stdout();

    loop {
        let now = interval.tick().await;
        page.advance(now - last);
        last = now;

        let lines = page.lines();
        write!(
            stdout,
            "\x1b[2K\r{:<24} | {:<48} | I specialize in {}",
            lines.name, lines.tagline, lines.skill
        )?;
        stdout.flush()?;

        if now - start >= duration {
            break;
        }
    }

    page.unmount();
    writeln!(stdout)?;
    Ok(())
}

async fn run_contact(
    delivery: SimulatedDelivery,
    timings: FormTimings,
    fields: ContactFields,
) -> Result<()> {
    fields.validate()?;

    let mut form = ContactForm::new(delivery, timings);
    let start = Instant::now();
    let report = |form: &ContactForm<SimulatedDelivery>| {
        let status = form.status();
        let notice = status.status_message().unwrap_or("");
        println!(
            "[{:>5}ms] {:<10} {:<15} {}",
            start.elapsed().as_millis(),
            status,
            status.button_label(),
            notice
        );
    };

    form.submit_fields(fields)?;
    report(&form);

    while let Some(wait) = form.time_to_next_event() {
        tokio::time::sleep(wait).await;
        form.advance(wait);
        report(&form);
    }

    if let Some(error) = form.last_error() {
        info!("Delivery failed: {}", error);
    }
    Ok(())
}

fn cmd_init(path: Option<&Path>, force: bool) -> Result<()> {
    let path = path.unwrap_or_else(|| Path::new(CONFIG_FILE));
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite it.",
            path.display()
        );
    }

    let content = FolioConfig::sample().to_toml()?;
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_preview_fps_bounds() {
        let cli = Cli::try_parse_from(["folio", "preview", "--fps", "60"]).unwrap();
        assert!(matches!(cli.command, Commands::Preview { fps: 60, .. }));

        assert!(Cli::try_parse_from(["folio", "preview", "--fps", "0"]).is_err());
        assert!(Cli::try_parse_from(["folio", "preview", "--fps", "2000000000"]).is_err());
    }
}

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use sylva_cli::output::{config_checks, render_config_checks, render_stage_outcome, render_stats};
use sylva_lib::report::{DEFAULT_REPORTS_DIR, DEFAULT_STAGING_DIR};
use sylva_lib::{stage_latest_report, zone_overview, SylvaConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "SYLVA fire-zone utilities")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Copy the newest daily report to the static site data directory.
    UpdateReport {
        /// Directory holding dated report files.
        #[arg(long, default_value = DEFAULT_REPORTS_DIR)]
        reports_dir: PathBuf,
        /// Directory the report is staged into as `latest_report.json`.
        #[arg(long, default_value = DEFAULT_STAGING_DIR)]
        target_dir: PathBuf,
    },
    /// Report which credentials are configured, without printing them.
    CheckConfig {
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Run the zones query and print the statistics.
    Zones {
        /// Emit the statistics as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::UpdateReport {
            reports_dir,
            target_dir,
        } => handle_update_report(reports_dir, target_dir),
        Command::CheckConfig { json } => handle_check_config(json),
        Command::Zones { json } => handle_zones(json),
    }
}

fn handle_update_report(reports_dir: PathBuf, target_dir: PathBuf) -> Result<()> {
    let outcome = stage_latest_report(&reports_dir, &target_dir).with_context(|| {
        format!(
            "failed to stage the latest report from {} into {}",
            reports_dir.display(),
            target_dir.display()
        )
    })?;
    println!("{}", render_stage_outcome(&outcome));
    Ok(())
}

fn handle_check_config(json: bool) -> Result<()> {
    let checks = config_checks(&SylvaConfig::from_env());
    if json {
        let rendered =
            serde_json::to_string_pretty(&checks).context("failed to encode configuration report")?;
        println!("{}", rendered);
    } else {
        print!("{}", render_config_checks(&checks));
    }
    Ok(())
}

fn handle_zones(json: bool) -> Result<()> {
    let config = SylvaConfig::from_env();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")?;

    let data = runtime
        .block_on(zone_overview(&config))
        .context("failed to run the zones query")?;

    if json {
        let rendered =
            serde_json::to_string_pretty(&data.stats).context("failed to encode zone statistics")?;
        println!("{}", rendered);
    } else {
        print!("{}", render_stats(&data.stats));
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

// Entry point: prints cast windows and cost simulations, renders both charts.
use std::fs;
use std::io::{self, Write};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use magery_gains::cli::Args;
use magery_gains::config::GainsConfig;
use magery_gains::error::Result;
use magery_gains::render::{self, BitmapRenderer};
use magery_gains::report;

fn main() {
    // Logs go to stderr; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("magery_gains=info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("magery-gains failed: {err}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => GainsConfig::load_or_default(path),
        None => GainsConfig::default(),
    };
    let gain_factor = config.model.gain_factor;
    info!(gain_factor, "starting");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    report::write_circle_bounds(&mut out)?;

    if !args.no_charts {
        let out_dir = args
            .out_dir
            .clone()
            .unwrap_or_else(|| config.charts.out_dir.clone());
        fs::create_dir_all(&out_dir)?;
        render::render_all(&BitmapRenderer, &config.charts, gain_factor, &out_dir)?;
    }

    report::write_simulations(&mut out, &report::default_scenarios(), gain_factor)?;
    out.flush()?;
    Ok(())
}

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about)]
pub struct Args {
    /// Path to config TOML (created with commented defaults if missing)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory for chart images (overrides config)
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Print the report only, without rendering charts
    #[arg(long, default_value_t = false)]
    pub no_charts: bool,
}

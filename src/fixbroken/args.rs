use clap::Parser;
use fixbroken::config::{ReconcilePolicy, DEFAULT_API_URL};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fixbroken", version)]
#[command(about = "Repair Mosaic file records whose files moved on disk", long_about = None)]
pub struct Cli {
    /// Mosaic API token
    pub token: String,

    /// Project id
    pub project_id: u64,

    /// Project directory on the shared filesystem
    pub project_dir: PathBuf,

    /// Base URL of the Mosaic API
    #[arg(long, env = "MOSAIC_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Which mismatches count as broken
    #[arg(long, value_enum, default_value_t = ReconcilePolicy::Metadata)]
    pub policy: ReconcilePolicy,

    /// Report repairs without sending them
    #[arg(long)]
    pub dry_run: bool,

    /// Only reconcile this sample
    #[arg(long)]
    pub sample: Option<u64>,

    /// Only reconcile the first N samples
    #[arg(long)]
    pub limit: Option<usize>,

    /// HTTP request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

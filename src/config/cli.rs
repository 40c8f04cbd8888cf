use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "techforge-server")]
#[command(about = "Marketing site backend: project catalog and contact inquiries")]
pub struct CliArgs {
    /// Optional TOML file; environment variables override it
    #[arg(short, long)]
    pub config: Option<String>,

    /// Listen port (overrides PORT)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Directory holding inquiries.json (overrides DATA_DIR)
    #[arg(long)]
    pub data_dir: Option<String>,

    /// Built single-page app to serve (overrides DIST_DIR)
    #[arg(long)]
    pub dist_dir: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

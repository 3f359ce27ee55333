use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "showcase")]
#[command(about = "Terminal client for the Rising Stars video contest", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Backend base URL. Overrides SHOWCASE_API_URL and the config file.
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Data directory for config and credentials. Overrides SHOWCASE_PATH.
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check backend reachability and exit
    Health,
}

pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "ml-providers")]
#[command(about = "Inspect and evaluate license and capability gates of the ML providers")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print every gated operation with the capabilities it requires
    Operations,

    /// Evaluate the license and capability checks for one operation
    Check {
        #[arg(long, default_value = "./ml-policy.toml")]
        config: String,

        #[arg(long)]
        user: Option<String>,

        #[arg(long = "role", value_delimiter = ',')]
        roles: Vec<String>,

        #[arg(long)]
        space: Option<String>,

        /// Operation name, e.g. getModule or get-module
        operation: String,
    },
}

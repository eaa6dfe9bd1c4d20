use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "small-calc")]
#[command(about = "A small calculator tool for basic arithmetic")]
pub struct CliConfig {
    #[arg(long, help = "Print the demo report as JSON instead of labeled lines")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

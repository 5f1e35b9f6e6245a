use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "globalinfo")]
#[command(version)]
#[command(about = "Read values from a lazily evaluated namespace")]
pub struct Cli {
    /// Namespace definition (JSON)
    #[arg(short, long, global = true, default_value = "globalinfo.json")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the current value of one entry
    Get {
        key: String,

        /// Choose a candidate for an alternatives entry
        #[arg(short, long, value_name = "PATH=CANDIDATE")]
        select: Vec<String>,
    },

    /// Compute every entry once and print them as a JSON object
    List {
        /// Choose a candidate for an alternatives entry
        #[arg(short, long, value_name = "PATH=CANDIDATE")]
        select: Vec<String>,
    },

    /// List entry names and selector paths
    Keys,

    /// Print version information
    Version,
}

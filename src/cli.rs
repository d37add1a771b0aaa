use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(name = "start-sit-advisor", author, version, about = "Fantasy football start/sit advisor")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Recommend who to start among two or more players
    Compare {
        /// Comma-separated player names, e.g. "Bijan Robinson, Jahmyr Gibbs"
        players: String,
        /// Print the raw JSON payload
        #[arg(long)]
        json: bool,
    },
    /// Rank defenses by points allowed per position
    Analyze {
        /// First week (defaults to 1)
        #[arg(long)]
        from: Option<u32>,
        /// Last week (defaults to the last completed week)
        #[arg(long)]
        to: Option<u32>,
    },
    /// Find players by name
    Search {
        name: String,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

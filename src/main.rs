use anyhow::Result;

use start_sit_advisor::cli::Command;
use start_sit_advisor::{
    handle_analyze, handle_compare, handle_completions, handle_search, handle_serve, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Compare { players, json } => handle_compare(players, *json),
        Command::Analyze { from, to } => handle_analyze(*from, *to),
        Command::Search { name } => handle_search(name),
        Command::Completions { shell } => handle_completions(*shell),
    }
}

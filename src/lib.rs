pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fetchers;
pub mod http;
pub mod scoring;
pub mod services;

use anyhow::{Result, bail};
use clap::{CommandFactory, Parser};
use cli::Cli;
use colored::Colorize;
use std::sync::Arc;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::fetchers::{DataProvider, LiveProvider};
use crate::scoring::{Comparison, DataStatus};
use crate::services::comparison::{ComparisonService, split_names};
use crate::services::defense::DefenseService;
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::from_env();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_compare(players: &str, json: bool) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::from_env();
        let provider = Arc::new(LiveProvider::new(&config.provider)?);
        let service = ComparisonService::new(provider, config.scoring);

        let comparison = service.compare(&split_names(players)).await?;
        if json {
            println!("{}", serde_json::to_string_pretty(&comparison)?);
        } else {
            print_comparison(&comparison);
        }
        Ok(())
    })
}

pub fn handle_analyze(from: Option<u32>, to: Option<u32>) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::from_env();
        let provider = Arc::new(LiveProvider::new(&config.provider)?);
        let season = provider.fetch_current_week().await?;

        let Some(range) = season.completed_weeks(from, to) else {
            bail!(
                "Invalid week range {}-{} (last completed week is {})",
                from.unwrap_or(1),
                to.unwrap_or_else(|| season.last_completed_week()),
                season.last_completed_week()
            );
        };

        let weeks: Vec<u32> = range.collect();
        let report = DefenseService::new(provider, config.scoring)
            .analyze(&season.season, &weeks)
            .await;
        println!("{}", serde_json::to_string_pretty(&report)?);
        Ok(())
    })
}

pub fn handle_search(name: &str) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::from_env();
        let provider = LiveProvider::new(&config.provider)?;
        let roster = provider.fetch_roster().await?;

        let matches = domain::search(&roster, name);
        if matches.is_empty() {
            bail!("Player not found: {}", name);
        }
        for player in matches {
            let status = if player.active { "active".green() } else { "inactive".red() };
            println!(
                "{:<28} {:<4} {:<10} {}",
                player.name(),
                player.position.as_ref().map(|p| p.as_str()).unwrap_or("-"),
                player.team_label(),
                status
            );
        }
        Ok(())
    })
}

pub fn handle_completions(shell: clap_complete::Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

fn print_comparison(comparison: &Comparison) {
    println!("{} {}", "Start:".bold(), comparison.recommendation.green().bold());
    println!("{}\n", comparison.reason);

    for (rank, player) in comparison.comparison.iter().enumerate() {
        let score = format!("{:>4}", player.score);
        let score = if rank == 0 { score.green() } else { score.normal() };
        println!(
            "{} {:<24} {:<3} {:<10} avg {:>5.1} over {} wk  {}",
            score,
            player.name,
            player.position,
            player.team,
            player.recent_avg,
            player.games_played,
            player.matchup
        );
        if player.data_status == DataStatus::Limited {
            println!("     {}", "Limited data - stats may be updating".yellow());
        }
    }
}

//! Tripline CLI Application
//!
//! Command-line interface for planning a trip day by day.

mod args;
mod cli;
mod handlers;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{DayArgs, DirectionArg};
use handlers::Cli;
use log::{debug, info};
use renderer::TerminalRenderer;
use tripline_core::{ItineraryBuilder, Settings};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        backend,
        remote_url,
        timeout_secs,
        config,
        no_color,
        command,
    } = Args::parse();

    let mut settings = Settings::load(config.as_deref()).context("Failed to load settings")?;
    if let Some(backend) = backend {
        settings.backend = backend.into();
    }
    if database_file.is_some() {
        settings.database_file = database_file;
    }
    if remote_url.is_some() {
        settings.remote.url = remote_url;
    }
    if let Some(timeout_secs) = timeout_secs {
        settings.remote.timeout_secs = timeout_secs;
    }
    debug!("Effective settings: {settings:?}");

    let default_day = u8::from(settings.default_day().context("Invalid default_day")?);

    let itinerary = ItineraryBuilder::from_settings(&settings)
        .build()
        .await
        .context("Failed to initialize itinerary")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Tripline started with the {} backend", itinerary.backend());

    let cli = Cli::new(itinerary, renderer);
    match command {
        Some(List(args)) => cli.list_places(&args.into_params(default_day)).await,
        Some(Add(args)) => cli.add_place(&args.into_params(default_day)).await,
        Some(Delete(args)) => cli.delete_place(&args.into_params(default_day)).await,
        Some(Move(args)) => cli.move_place(&args.into_params(default_day)).await,
        Some(Up(args)) => {
            cli.move_place(&args.into_move(DirectionArg::Up).into_params(default_day))
                .await
        }
        Some(Down(args)) => {
            cli.move_place(&args.into_move(DirectionArg::Down).into_params(default_day))
                .await
        }
        Some(Route(args)) => cli.show_route(&args.into_params(default_day)).await,
        Some(Map(args)) => {
            let (query, output) = args.into_params(default_day);
            cli.write_map(&query, &output).await
        }
        Some(Overview) => cli.show_overview().await,
        None => {
            cli.list_places(&DayArgs { day: None }.into_params(default_day))
                .await
        }
    }
}

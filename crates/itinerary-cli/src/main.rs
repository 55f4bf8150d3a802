//! Itinerary CLI Application
//!
//! Command-line interface for the itinerary trip planner.

mod args;
mod cli;
mod renderer;

use anyhow::Result;
use args::{Args, Commands, TripCommands};
use clap::Parser;
use cli::Cli;
use itinerary_core::SessionBuilder;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        data_dir,
        no_color,
        command,
    } = Args::parse();

    let builder = SessionBuilder::new().with_store_dir(data_dir);
    let cli = Cli::new(builder, TerminalRenderer::new(!no_color));

    info!("Itinerary started");

    match command {
        Some(Trip { command }) => cli.handle_trip_command(command),
        Some(Day { command }) => cli.handle_day_command(command),
        Some(Item { command }) => cli.handle_item_command(command),
        Some(Pool { command }) => cli.handle_pool_command(command),
        Some(Event { command }) => cli.handle_event_command(command),
        None => cli.handle_trip_command(TripCommands::Show),
    }
}

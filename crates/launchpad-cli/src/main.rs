//! Launchpad CLI Application
//!
//! Command-line interface and HTTP server for the Launchpad workspace
//! generator.

mod args;
mod cli;
mod renderer;
mod server;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use server::{run_http_server, ServerOptions};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { no_color, command } = Args::parse();

    let cli = Cli::new(TerminalRenderer::new(!no_color));

    info!("Launchpad started");

    match command {
        Serve(args) => {
            info!("Starting Launchpad HTTP server");
            run_http_server(ServerOptions {
                bind: args.bind,
                include_details: args.expose_error_details || cfg!(debug_assertions),
            })
            .await
            .context("HTTP server failed")
        }
        Generate(args) => cli.generate(args).await,
        Preview(args) => cli.preview(args),
        Dashboard(args) => cli.dashboard(&args),
        Tools => cli.tools(),
        Schema => cli.schema(),
    }
}

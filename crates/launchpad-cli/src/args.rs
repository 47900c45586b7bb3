use clap::{Parser, Subcommand};

use crate::cli::{AnswersArgs, DashboardArgs, PreviewArgs, ServeArgs};

/// Turn project kickoff answers into a structured Notion workspace
///
/// Launchpad collects a project's name, description, stage, team size and
/// tools, builds a ready-made Notion page from them (overview, shortcuts,
/// rituals, playbook, metrics checklist) and creates it through the Notion
/// API. Credentials come from `NOTION_API_KEY` and the parent from
/// `NOTION_DATABASE_ID` or `NOTION_PARENT_PAGE_ID`.
#[derive(Parser)]
#[command(version, about, name = "launchpad")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Launchpad CLI
///
/// - `serve`: HTTP endpoint for the wizard front end plus the dashboard
/// - `generate` / `preview`: build a page from flags, with or without
///   creating it in Notion
/// - `dashboard`, `tools`, `schema`: read-only helpers
#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),
    /// Validate answers and create the Notion page
    #[command(alias = "g")]
    Generate(AnswersArgs),
    /// Print the page that would be created, without calling Notion
    #[command(alias = "p")]
    Preview(PreviewArgs),
    /// Render the dashboard for a query string
    Dashboard(DashboardArgs),
    /// List the tools that can be connected
    Tools,
    /// Print the JSON schema of the answers payload
    Schema,
}

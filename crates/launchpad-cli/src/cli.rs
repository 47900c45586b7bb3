//! Command argument wrappers and their handlers.
//!
//! Each command's clap structure converts into core types explicitly, so
//! the core crate stays free of clap attributes:
//!
//! ```text
//! User Input → CLI Args (clap) → ProjectAnswers → Wizard / Submitter
//! ```

use std::{fs, path::PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use launchpad_core::{
    build_payload_today, DashboardQuery, DashboardView, NotionClient, PayloadPreview, ProcessEnv,
    ProjectAnswers, ProjectStage, SubmissionFailure, Submitter, TeamSize, ToolCatalog, Wizard,
    TOOL_CATALOG,
};
use log::info;

use crate::renderer::TerminalRenderer;

/// Project stage accepted on the command line
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum StageArg {
    /// Validating the problem and the target users
    Discovery,
    /// Building the first usable release
    Mvp,
    /// Going to market
    Launch,
    /// Growing a product that already works
    Scale,
}

impl From<StageArg> for ProjectStage {
    fn from(val: StageArg) -> Self {
        match val {
            StageArg::Discovery => ProjectStage::Discovery,
            StageArg::Mvp => ProjectStage::Mvp,
            StageArg::Launch => ProjectStage::Launch,
            StageArg::Scale => ProjectStage::Scale,
        }
    }
}

fn parse_tool_link(value: &str) -> std::result::Result<(String, String), String> {
    match value.split_once('=') {
        Some((tool, url)) if !tool.trim().is_empty() => {
            Ok((tool.trim().to_string(), url.trim().to_string()))
        }
        _ => Err(format!("expected TOOL=URL, got '{value}'")),
    }
}

/// Wizard answers given as flags
///
/// Answers start from the wizard defaults, or from a JSON file passed with
/// `--answers`; any flag given overrides the matching field.
#[derive(Args)]
pub struct AnswersArgs {
    #[arg(
        long,
        value_name = "FILE",
        help = "JSON file with the answers, in the same shape the HTTP endpoint accepts"
    )]
    pub answers: Option<PathBuf>,
    #[arg(short, long, help = "Project name, used as the page title")]
    pub name: Option<String>,
    #[arg(short, long, help = "Short summary of the project")]
    pub description: Option<String>,
    #[arg(short, long, help = "Current project stage")]
    pub stage: Option<StageArg>,
    #[arg(long, help = "Number of people on the team")]
    pub team_size: Option<String>,
    #[arg(
        short,
        long,
        value_delimiter = ',',
        help = "Tool ids to connect as comma-separated list (see `launchpad tools`)"
    )]
    pub tools: Option<Vec<String>>,
    #[arg(
        long = "tool-link",
        value_name = "TOOL=URL",
        value_parser = parse_tool_link,
        help = "Link to use for a tool instead of its default URL; may repeat"
    )]
    pub tool_links: Vec<(String, String)>,
}

impl AnswersArgs {
    /// Merges the flags over the base answers.
    pub fn into_answers(self) -> Result<ProjectAnswers> {
        let mut answers = match &self.answers {
            Some(path) => {
                let body = fs::read(path)
                    .with_context(|| format!("Failed to read answers from {}", path.display()))?;
                launchpad_core::parse_answers(&body)
                    .with_context(|| format!("Invalid answers in {}", path.display()))?
            }
            None => ProjectAnswers::wizard_defaults(),
        };

        if let Some(name) = self.name {
            answers.project_name = name;
        }
        if let Some(description) = self.description {
            answers.description = description;
        }
        if let Some(stage) = self.stage {
            answers.project_stage = Some(stage.into());
        }
        if let Some(team_size) = self.team_size {
            answers.team_size = TeamSize::new(team_size);
        }
        if let Some(tools) = self.tools {
            answers.tools.clear();
            for tool in tools.into_iter().map(|t| t.trim().to_string()) {
                if !tool.is_empty() && !answers.tools.contains(&tool) {
                    answers.tools.push(tool);
                }
            }
        }
        for (tool, url) in self.tool_links {
            answers.tool_links.insert(tool, Some(url));
        }
        Ok(answers)
    }
}

/// Preview the generated page
#[derive(Args)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub answers: AnswersArgs,
    #[arg(long, help = "Print the raw Notion request body instead of markdown")]
    pub json: bool,
}

/// Render the dashboard echo
#[derive(Args)]
pub struct DashboardArgs {
    #[arg(
        default_value = "",
        help = "Query string, e.g. 'projectName=Apollo&projectStage=mvp&tools=github,slack'"
    )]
    pub query: String,
}

/// Serve the submission endpoint and dashboard over HTTP
#[derive(Args)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1:3000", help = "Address to listen on")]
    pub bind: String,
    #[arg(
        long,
        help = "Include upstream error details in responses (always on in debug builds)"
    )]
    pub expose_error_details: bool,
}

/// Command handlers sharing one terminal renderer.
pub struct Cli {
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(renderer: TerminalRenderer) -> Self {
        Self { renderer }
    }

    /// Validates every wizard step and creates the page.
    pub async fn generate(&self, args: AnswersArgs) -> Result<()> {
        let wizard = Wizard::new(args.into_answers()?);
        let errors = wizard.validate_all();
        if !errors.is_empty() {
            let lines: Vec<String> = errors.iter().map(ToString::to_string).collect();
            bail!("Answers are incomplete:\n{}", lines.join("\n"));
        }

        let client = NotionClient::new().context("Failed to initialize Notion client")?;
        let submitter = Submitter::new(client, ProcessEnv);
        info!("Submitting '{}'", wizard.answers().display_name());

        match submitter.submit_answers(wizard.answers()).await {
            Ok(page) => self.renderer.render(&page.to_string()),
            Err(e) => bail!(
                "{}",
                SubmissionFailure::new(&e).with_details(true).to_string().trim_end()
            ),
        }
    }

    /// Builds the page locally and prints it.
    pub fn preview(&self, args: PreviewArgs) -> Result<()> {
        let payload = build_payload_today(&args.answers.into_answers()?);
        if args.json {
            let json = serde_json::to_string_pretty(&payload)
                .context("Failed to serialize payload")?;
            println!("{json}");
            return Ok(());
        }
        self.renderer.render(&PayloadPreview(&payload).to_string())
    }

    pub fn dashboard(&self, args: &DashboardArgs) -> Result<()> {
        let query = DashboardQuery::parse(&args.query);
        self.renderer.render(&DashboardView(&query).to_string())
    }

    pub fn tools(&self) -> Result<()> {
        self.renderer.render(&ToolCatalog(TOOL_CATALOG).to_string())
    }

    pub fn schema(&self) -> Result<()> {
        let schema = schemars::schema_for!(ProjectAnswers);
        let json = serde_json::to_string_pretty(&schema).context("Failed to serialize schema")?;
        println!("{json}");
        Ok(())
    }
}

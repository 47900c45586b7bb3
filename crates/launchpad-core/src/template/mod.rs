//! Fixed page template: maps [`ProjectAnswers`] to a [`NotionPayload`].
//!
//! The section sequence is fixed by the template and never reordered by
//! input. Missing or unusable answers degrade to placeholder text; the
//! builder has no failure path.
//!
//! ```text
//! divider · hero callout · Project overview · [quote] · Quick shortcuts
//! · stage focus callout · divider · Stage playbook · divider
//! · Alignment rituals · Weekly kickoff agenda · reminder callout
//! · Measurement checklist · metrics callout · divider
//! · Connected tools detail · divider
//! ```

use jiff::{civil::Date, tz::TimeZone, Timestamp};
use log::debug;

use crate::models::{
    Color, ContentBlock, HeadingLevel, NotionPayload, PageProperties, ProjectAnswers,
    ProjectStage, ResolvedTool, TextRun, ToolDescriptor,
};

#[cfg(test)]
mod tests;

const NOT_SPECIFIED: &str = "Not specified";

const NO_SHORTCUTS: &str = "Add integrations in the generator to surface launch shortcuts here.";

const NO_TOOLS_DETAIL: &str = "No tools are connected yet. Use the generator to add integrations and bring quick actions into this workspace.";

const ALIGNMENT_RITUALS: [&str; 3] = [
    "Daily standup: keep updates under two minutes and log blockers directly in this page.",
    "Weekly demo: showcase progress, capture decisions, and assign clear next steps.",
    "Monthly retro: collect wins, learnings, and experiments to try next cycle.",
];

const KICKOFF_AGENDA: [&str; 3] = [
    "Start with wins and customer insights.",
    "Review KPI shifts and discuss causes.",
    "Confirm the top priorities and owners for the week.",
];

const RITUAL_REMINDER: &str =
    "Share this workspace during rituals so decisions, owners, and notes stay in one hub.";

const MEASUREMENT_CHECKLIST: [&str; 3] = [
    "Review progress against the stage focus metric every Monday.",
    "Update the executive snapshot section with highlights and risks.",
    "Flag blockers that need leadership support and assign follow-up in the task list.",
];

const METRICS_REMINDER: &str = "Capture metrics sources here—link dashboards, embed charts, or reference the owners responsible for updates.";

/// Resolves the selected tools against the catalog.
///
/// Unknown ids are dropped. Each tool's link is the trimmed override from
/// `toolLinks`, else the catalog default, else none.
pub fn resolve_tools(answers: &ProjectAnswers) -> Vec<ResolvedTool> {
    answers
        .tools
        .iter()
        .filter_map(|id| ToolDescriptor::find(id))
        .map(|tool| ResolvedTool {
            id: tool.id.to_string(),
            name: tool.name.to_string(),
            description: tool.description.to_string(),
            url: answers
                .link_override(tool.id)
                .or_else(|| tool.default_url())
                .map(str::to_string),
        })
        .collect()
}

/// Current UTC date, the stamp used for "Generated on".
pub fn today() -> Date {
    Timestamp::now().to_zoned(TimeZone::UTC).date()
}

/// Builds the payload stamped with today's date.
pub fn build_payload_today(answers: &ProjectAnswers) -> NotionPayload {
    build_payload(answers, today())
}

/// Builds the page payload for `answers`, stamped with `generated_on`.
///
/// Deterministic for a given pair of inputs.
pub fn build_payload(answers: &ProjectAnswers, generated_on: Date) -> NotionPayload {
    let title = answers.display_name().to_string();
    let stage = answers.project_stage;
    let tools = resolve_tools(answers);
    let dropped = answers.tools.len() - tools.len();
    if dropped > 0 {
        debug!("Dropped {dropped} unknown tool id(s) from the selection");
    }

    let hero = match stage {
        Some(stage) => format!("'{title}' is currently in the {} stage.", stage.label()),
        None => format!("'{title}' workspace is ready to share."),
    };
    let focus = match stage {
        Some(stage) => format!("{} focus: {}", stage.label(), stage.focus()),
        None => ProjectStage::default().focus().to_string(),
    };
    let team_size = answers
        .team_size
        .label()
        .unwrap_or_else(|| NOT_SPECIFIED.to_string());

    let mut children = vec![
        ContentBlock::Divider,
        ContentBlock::callout(vec![TextRun::plain(hero)], Color::PurpleBackground),
        ContentBlock::heading(HeadingLevel::Two, "Project overview"),
        fact("Stage: ", stage.map_or(NOT_SPECIFIED, |s| s.label())),
        fact("Team size: ", &team_size),
        fact("Tools connected: ", &tools.len().to_string()),
        fact("Generated on: ", &generated_on.to_string()),
    ];

    let description = answers.description.trim();
    if !description.is_empty() {
        children.push(ContentBlock::Quote {
            rich_text: vec![TextRun::plain(description)],
        });
    }

    children.push(ContentBlock::heading(HeadingLevel::Two, "Quick shortcuts"));
    if tools.is_empty() {
        children.push(ContentBlock::paragraph(vec![TextRun::plain(NO_SHORTCUTS)]));
    } else {
        children.extend(tools.iter().map(quick_link));
    }

    children.push(ContentBlock::callout(
        vec![TextRun::plain(focus)],
        Color::GrayBackground,
    ));

    children.push(ContentBlock::Divider);
    children.push(ContentBlock::heading(HeadingLevel::Two, "Stage playbook"));
    children.extend(
        stage
            .unwrap_or_default()
            .playbook()
            .iter()
            .map(|task| ContentBlock::to_do(*task)),
    );

    push_rituals(&mut children);

    children.push(ContentBlock::Divider);
    children.push(ContentBlock::heading(
        HeadingLevel::Two,
        "Connected tools detail",
    ));
    if tools.is_empty() {
        children.push(ContentBlock::paragraph(vec![TextRun::plain(NO_TOOLS_DETAIL)]));
    } else {
        children.extend(tools.iter().map(tool_toggle));
    }

    children.push(ContentBlock::Divider);

    NotionPayload {
        properties: PageProperties { title },
        children,
    }
}

/// Fixed ritual and measurement sections shared by every stage.
fn push_rituals(children: &mut Vec<ContentBlock>) {
    children.push(ContentBlock::Divider);
    children.push(ContentBlock::heading(HeadingLevel::Two, "Alignment rituals"));
    children.extend(
        ALIGNMENT_RITUALS
            .iter()
            .map(|item| ContentBlock::bulleted(vec![TextRun::plain(*item)])),
    );

    children.push(ContentBlock::Toggle {
        rich_text: vec![TextRun::plain("Weekly kickoff agenda").bold()],
        children: KICKOFF_AGENDA
            .iter()
            .map(|item| ContentBlock::bulleted(vec![TextRun::plain(*item)]))
            .collect(),
    });

    children.push(ContentBlock::callout(
        vec![TextRun::plain(RITUAL_REMINDER).italic()],
        Color::YellowBackground,
    ));

    children.push(ContentBlock::heading(
        HeadingLevel::Two,
        "Measurement checklist",
    ));
    children.extend(MEASUREMENT_CHECKLIST.iter().map(|task| ContentBlock::to_do(*task)));

    children.push(ContentBlock::callout(
        vec![TextRun::plain(METRICS_REMINDER)],
        Color::GrayBackground,
    ));
}

fn fact(label: &str, value: &str) -> ContentBlock {
    ContentBlock::bulleted(vec![TextRun::plain(label).bold(), TextRun::plain(value)])
}

fn quick_link(tool: &ResolvedTool) -> ContentBlock {
    let mut runs = vec![TextRun::plain(&tool.name)
        .bold()
        .linked(tool.url.as_deref())];
    if !tool.description.is_empty() {
        runs.push(TextRun::plain(format!(" - {}", tool.description)));
    }
    ContentBlock::bulleted(runs)
}

fn tool_toggle(tool: &ResolvedTool) -> ContentBlock {
    let mut children = Vec::new();
    if !tool.description.is_empty() {
        children.push(ContentBlock::paragraph(vec![
            TextRun::plain(&tool.description).italic()
        ]));
    }
    if let Some(url) = &tool.url {
        children.push(ContentBlock::paragraph(vec![
            TextRun::plain("Open workspace link").bold(),
            TextRun::plain(" -> "),
            TextRun::plain(url).linked(Some(url)).colored(Color::Blue),
        ]));
    }
    ContentBlock::Toggle {
        rich_text: vec![TextRun::plain(&tool.name).bold()],
        children,
    }
}

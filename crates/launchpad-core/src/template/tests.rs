use std::collections::BTreeMap;

use jiff::civil::date;

use super::*;
use crate::models::ProjectStage;

fn generated_on() -> Date {
    date(2024, 5, 17)
}

fn answers_with_tools(tools: &[&str]) -> ProjectAnswers {
    ProjectAnswers {
        project_name: "  Apollo  ".to_string(),
        description: "  Moonshot program  ".to_string(),
        project_stage: Some(ProjectStage::Launch),
        team_size: "4".into(),
        tools: tools.iter().map(|t| t.to_string()).collect(),
        tool_links: BTreeMap::new(),
    }
}

/// Index of the heading with `text` among the top-level blocks.
fn heading_index(payload: &NotionPayload, text: &str) -> usize {
    payload
        .children
        .iter()
        .position(|block| {
            matches!(block, ContentBlock::Heading { .. }) && block.plain_text() == text
        })
        .unwrap_or_else(|| panic!("heading {text} missing"))
}

fn plain_texts(blocks: &[ContentBlock]) -> Vec<String> {
    blocks.iter().map(ContentBlock::plain_text).collect()
}

#[test]
fn test_blank_answers_use_placeholders() {
    let payload = build_payload(&ProjectAnswers::default(), generated_on());

    assert_eq!(payload.title(), "Untitled project");
    assert_eq!(
        payload.children[1].plain_text(),
        "'Untitled project' workspace is ready to share."
    );
    assert_eq!(payload.children[3].plain_text(), "Stage: Not specified");
    assert_eq!(payload.children[4].plain_text(), "Team size: Not specified");
    assert_eq!(payload.children[5].plain_text(), "Tools connected: 0");
    assert_eq!(payload.children[6].plain_text(), "Generated on: 2024-05-17");

    let shortcuts = heading_index(&payload, "Quick shortcuts");
    assert_eq!(
        payload.children[shortcuts + 1],
        ContentBlock::paragraph(vec![TextRun::plain(NO_SHORTCUTS)])
    );
    assert_eq!(
        payload.children[shortcuts + 2].plain_text(),
        ProjectStage::Discovery.focus()
    );

    let playbook = heading_index(&payload, "Stage playbook");
    assert_eq!(
        plain_texts(&payload.children[playbook + 1..playbook + 4]),
        ProjectStage::Discovery.playbook().to_vec()
    );

    let detail = heading_index(&payload, "Connected tools detail");
    assert_eq!(
        payload.children[detail + 1].plain_text(),
        NO_TOOLS_DETAIL.to_string()
    );
}

#[test]
fn test_no_quote_for_blank_description() {
    let payload = build_payload(&ProjectAnswers::default(), generated_on());
    assert!(!payload
        .children
        .iter()
        .any(|block| matches!(block, ContentBlock::Quote { .. })));
}

#[test]
fn test_section_order_is_fixed() {
    let payload = build_payload(&answers_with_tools(&["github"]), generated_on());
    let kinds: Vec<&str> = payload.children.iter().map(ContentBlock::block_type).collect();

    assert_eq!(
        kinds,
        vec![
            "divider",
            "callout",
            "heading_2",
            "bulleted_list_item",
            "bulleted_list_item",
            "bulleted_list_item",
            "bulleted_list_item",
            "quote",
            "heading_2",
            "bulleted_list_item",
            "callout",
            "divider",
            "heading_2",
            "to_do",
            "to_do",
            "to_do",
            "divider",
            "heading_2",
            "bulleted_list_item",
            "bulleted_list_item",
            "bulleted_list_item",
            "toggle",
            "callout",
            "heading_2",
            "to_do",
            "to_do",
            "to_do",
            "callout",
            "divider",
            "heading_2",
            "toggle",
            "divider",
        ]
    );
}

#[test]
fn test_stage_drives_hero_focus_and_playbook() {
    let payload = build_payload(&answers_with_tools(&[]), generated_on());

    assert_eq!(payload.title(), "Apollo");
    assert_eq!(
        payload.children[1].plain_text(),
        "'Apollo' is currently in the Launch stage."
    );
    assert_eq!(payload.children[3].plain_text(), "Stage: Launch");
    assert_eq!(
        payload.children[7],
        ContentBlock::Quote {
            rich_text: vec![TextRun::plain("Moonshot program")],
        }
    );

    let shortcuts = heading_index(&payload, "Quick shortcuts");
    assert_eq!(
        payload.children[shortcuts + 2].plain_text(),
        format!("Launch focus: {}", ProjectStage::Launch.focus())
    );

    let playbook = heading_index(&payload, "Stage playbook");
    assert_eq!(
        plain_texts(&payload.children[playbook + 1..playbook + 4]),
        ProjectStage::Launch.playbook().to_vec()
    );
}

#[test]
fn test_team_size_pluralization() {
    let mut answers = ProjectAnswers {
        team_size: "1".into(),
        ..ProjectAnswers::default()
    };
    let payload = build_payload(&answers, generated_on());
    assert_eq!(payload.children[4].plain_text(), "Team size: 1 person");

    answers.team_size = "4".into();
    let payload = build_payload(&answers, generated_on());
    assert_eq!(payload.children[4].plain_text(), "Team size: 4 people");
}

#[test]
fn test_unknown_tools_are_dropped() {
    let answers = answers_with_tools(&["github", "jira", "slack"]);

    let tools = resolve_tools(&answers);
    let ids: Vec<&str> = tools.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["github", "slack"]);

    let payload = build_payload(&answers, generated_on());
    assert_eq!(payload.children[5].plain_text(), "Tools connected: 2");
}

#[test]
fn test_link_override_wins_over_catalog() {
    let mut answers = answers_with_tools(&["github", "figma"]);
    answers.tool_links.insert(
        "github".to_string(),
        Some(" https://github.com/apollo ".to_string()),
    );
    answers
        .tool_links
        .insert("figma".to_string(), Some("   ".to_string()));

    let tools = resolve_tools(&answers);
    assert_eq!(tools[0].url.as_deref(), Some("https://github.com/apollo"));
    assert_eq!(tools[1].url.as_deref(), Some("https://www.figma.com/"));
}

#[test]
fn test_quick_link_runs() {
    let payload = build_payload(&answers_with_tools(&["slack"]), generated_on());
    let shortcuts = heading_index(&payload, "Quick shortcuts");
    let runs = payload.children[shortcuts + 1].rich_text();

    assert_eq!(runs[0].content, "Slack");
    assert!(runs[0].bold);
    assert_eq!(runs[0].link.as_deref(), Some("https://slack.com/"));
    assert_eq!(
        runs[1].content,
        " - Context-rich messaging and automations for fast-moving teams."
    );
}

#[test]
fn test_tool_detail_toggle() {
    let payload = build_payload(&answers_with_tools(&["linear"]), generated_on());
    let detail = heading_index(&payload, "Connected tools detail");
    let toggle = &payload.children[detail + 1];

    assert_eq!(toggle.plain_text(), "Linear");
    assert!(toggle.rich_text()[0].bold);

    let children = toggle.children();
    assert_eq!(children.len(), 2);
    assert!(children[0].rich_text()[0].italic);
    assert_eq!(
        children[1].plain_text(),
        "Open workspace link -> https://linear.app/"
    );
    let link_run = &children[1].rich_text()[2];
    assert_eq!(link_run.link.as_deref(), Some("https://linear.app/"));
    assert_eq!(link_run.color, Color::Blue);
}

#[test]
fn test_only_toggles_nest() {
    let payload = build_payload(&answers_with_tools(&["notion", "discord"]), generated_on());
    for block in &payload.children {
        if !matches!(block, ContentBlock::Toggle { .. }) {
            assert!(block.children().is_empty());
        }
        for child in block.children() {
            assert!(child.children().is_empty());
        }
    }
}

#[test]
fn test_build_is_deterministic() {
    let answers = answers_with_tools(&["github", "figma"]);
    assert_eq!(
        build_payload(&answers, generated_on()),
        build_payload(&answers, generated_on())
    );
}

#[test]
fn test_payload_wire_shape() {
    let payload = build_payload(&answers_with_tools(&[]), generated_on());
    let json = serde_json::to_value(&payload).unwrap();

    assert_eq!(
        json["properties"]["title"]["title"][0]["text"]["content"],
        "Apollo"
    );
    assert_eq!(json["children"][0]["type"], "divider");
    assert_eq!(json["children"][1]["callout"]["color"], "purple_background");
}

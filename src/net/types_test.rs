use super::*;

const EXPERIENCE_JSON: &str = include_str!("../../site/data/experience.json");
const TOOLS_JSON: &str = include_str!("../../site/data/tools.json");
const PROJECTS_JSON: &str = include_str!("../../site/data/projects.json");
const CONTACT_JSON: &str = include_str!("../../site/data/contact.json");

// =============================================================
// Sample documents
// =============================================================

#[test]
fn sample_experience_parses() {
    let entries: Vec<ExperienceEntry> = serde_json::from_str(EXPERIENCE_JSON).unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].id, 1);
    assert_eq!(entries[0].location.as_deref(), Some("Bristol, UK"));
    assert_eq!(entries[2].location, None);
    assert!(entries[2].highlights.is_empty());
    assert!(entries[2].tools.is_empty());
}

#[test]
fn sample_tools_parse() {
    let tools: Vec<Tool> = serde_json::from_str(TOOLS_JSON).unwrap();
    assert_eq!(tools.len(), 6);
    assert_eq!(tools[0].level, Some(ToolLevel::Proficient));
    assert_eq!(tools[5].level, None);
}

#[test]
fn sample_projects_parse_with_fallback_kind() {
    let projects: Vec<Project> = serde_json::from_str(PROJECTS_JSON).unwrap();
    let kinds: Vec<_> = projects.iter().map(|p| p.kind).collect();
    assert_eq!(kinds, vec![ProjectKind::Web, ProjectKind::Download, ProjectKind::Web]);
}

#[test]
fn sample_contact_parses() {
    let contact: ContactInfo = serde_json::from_str(CONTACT_JSON).unwrap();
    assert_eq!(contact.email, "sam@example.com");
    assert_eq!(contact.other.len(), 2);
    assert_eq!(contact.other[1].link_text, "@sam@mastodon.example");
}

// =============================================================
// ExperienceEntry
// =============================================================

#[test]
fn experience_id_accepts_numeric_string() {
    let entry: ExperienceEntry = serde_json::from_value(serde_json::json!({
        "id": "7",
        "role": "Engineer",
        "company": "Acme"
    }))
    .unwrap();
    assert_eq!(entry.id, 7);
    assert_eq!(entry.start, None);
}

#[test]
fn experience_id_rejects_non_numeric_string() {
    let result = serde_json::from_value::<ExperienceEntry>(serde_json::json!({
        "id": "seven",
        "role": "Engineer",
        "company": "Acme"
    }));
    assert!(result.is_err());
}

#[test]
fn experience_id_accepts_integral_float() {
    let entry: ExperienceEntry = serde_json::from_value(serde_json::json!({
        "id": 2.0,
        "role": "Engineer",
        "company": "Acme"
    }))
    .unwrap();
    assert_eq!(entry.id, 2);
}

#[test]
fn experience_id_rejects_fractional_float() {
    let result = serde_json::from_value::<ExperienceEntry>(serde_json::json!({
        "id": 2.5,
        "role": "Engineer",
        "company": "Acme"
    }));
    assert!(result.is_err());
}

#[test]
fn experience_null_optionals_decode_as_empty() {
    let entry: ExperienceEntry = serde_json::from_value(serde_json::json!({
        "id": 4,
        "role": "Engineer",
        "company": "Acme",
        "location": null,
        "start": null,
        "end": null,
        "summary": null,
        "highlights": null,
        "tools": null
    }))
    .unwrap();
    assert_eq!(entry.location, None);
    assert_eq!(entry.start, None);
    assert_eq!(entry.end, None);
    assert_eq!(entry.summary, "");
    assert!(entry.highlights.is_empty());
    assert!(entry.tools.is_empty());
}

#[test]
fn experience_ignores_unknown_fields_and_blank_location() {
    let entry: ExperienceEntry = serde_json::from_value(serde_json::json!({
        "id": 2,
        "role": "Engineer",
        "company": "Acme",
        "location": "",
        "team": "platform"
    }))
    .unwrap();
    assert_eq!(entry.location, None);
}

// =============================================================
// ToolLevel
// =============================================================

#[test]
fn tool_level_unknown_label_is_kept() {
    let tool: Tool = serde_json::from_value(serde_json::json!({
        "name": "Zig",
        "level": "curious"
    }))
    .unwrap();
    assert_eq!(tool.level, Some(ToolLevel::Other("curious".to_owned())));
    assert!(!tool.is_proficient());
}

#[test]
fn tool_level_ranks_only_proficient_first() {
    assert_eq!(ToolLevel::Proficient.rank(), 0);
    assert_eq!(ToolLevel::Familiar.rank(), 1);
    assert_eq!(ToolLevel::Other("expert".to_owned()).rank(), 1);
}

#[test]
fn tool_level_display_label_capitalizes_words() {
    assert_eq!(ToolLevel::Proficient.display_label(), "Proficient");
    assert_eq!(ToolLevel::Other("day to day".to_owned()).display_label(), "Day To Day");
}

#[test]
fn tool_level_is_case_sensitive() {
    assert_eq!(ToolLevel::from_label("Proficient"), ToolLevel::Other("Proficient".to_owned()));
}

// =============================================================
// Project / Contact
// =============================================================

#[test]
fn project_kind_defaults_to_web_when_missing() {
    let project: Project = serde_json::from_value(serde_json::json!({
        "title": "Site",
        "url": "https://example.com"
    }))
    .unwrap();
    assert_eq!(project.kind, ProjectKind::Web);
    assert_eq!(project.kind.as_str(), "web");
}

#[test]
fn project_null_type_behaves_like_web() {
    let project: Project = serde_json::from_value(serde_json::json!({
        "title": "Site",
        "url": "https://example.com",
        "type": null
    }))
    .unwrap();
    assert_eq!(project.kind, ProjectKind::Web);
}

#[test]
fn project_non_string_type_behaves_like_web() {
    let project: Project = serde_json::from_value(serde_json::json!({
        "title": "Site",
        "url": "https://example.com",
        "type": 3
    }))
    .unwrap();
    assert_eq!(project.kind, ProjectKind::Web);
}

#[test]
fn project_download_type_is_exact() {
    assert_eq!(ProjectKind::from_value(&serde_json::json!("download")), ProjectKind::Download);
    assert_eq!(ProjectKind::from_value(&serde_json::json!("Download")), ProjectKind::Web);
}

#[test]
fn project_null_description_and_thumbnail_decode_as_empty() {
    let project: Project = serde_json::from_value(serde_json::json!({
        "title": "Site",
        "url": "https://example.com",
        "description": null,
        "thumbnail": null
    }))
    .unwrap();
    assert_eq!(project.description, "");
    assert_eq!(project.thumbnail, "");
}

#[test]
fn contact_null_other_decodes_as_empty() {
    let contact: ContactInfo = serde_json::from_value(serde_json::json!({
        "name": "Sam",
        "email": "sam@example.com",
        "other": null
    }))
    .unwrap();
    assert!(contact.other.is_empty());
}

#[test]
fn contact_optional_fields_default_to_none() {
    let contact: ContactInfo = serde_json::from_value(serde_json::json!({
        "name": "Sam",
        "email": "sam@example.com",
        "github": ""
    }))
    .unwrap();
    assert_eq!(contact.location, None);
    assert_eq!(contact.github, None);
    assert_eq!(contact.linkedin, None);
    assert!(contact.other.is_empty());
}

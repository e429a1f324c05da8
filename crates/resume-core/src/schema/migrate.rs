//! Snapshot migration — upgrades anything the app ever persisted into the
//! current shape.
//!
//! Decode order: attempt a strict current-shape decode first, then fall
//! back to a lenient legacy decoder whose per-field untagged enums absorb
//! the older shapes (`skills` as a comma-joined string or a flat list,
//! project `techStack` as a comma-joined string, project `link` instead
//! of `githubUrl`). Absent or unparsable input degrades to the canonical
//! empty snapshot; migration never fails.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use super::{
    new_entry_id, EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry, ResumeSnapshot,
    SkillCategories, TemplateId, DEFAULT_THEME_COLOR,
};

/// Migrates raw persisted text (or nothing) into a current-shape snapshot.
///
/// Unparsable input is logged and discarded, never propagated.
pub fn migrate_raw(raw: Option<&str>) -> ResumeSnapshot {
    let Some(raw) = raw else {
        return ResumeSnapshot::empty();
    };
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => migrate_value(value),
        Err(err) => {
            warn!("discarding unparsable persisted resume: {err}");
            ResumeSnapshot::empty()
        }
    }
}

/// Migrates a parsed JSON document into a current-shape snapshot.
///
/// Idempotent: a current-shape document decodes on the first attempt and
/// passes through unchanged.
pub fn migrate_value(value: Value) -> ResumeSnapshot {
    if let Ok(snapshot) = serde_json::from_value::<ResumeSnapshot>(value.clone()) {
        return snapshot;
    }
    match serde_json::from_value::<RawSnapshot>(value) {
        Ok(raw) => raw.normalize(),
        Err(err) => {
            warn!("discarding unrecognized persisted resume shape: {err}");
            ResumeSnapshot::empty()
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Legacy decoders
// ────────────────────────────────────────────────────────────────────────────

/// Lenient mirror of [`ResumeSnapshot`]: every field optional, every field
/// that ever changed shape decoded through an untagged enum. Missing
/// fields fill from the empty snapshot (right-biased merge — input wins).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawSnapshot {
    personal: PersonalInfo,
    summary: String,
    education: Vec<RawEducation>,
    experience: Vec<RawExperience>,
    projects: Vec<RawProject>,
    skills: RawSkills,
    github_link: String,
    linkedin_link: String,
    template: Option<TemplateId>,
    theme_color: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawEducation {
    id: String,
    institution: String,
    degree: String,
    field: String,
    start_date: String,
    end_date: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawExperience {
    id: String,
    company: String,
    role: String,
    start_date: String,
    end_date: String,
    description: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawProject {
    id: String,
    title: String,
    description: String,
    tech_stack: RawTechStack,
    live_url: String,
    github_url: Option<String>,
    /// Pre-split schema: single `link` field, treated as the GitHub url.
    link: Option<String>,
}

/// `skills` has worn three shapes over time: the current three-category
/// record, a flat list, and a single comma-joined string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawSkills {
    Categorized(SkillCategories),
    Flat(Vec<String>),
    Joined(String),
}

impl Default for RawSkills {
    fn default() -> Self {
        RawSkills::Categorized(SkillCategories::default())
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawTechStack {
    List(Vec<String>),
    Joined(String),
}

impl Default for RawTechStack {
    fn default() -> Self {
        RawTechStack::List(Vec::new())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Normalization
// ────────────────────────────────────────────────────────────────────────────

impl RawSnapshot {
    fn normalize(self) -> ResumeSnapshot {
        ResumeSnapshot {
            personal: self.personal,
            summary: self.summary,
            education: self.education.into_iter().map(RawEducation::normalize).collect(),
            experience: self.experience.into_iter().map(RawExperience::normalize).collect(),
            projects: self.projects.into_iter().map(RawProject::normalize).collect(),
            skills: self.skills.normalize(),
            github_link: self.github_link,
            linkedin_link: self.linkedin_link,
            template: self.template.unwrap_or_default(),
            theme_color: self
                .theme_color
                .unwrap_or_else(|| DEFAULT_THEME_COLOR.to_string()),
        }
    }
}

impl RawEducation {
    fn normalize(self) -> EducationEntry {
        EducationEntry {
            id: ensure_id(self.id, "edu"),
            institution: self.institution,
            degree: self.degree,
            field: self.field,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

impl RawExperience {
    fn normalize(self) -> ExperienceEntry {
        ExperienceEntry {
            id: ensure_id(self.id, "exp"),
            company: self.company,
            role: self.role,
            start_date: self.start_date,
            end_date: self.end_date,
            description: self.description,
        }
    }
}

impl RawProject {
    fn normalize(self) -> ProjectEntry {
        ProjectEntry {
            id: ensure_id(self.id, "proj"),
            title: self.title,
            description: self.description,
            tech_stack: self.tech_stack.normalize(),
            live_url: self.live_url,
            // `githubUrl` wins when both it and the legacy `link` exist.
            github_url: self.github_url.or(self.link).unwrap_or_default(),
        }
    }
}

impl RawSkills {
    fn normalize(self) -> SkillCategories {
        match self {
            RawSkills::Categorized(categories) => categories,
            // A flat list predates categories entirely; there is no
            // reliable category to assign, so it resets to empty.
            RawSkills::Flat(_) => SkillCategories::default(),
            RawSkills::Joined(raw) => SkillCategories {
                technical: split_csv(&raw),
                soft: Vec::new(),
                tools: Vec::new(),
            },
        }
    }
}

impl RawTechStack {
    fn normalize(self) -> Vec<String> {
        match self {
            RawTechStack::List(items) => items,
            RawTechStack::Joined(raw) => split_csv(&raw),
        }
    }
}

/// Splits a comma-joined legacy string: trim each token, drop empties.
fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

fn ensure_id(id: String, prefix: &str) -> String {
    if id.is_empty() {
        new_entry_id(prefix)
    } else {
        id
    }
}

//! Current résumé schema — the single snapshot type every other module
//! consumes, plus the migration boundary in [`migrate`].
//!
//! Persisted keys are camelCase because that is the JSON format every
//! past version of the app wrote; the migrator in this module's
//! submodule upgrades older shapes on read.

pub mod migrate;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Canonical default theme color (teal), as a space-separated HSL triple.
/// The renderer forwards it opaquely; the model never parses it.
pub const DEFAULT_THEME_COLOR: &str = "168 60% 40%";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    /// Opaque unique token, stable for the entry's lifetime. See [`new_entry_id`].
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub id: String,
    pub company: String,
    pub role: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub live_url: String,
    pub github_url: String,
}

/// The three fixed skill categories. The model does not enforce
/// uniqueness within a category; the scorer dedupes before counting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategories {
    #[serde(default)]
    pub technical: Vec<String>,
    #[serde(default)]
    pub soft: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
}

impl SkillCategories {
    pub fn is_empty(&self) -> bool {
        self.technical.is_empty() && self.soft.is_empty() && self.tools.is_empty()
    }
}

/// Visual template selector. Serialized as a lowercase tag; any unknown
/// or unset tag decodes to `Classic`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TemplateId {
    #[default]
    Classic,
    Modern,
    Minimal,
}

impl TemplateId {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "modern" => TemplateId::Modern,
            "minimal" => TemplateId::Minimal,
            _ => TemplateId::Classic,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            TemplateId::Classic => "classic",
            TemplateId::Modern => "modern",
            TemplateId::Minimal => "minimal",
        }
    }
}

impl Serialize for TemplateId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for TemplateId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(TemplateId::from_tag(&tag))
    }
}

/// The complete résumé value at a point in time — immutable by
/// convention, replaced wholesale on each edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeSnapshot {
    pub personal: PersonalInfo,
    pub summary: String,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub skills: SkillCategories,
    pub github_link: String,
    pub linkedin_link: String,
    pub template: TemplateId,
    pub theme_color: String,
}

impl Default for ResumeSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}

impl ResumeSnapshot {
    /// The canonical empty snapshot: all strings empty, all lists empty,
    /// template classic, theme teal. Migration fills gaps from this value.
    pub fn empty() -> Self {
        ResumeSnapshot {
            personal: PersonalInfo::default(),
            summary: String::new(),
            education: Vec::new(),
            experience: Vec::new(),
            projects: Vec::new(),
            skills: SkillCategories::default(),
            github_link: String::new(),
            linkedin_link: String::new(),
            template: TemplateId::Classic,
            theme_color: DEFAULT_THEME_COLOR.to_string(),
        }
    }

    /// The "load sample" fixture — a fully populated snapshot in current shape.
    pub fn sample() -> Self {
        ResumeSnapshot {
            personal: PersonalInfo {
                name: "Anika Sharma".into(),
                email: "anika.sharma@email.com".into(),
                phone: "+91 98765 43210".into(),
                location: "Bangalore, India".into(),
            },
            summary: "Full-stack developer with 2+ years building scalable web \
                      applications. Passionate about clean architecture, developer \
                      tooling, and AI-powered products."
                .into(),
            education: vec![EducationEntry {
                id: "edu-1".into(),
                institution: "PES University".into(),
                degree: "B.Tech".into(),
                field: "Computer Science".into(),
                start_date: "2019".into(),
                end_date: "2023".into(),
            }],
            experience: vec![
                ExperienceEntry {
                    id: "exp-1".into(),
                    company: "TechCorp India".into(),
                    role: "Software Engineer".into(),
                    start_date: "Jun 2023".into(),
                    end_date: "Present".into(),
                    description: "Built microservices handling 10K+ RPM. Led migration \
                                  from monolith to event-driven architecture using Kafka \
                                  and Node.js."
                        .into(),
                },
                ExperienceEntry {
                    id: "exp-2".into(),
                    company: "StartupXYZ".into(),
                    role: "Frontend Intern".into(),
                    start_date: "Jan 2023".into(),
                    end_date: "May 2023".into(),
                    description: "Developed React dashboard with real-time data \
                                  visualization. Improved page load times by 40% through \
                                  code splitting."
                        .into(),
                },
            ],
            projects: vec![
                ProjectEntry {
                    id: "proj-1".into(),
                    title: "DevBoard".into(),
                    description: "A developer productivity dashboard with GitHub \
                                  integration, task tracking, and code snippet management."
                        .into(),
                    tech_stack: vec![
                        "React".into(),
                        "TypeScript".into(),
                        "Supabase".into(),
                        "Tailwind CSS".into(),
                    ],
                    live_url: String::new(),
                    github_url: "https://github.com/anika/devboard".into(),
                },
                ProjectEntry {
                    id: "proj-2".into(),
                    title: "QuickDeploy CLI".into(),
                    description: "CLI tool for one-command deployment to AWS, Vercel, \
                                  and Railway with environment management."
                        .into(),
                    tech_stack: vec!["Node.js".into(), "Commander.js".into(), "Docker".into()],
                    live_url: String::new(),
                    github_url: "https://github.com/anika/quickdeploy".into(),
                },
            ],
            skills: SkillCategories {
                technical: vec![
                    "TypeScript".into(),
                    "React".into(),
                    "Node.js".into(),
                    "Python".into(),
                    "PostgreSQL".into(),
                ],
                soft: vec![],
                tools: vec![
                    "Docker".into(),
                    "AWS".into(),
                    "Kafka".into(),
                    "Redis".into(),
                    "Git".into(),
                ],
            },
            github_link: "https://github.com/anika-sharma".into(),
            linkedin_link: "https://linkedin.com/in/anika-sharma".into(),
            template: TemplateId::Classic,
            theme_color: DEFAULT_THEME_COLOR.to_string(),
        }
    }
}

/// Generates an opaque, never-reused list-entry id: `"<prefix>-<uuid4>"`.
pub fn new_entry_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4())
}

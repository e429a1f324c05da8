//! Template layout derivation — pure mapping from a snapshot to a
//! render-ready section layout.
//!
//! Each template fixes three things: section ordering, whether section
//! headings are shown, and how sections are partitioned into regions.
//! Sections backed by empty data are omitted everywhere. The theme color
//! is forwarded opaquely; nothing here parses or validates it.

use serde::Serialize;

use crate::schema::{
    EducationEntry, ExperienceEntry, ProjectEntry, ResumeSnapshot, SkillCategories, TemplateId,
};

// ────────────────────────────────────────────────────────────────────────────
// Layout description types
// ────────────────────────────────────────────────────────────────────────────

/// Where a region sits on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// Full-width single column (classic, minimal).
    Single,
    /// Modern's narrow identity/skills/education column.
    Sidebar,
    /// Modern's wide content column.
    Main,
}

/// Visual separator carried by a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DividerStyle {
    None,
    /// Minimal's rule bar with the section name inline, in place of a heading.
    Rule { label: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Header,
    Summary,
    Experience,
    Education,
    Projects,
    Skills,
}

impl SectionKind {
    fn title(&self) -> &'static str {
        match self {
            SectionKind::Header => "Header",
            SectionKind::Summary => "Summary",
            SectionKind::Experience => "Experience",
            SectionKind::Education => "Education",
            SectionKind::Projects => "Projects",
            SectionKind::Skills => "Skills",
        }
    }
}

/// Identity block: name plus the non-empty contact and link lines, in
/// fixed order (email, phone, location / github, linkedin).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityBlock {
    pub name: String,
    pub contact: Vec<String>,
    pub links: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionBody {
    Identity(IdentityBlock),
    Summary(String),
    Experience(Vec<ExperienceEntry>),
    Education(Vec<EducationEntry>),
    Projects(Vec<ProjectEntry>),
    Skills(SkillCategories),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    /// `None` when the template hides headings (minimal, and every header block).
    pub heading: Option<String>,
    pub divider: DividerStyle,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    pub placement: Placement,
    pub sections: Vec<Section>,
}

/// The full render-ready description of one snapshot under one template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeLayout {
    pub template: TemplateId,
    /// Opaque presentation variable, forwarded as-is.
    pub theme_color: String,
    /// Minimal centers its single column; the others are left-aligned.
    pub centered: bool,
    pub regions: Vec<Region>,
}

// ────────────────────────────────────────────────────────────────────────────
// Derivation
// ────────────────────────────────────────────────────────────────────────────

/// Derives the layout for the snapshot's selected template.
///
/// Side-effect free and idempotent: identical inputs yield an identical
/// layout description. The snapshot is never mutated.
pub fn render_layout(data: &ResumeSnapshot) -> ResumeLayout {
    match data.template {
        TemplateId::Classic => classic_layout(data),
        TemplateId::Modern => modern_layout(data),
        TemplateId::Minimal => minimal_layout(data),
    }
}

fn classic_layout(data: &ResumeSnapshot) -> ResumeLayout {
    let sections = [
        header_body(data),
        summary_body(data),
        experience_body(data),
        education_body(data),
        projects_body(data),
        skills_body(data),
    ]
    .into_iter()
    .flatten()
    .map(|(kind, body)| headed_section(kind, body))
    .collect();

    ResumeLayout {
        template: TemplateId::Classic,
        theme_color: data.theme_color.clone(),
        centered: false,
        regions: vec![Region {
            placement: Placement::Single,
            sections,
        }],
    }
}

fn modern_layout(data: &ResumeSnapshot) -> ResumeLayout {
    // Fixed partition: identity, skills, and education in the sidebar;
    // summary, experience, and projects in the main column.
    let sidebar = [header_body(data), skills_body(data), education_body(data)]
        .into_iter()
        .flatten()
        .map(|(kind, body)| headed_section(kind, body))
        .collect();

    let main = [summary_body(data), experience_body(data), projects_body(data)]
        .into_iter()
        .flatten()
        .map(|(kind, body)| headed_section(kind, body))
        .collect();

    ResumeLayout {
        template: TemplateId::Modern,
        theme_color: data.theme_color.clone(),
        centered: false,
        regions: vec![
            Region {
                placement: Placement::Sidebar,
                sections: sidebar,
            },
            Region {
                placement: Placement::Main,
                sections: main,
            },
        ],
    }
}

fn minimal_layout(data: &ResumeSnapshot) -> ResumeLayout {
    let sections = [
        header_body(data),
        summary_body(data),
        experience_body(data),
        education_body(data),
        projects_body(data),
        skills_body(data),
    ]
    .into_iter()
    .flatten()
    .map(|(kind, body)| ruled_section(kind, body))
    .collect();

    ResumeLayout {
        template: TemplateId::Minimal,
        theme_color: data.theme_color.clone(),
        centered: true,
        regions: vec![Region {
            placement: Placement::Single,
            sections,
        }],
    }
}

/// Section with a visible heading (classic, modern). Header blocks never
/// carry a heading.
fn headed_section(kind: SectionKind, body: SectionBody) -> Section {
    let heading = match kind {
        SectionKind::Header => None,
        other => Some(other.title().to_string()),
    };
    Section {
        kind,
        heading,
        divider: DividerStyle::None,
        body,
    }
}

/// Minimal's styling: no heading, rule divider with the name inline.
fn ruled_section(kind: SectionKind, body: SectionBody) -> Section {
    let divider = match kind {
        SectionKind::Header => DividerStyle::None,
        other => DividerStyle::Rule {
            label: other.title().to_string(),
        },
    };
    Section {
        kind,
        heading: None,
        divider,
        body,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Section bodies (None ⇒ backing data empty ⇒ section omitted)
// ────────────────────────────────────────────────────────────────────────────

fn header_body(data: &ResumeSnapshot) -> Option<(SectionKind, SectionBody)> {
    let contact: Vec<String> = [
        &data.personal.email,
        &data.personal.phone,
        &data.personal.location,
    ]
    .into_iter()
    .filter(|value| !value.is_empty())
    .cloned()
    .collect();

    let links: Vec<String> = [&data.github_link, &data.linkedin_link]
        .into_iter()
        .filter(|value| !value.is_empty())
        .cloned()
        .collect();

    if data.personal.name.is_empty() && contact.is_empty() && links.is_empty() {
        return None;
    }

    Some((
        SectionKind::Header,
        SectionBody::Identity(IdentityBlock {
            name: data.personal.name.clone(),
            contact,
            links,
        }),
    ))
}

fn summary_body(data: &ResumeSnapshot) -> Option<(SectionKind, SectionBody)> {
    if data.summary.trim().is_empty() {
        return None;
    }
    Some((SectionKind::Summary, SectionBody::Summary(data.summary.clone())))
}

fn experience_body(data: &ResumeSnapshot) -> Option<(SectionKind, SectionBody)> {
    if data.experience.is_empty() {
        return None;
    }
    Some((
        SectionKind::Experience,
        SectionBody::Experience(data.experience.clone()),
    ))
}

fn education_body(data: &ResumeSnapshot) -> Option<(SectionKind, SectionBody)> {
    if data.education.is_empty() {
        return None;
    }
    Some((
        SectionKind::Education,
        SectionBody::Education(data.education.clone()),
    ))
}

fn projects_body(data: &ResumeSnapshot) -> Option<(SectionKind, SectionBody)> {
    if data.projects.is_empty() {
        return None;
    }
    Some((
        SectionKind::Projects,
        SectionBody::Projects(data.projects.clone()),
    ))
}

fn skills_body(data: &ResumeSnapshot) -> Option<(SectionKind, SectionBody)> {
    if data.skills.is_empty() {
        return None;
    }
    Some((SectionKind::Skills, SectionBody::Skills(data.skills.clone())))
}

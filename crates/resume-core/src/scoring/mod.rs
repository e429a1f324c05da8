//! ATS scoring — deterministic completeness score over a snapshot.
//!
//! Eleven independently-evaluated rules, each worth a fixed point value;
//! points sum and clamp to 100, and every failed rule emits its suggestion
//! in rule-table order. No randomness, no wall clock, no hidden state:
//! structurally equal snapshots always produce identical reports.

pub mod discipline;

use std::collections::HashSet;

use serde::Serialize;

use crate::schema::{ResumeSnapshot, SkillCategories};
use crate::scoring::discipline::ACTION_VERBS;

/// Number of distinct skills required by the skills rule.
const SKILL_TARGET: usize = 5;

/// Score band classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreLevel {
    #[serde(rename = "Needs Work")]
    NeedsWork,
    #[serde(rename = "Getting There")]
    GettingThere,
    #[serde(rename = "Strong Resume")]
    StrongResume,
}

impl ScoreLevel {
    fn from_score(score: u32) -> Self {
        if score >= 71 {
            ScoreLevel::StrongResume
        } else if score >= 41 {
            ScoreLevel::GettingThere
        } else {
            ScoreLevel::NeedsWork
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreLevel::NeedsWork => "Needs Work",
            ScoreLevel::GettingThere => "Getting There",
            ScoreLevel::StrongResume => "Strong Resume",
        }
    }

    /// Fixed display-color token for the band.
    pub fn color(&self) -> &'static str {
        match self {
            ScoreLevel::NeedsWork => "text-red-500",
            ScoreLevel::GettingThere => "text-amber-500",
            ScoreLevel::StrongResume => "text-emerald-500",
        }
    }
}

/// Scoring output: clamped score, band, its color token, and the ordered
/// suggestions for every rule the snapshot failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AtsReport {
    pub score: u32,
    pub level: ScoreLevel,
    pub color: &'static str,
    pub improvements: Vec<String>,
}

/// Computes the ATS report for a snapshot. Pure and infallible.
pub fn calculate_ats_score(data: &ResumeSnapshot) -> AtsReport {
    let mut score = 0u32;
    let mut improvements: Vec<String> = Vec::new();

    // 1. Name provided (+10)
    if !data.personal.name.trim().is_empty() {
        score += 10;
    } else {
        improvements.push("Add your full name (+10)".into());
    }

    // 2. Email provided (+10)
    if !data.personal.email.trim().is_empty() {
        score += 10;
    } else {
        improvements.push("Add a professional email (+10)".into());
    }

    // 3. Summary longer than 50 characters (+10)
    if data.summary.trim().len() > 50 {
        score += 10;
    } else {
        improvements.push("Expand summary to >50 characters (+10)".into());
    }

    // 4. Summary contains an action verb (+10)
    let summary_lower = data.summary.to_lowercase();
    let has_action_verb = ACTION_VERBS
        .iter()
        .any(|verb| summary_lower.contains(&verb.to_lowercase()));
    if has_action_verb {
        score += 10;
    } else {
        improvements.push("Use strong action verbs in summary (+10)".into());
    }

    // 5. At least one experience entry with a real description (+15)
    let has_detailed_experience = data
        .experience
        .iter()
        .any(|exp| exp.description.trim().len() > 10);
    if has_detailed_experience {
        score += 15;
    } else {
        improvements.push("Add at least 1 detailed experience entry (+15)".into());
    }

    // 6. Education present (+10)
    if !data.education.is_empty() {
        score += 10;
    } else {
        improvements.push("Add education details (+10)".into());
    }

    // 7. At least 5 distinct skills across all categories (+10)
    let skill_count = distinct_skill_count(&data.skills);
    if skill_count >= SKILL_TARGET {
        score += 10;
    } else {
        improvements.push(format!(
            "Add more skills (currently {skill_count}/{SKILL_TARGET}) (+10)"
        ));
    }

    // 8. At least one project (+10)
    if !data.projects.is_empty() {
        score += 10;
    } else {
        improvements.push("Add at least 1 project (+10)".into());
    }

    // 9. Phone provided (+5)
    if !data.personal.phone.trim().is_empty() {
        score += 5;
    } else {
        improvements.push("Add phone number (+5)".into());
    }

    // 10. LinkedIn provided (+5)
    if !data.linkedin_link.trim().is_empty() {
        score += 5;
    } else {
        improvements.push("Add LinkedIn profile (+5)".into());
    }

    // 11. GitHub provided (+5)
    if !data.github_link.trim().is_empty() {
        score += 5;
    } else {
        improvements.push("Add GitHub profile (+5)".into());
    }

    let score = score.min(100);
    let level = ScoreLevel::from_score(score);

    AtsReport {
        score,
        level,
        color: level.color(),
        improvements,
    }
}

/// Counts distinct skills across all three categories, case-insensitively.
/// Duplicates the UI failed to suppress must not double-count toward the
/// skills rule; blank entries do not count at all.
pub fn distinct_skill_count(skills: &SkillCategories) -> usize {
    let mut seen: HashSet<String> = HashSet::new();
    for skill in skills
        .technical
        .iter()
        .chain(skills.soft.iter())
        .chain(skills.tools.iter())
    {
        let normalized = skill.trim().to_lowercase();
        if !normalized.is_empty() {
            seen.insert(normalized);
        }
    }
    seen.len()
}

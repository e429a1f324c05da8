//! Plain-text export — the serialization contract behind copy-to-clipboard
//! and the pre-export validation warnings.
//!
//! Output is deterministic: fixed section order (header, SUMMARY,
//! EXPERIENCE, PROJECTS, EDUCATION, SKILLS), empty sections omitted,
//! sections joined by a fixed horizontal rule.

use crate::schema::ResumeSnapshot;

const SECTION_SEPARATOR: &str = "\n\n----------------------------------------\n\n";

/// Pre-export check for critical gaps. Warnings are advisory — the
/// export proceeds regardless.
pub fn validate_for_export(data: &ResumeSnapshot) -> Vec<String> {
    let mut warnings = Vec::new();

    if data.personal.name.trim().is_empty() {
        warnings.push("Name is missing.".to_string());
    }

    if data.experience.is_empty() && data.projects.is_empty() {
        warnings.push("No experience or projects listed.".to_string());
    }

    warnings
}

/// Renders the snapshot as a clean plain-text document.
pub fn render_plain_text(data: &ResumeSnapshot) -> String {
    let mut sections: Vec<String> = Vec::new();

    // Header: uppercased name, then the pipe-joined contact line.
    let mut header = data.personal.name.to_uppercase();
    let contact_parts: Vec<&str> = [
        data.personal.email.as_str(),
        data.personal.phone.as_str(),
        data.personal.location.as_str(),
        data.linkedin_link.as_str(),
        data.github_link.as_str(),
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect();
    if !contact_parts.is_empty() {
        header.push('\n');
        header.push_str(&contact_parts.join(" | "));
    }
    sections.push(header);

    if !data.summary.is_empty() {
        sections.push(format!("SUMMARY\n{}", data.summary));
    }

    if !data.experience.is_empty() {
        let body = data
            .experience
            .iter()
            .map(|exp| {
                let mut entry = format!(
                    "{} at {} ({})",
                    exp.role,
                    exp.company,
                    date_range(&exp.start_date, &exp.end_date)
                );
                if !exp.description.is_empty() {
                    entry.push('\n');
                    entry.push_str(&exp.description);
                }
                entry
            })
            .collect::<Vec<_>>()
            .join("\n\n");
        sections.push(format!("EXPERIENCE\n{body}"));
    }

    if !data.projects.is_empty() {
        let body = data
            .projects
            .iter()
            .map(|proj| {
                let mut entry = proj.title.clone();
                if !proj.tech_stack.is_empty() {
                    entry.push_str(&format!(" [{}]", proj.tech_stack.join(", ")));
                }
                if !proj.description.is_empty() {
                    entry.push('\n');
                    entry.push_str(&proj.description);
                }
                if !proj.live_url.is_empty() {
                    entry.push_str(&format!("\nLive: {}", proj.live_url));
                }
                if !proj.github_url.is_empty() {
                    entry.push_str(&format!("\nGitHub: {}", proj.github_url));
                }
                entry
            })
            .collect::<Vec<_>>()
            .join("\n\n");
        sections.push(format!("PROJECTS\n{body}"));
    }

    if !data.education.is_empty() {
        let body = data
            .education
            .iter()
            .map(|edu| {
                format!(
                    "{} in {}\n{} | {}",
                    edu.degree,
                    edu.field,
                    edu.institution,
                    date_range(&edu.start_date, &edu.end_date)
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n");
        sections.push(format!("EDUCATION\n{body}"));
    }

    // Skills flatten technical → tools → soft.
    let all_skills: Vec<&str> = data
        .skills
        .technical
        .iter()
        .chain(data.skills.tools.iter())
        .chain(data.skills.soft.iter())
        .map(String::as_str)
        .collect();
    if !all_skills.is_empty() {
        sections.push(format!("SKILLS\n{}", all_skills.join(", ")));
    }

    sections.join(SECTION_SEPARATOR)
}

/// `"start - end"`, or just `"start"` when the end date is empty.
fn date_range(start: &str, end: &str) -> String {
    if end.is_empty() {
        start.to_string()
    } else {
        format!("{start} - {end}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{EducationEntry, ExperienceEntry, ProjectEntry};

    #[test]
    fn test_validate_flags_missing_name() {
        let warnings = validate_for_export(&ResumeSnapshot::empty());
        assert!(warnings.contains(&"Name is missing.".to_string()));
        assert!(warnings.contains(&"No experience or projects listed.".to_string()));
    }

    #[test]
    fn test_validate_passes_complete_snapshot() {
        assert!(validate_for_export(&ResumeSnapshot::sample()).is_empty());
    }

    #[test]
    fn test_validate_accepts_projects_without_experience() {
        let mut snapshot = ResumeSnapshot::empty();
        snapshot.personal.name = "Ada".into();
        snapshot.projects.push(ProjectEntry::default());
        assert!(validate_for_export(&snapshot).is_empty());
    }

    #[test]
    fn test_header_name_uppercased_with_contact_line() {
        let text = render_plain_text(&ResumeSnapshot::sample());
        assert!(text.starts_with("ANIKA SHARMA\n"));
        assert!(text.contains(
            "anika.sharma@email.com | +91 98765 43210 | Bangalore, India | \
             https://linkedin.com/in/anika-sharma | https://github.com/anika-sharma"
        ));
    }

    #[test]
    fn test_contact_line_skips_empty_fields_keeps_order() {
        let mut snapshot = ResumeSnapshot::empty();
        snapshot.personal.name = "Ada".into();
        snapshot.personal.phone = "123".into();
        snapshot.github_link = "https://github.com/ada".into();
        let text = render_plain_text(&snapshot);
        assert!(text.starts_with("ADA\n123 | https://github.com/ada"));
    }

    #[test]
    fn test_sections_joined_by_fixed_rule() {
        let text = render_plain_text(&ResumeSnapshot::sample());
        assert!(text.contains("\n\n----------------------------------------\n\n"));
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let mut snapshot = ResumeSnapshot::empty();
        snapshot.personal.name = "Ada".into();
        let text = render_plain_text(&snapshot);
        assert!(!text.contains("SUMMARY"));
        assert!(!text.contains("EXPERIENCE"));
        assert!(!text.contains("PROJECTS"));
        assert!(!text.contains("EDUCATION"));
        assert!(!text.contains("SKILLS"));
    }

    #[test]
    fn test_experience_entry_format() {
        let mut snapshot = ResumeSnapshot::empty();
        snapshot.experience.push(ExperienceEntry {
            id: "exp-1".into(),
            company: "TechCorp".into(),
            role: "Engineer".into(),
            start_date: "Jun 2023".into(),
            end_date: "Present".into(),
            description: "Built services.".into(),
        });
        let text = render_plain_text(&snapshot);
        assert!(text.contains("EXPERIENCE\nEngineer at TechCorp (Jun 2023 - Present)\nBuilt services."));
    }

    #[test]
    fn test_date_range_without_end_date() {
        let mut snapshot = ResumeSnapshot::empty();
        snapshot.experience.push(ExperienceEntry {
            role: "Engineer".into(),
            company: "TechCorp".into(),
            start_date: "Jun 2023".into(),
            ..ExperienceEntry::default()
        });
        let text = render_plain_text(&snapshot);
        assert!(text.contains("Engineer at TechCorp (Jun 2023)"));
    }

    #[test]
    fn test_project_entry_format() {
        let mut snapshot = ResumeSnapshot::empty();
        snapshot.projects.push(ProjectEntry {
            id: "proj-1".into(),
            title: "DevBoard".into(),
            description: "Dashboard.".into(),
            tech_stack: vec!["React".into(), "Go".into()],
            live_url: "https://devboard.app".into(),
            github_url: "https://github.com/x/devboard".into(),
        });
        let text = render_plain_text(&snapshot);
        assert!(text.contains(
            "PROJECTS\nDevBoard [React, Go]\nDashboard.\nLive: https://devboard.app\nGitHub: https://github.com/x/devboard"
        ));
    }

    #[test]
    fn test_education_entry_format() {
        let mut snapshot = ResumeSnapshot::empty();
        snapshot.education.push(EducationEntry {
            id: "edu-1".into(),
            institution: "PES University".into(),
            degree: "B.Tech".into(),
            field: "Computer Science".into(),
            start_date: "2019".into(),
            end_date: "2023".into(),
        });
        let text = render_plain_text(&snapshot);
        assert!(text.contains("EDUCATION\nB.Tech in Computer Science\nPES University | 2019 - 2023"));
    }

    #[test]
    fn test_skills_flattened_technical_then_tools_then_soft() {
        let mut snapshot = ResumeSnapshot::empty();
        snapshot.skills.technical = vec!["Rust".into()];
        snapshot.skills.tools = vec!["Git".into()];
        snapshot.skills.soft = vec!["Writing".into()];
        let text = render_plain_text(&snapshot);
        assert!(text.contains("SKILLS\nRust, Git, Writing"));
    }

    #[test]
    fn test_export_is_deterministic() {
        let snapshot = ResumeSnapshot::sample();
        assert_eq!(render_plain_text(&snapshot), render_plain_text(&snapshot));
    }
}

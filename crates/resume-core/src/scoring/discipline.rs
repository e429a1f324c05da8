//! Bullet discipline — a per-field advisory on a single free-text
//! description, independent of the aggregate ATS score.
//!
//! Two checks, first failure wins: the text must open with a strong
//! action verb, and it must carry at least one measurable-impact
//! character (digit, %, x, k, $).

/// Fixed action-verb vocabulary shared with the summary scoring rule.
pub const ACTION_VERBS: &[&str] = &[
    "Built",
    "Developed",
    "Designed",
    "Implemented",
    "Led",
    "Improved",
    "Created",
    "Optimized",
    "Automated",
    "Managed",
    "Engineered",
    "Architected",
    "Deployed",
    "Reduced",
    "Increased",
    "Streamlined",
    "Initiated",
    "Spearheaded",
    "Orchestrated",
    "Revamped",
];

/// Checks one description for bullet discipline.
///
/// Returns at most one remediation message; empty or whitespace-only
/// text is not flagged.
pub fn check_bullet_discipline(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let first_word = trimmed.split_whitespace().next().unwrap_or_default();
    let starts_with_verb = ACTION_VERBS
        .iter()
        .any(|verb| verb.eq_ignore_ascii_case(first_word));
    if !starts_with_verb {
        return Some("Start with a strong action verb (e.g., Built, Led, Optimized).".into());
    }

    if !has_measurable_impact(trimmed) {
        return Some("Add measurable impact (numbers like %, X, k).".into());
    }

    None
}

/// True when the text carries any quantification marker.
fn has_measurable_impact(text: &str) -> bool {
    text.bytes()
        .any(|b| b.is_ascii_digit() || matches!(b, b'%' | b'x' | b'X' | b'k' | b'$'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_not_flagged() {
        assert_eq!(check_bullet_discipline(""), None);
        assert_eq!(check_bullet_discipline("   \n"), None);
    }

    #[test]
    fn test_disciplined_bullet_passes() {
        assert_eq!(
            check_bullet_discipline("Built microservices handling 10K+ RPM."),
            None
        );
        assert_eq!(
            check_bullet_discipline("Reduced p99 latency by 40% across five services"),
            None
        );
    }

    #[test]
    fn test_verb_match_is_case_insensitive() {
        assert_eq!(check_bullet_discipline("built 3 dashboards"), None);
        assert_eq!(check_bullet_discipline("OPTIMIZED queries, 2x faster"), None);
    }

    #[test]
    fn test_non_verb_start_is_flagged() {
        let msg = check_bullet_discipline("Responsible for the dashboard").unwrap();
        assert!(msg.contains("action verb"));
    }

    #[test]
    fn test_verb_without_numbers_is_flagged() {
        let msg = check_bullet_discipline("Built the company dashboard").unwrap();
        assert!(msg.contains("measurable impact"));
    }

    #[test]
    fn test_first_failing_check_wins() {
        // Fails both checks; only the verb message is returned.
        let msg = check_bullet_discipline("Worked on internal tooling").unwrap();
        assert!(msg.contains("action verb"));
        assert!(!msg.contains("measurable"));
    }

    #[test]
    fn test_currency_and_multiplier_markers_count() {
        assert_eq!(check_bullet_discipline("Automated reports, saved $2M"), None);
        assert_eq!(check_bullet_discipline("Streamlined onboarding to Nx speed"), None);
    }
}

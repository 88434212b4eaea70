use crate::domain::model::MatchResult;
use crate::utils::error::{MatchError, Result};
use std::collections::HashSet;

/// 達到此百分比（含）即視為符合資格
pub const ELIGIBILITY_THRESHOLD: f64 = 60.0;

/// 技能比對用的鍵：去空白、轉小寫、移除所有空白字元
pub fn normalize_skill(skill: &str) -> String {
    skill
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// 技能集合的比對鍵，空字串略過
pub fn normalize_skill_set<S: AsRef<str>>(skills: &[S]) -> HashSet<String> {
    skills
        .iter()
        .map(|s| normalize_skill(s.as_ref()))
        .filter(|key| !key.is_empty())
        .collect()
}

/// 計算技能符合度；必要技能為空時回傳 EmptyRequiredSkills
pub fn evaluate<S, T>(required: &[S], selected: &[T]) -> Result<MatchResult>
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let selected_keys = normalize_skill_set(selected);

    let mut seen = HashSet::new();
    let mut matched = Vec::new();
    let mut missing = Vec::new();

    for label in required {
        let label = label.as_ref();
        let key = normalize_skill(label);
        if key.is_empty() || !seen.insert(key.clone()) {
            continue;
        }

        if selected_keys.contains(&key) {
            matched.push(label.to_string());
        } else {
            missing.push(label.to_string());
        }
    }

    let total = matched.len() + missing.len();
    if total == 0 {
        return Err(MatchError::EmptyRequiredSkills);
    }

    let percent = 100.0 * matched.len() as f64 / total as f64;

    tracing::debug!(
        "Scored {}/{} required skills ({:.2}%)",
        matched.len(),
        total,
        percent
    );

    Ok(MatchResult {
        matched,
        missing,
        percent,
        eligible: percent >= ELIGIBILITY_THRESHOLD,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIVE: [&str; 5] = ["Python", "SQL", "Statistics", "Machine Learning", "Tableau"];

    #[test]
    fn test_normalize_skill() {
        assert_eq!(normalize_skill("  Machine Learning "), "machinelearning");
        assert_eq!(normalize_skill("SQL"), "sql");
        assert_eq!(normalize_skill("Deep\tLearning"), "deeplearning");
        assert_eq!(normalize_skill("   "), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["Machine Learning", " Power BI ", "c++", "Natural Language Processing"] {
            let once = normalize_skill(raw);
            assert_eq!(normalize_skill(&once), once);
        }
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        let first = evaluate(&["Machine Learning"], &["machine learning"]).unwrap();
        assert_eq!(first.matched, vec!["Machine Learning"]);
        assert_eq!(first.percent, 100.0);
        assert!(first.eligible);

        let second = evaluate(&["Machine Learning"], &[" MachineLearning "]).unwrap();
        assert_eq!(second.matched, vec!["Machine Learning"]);
        assert_eq!(second.percent, 100.0);
    }

    #[test]
    fn test_threshold_boundary() {
        let three = evaluate(&FIVE, &["python", "sql", "statistics"]).unwrap();
        assert_eq!(three.percent, 60.0);
        assert!(three.eligible);

        let two = evaluate(&FIVE, &["python", "sql"]).unwrap();
        assert_eq!(two.percent, 40.0);
        assert!(!two.eligible);
        assert_eq!(two.missing, vec!["Statistics", "Machine Learning", "Tableau"]);
    }

    #[test]
    fn test_empty_selection_is_a_valid_outcome() {
        let none: [&str; 0] = [];
        let result = evaluate(&FIVE, &none).unwrap();
        assert_eq!(result.percent, 0.0);
        assert!(!result.eligible);
        assert!(result.matched.is_empty());
        assert_eq!(result.missing, FIVE.to_vec());
    }

    #[test]
    fn test_empty_required_is_rejected() {
        let none: [&str; 0] = [];
        assert!(matches!(
            evaluate(&none, &["python"]),
            Err(MatchError::EmptyRequiredSkills)
        ));
        assert!(matches!(
            evaluate(&["  ", ""], &["python"]),
            Err(MatchError::EmptyRequiredSkills)
        ));
    }

    #[test]
    fn test_duplicate_required_keys_count_once() {
        let result = evaluate(&["Python", "python ", "SQL"], &["PYTHON"]).unwrap();
        assert_eq!(result.matched, vec!["Python"]);
        assert_eq!(result.missing, vec!["SQL"]);
        assert_eq!(result.percent, 50.0);
    }

    #[test]
    fn test_partition_is_disjoint_and_complete() {
        let selections: [&[&str]; 4] = [
            &[],
            &["tableau"],
            &["Python", "Excel", "SQL"],
            &["python", "sql", "statistics", "machine learning", "tableau", "docker"],
        ];

        for selected in selections {
            let result = evaluate(&FIVE, selected).unwrap();
            assert_eq!(result.matched.len() + result.missing.len(), FIVE.len());
            let matched = normalize_skill_set(&result.matched);
            let missing = normalize_skill_set(&result.missing);
            assert!(matched.is_disjoint(&missing));
        }

        let all = evaluate(&FIVE, selections[3]).unwrap();
        assert_eq!(all.percent, 100.0);
        assert!(all.missing.is_empty());
    }
}
